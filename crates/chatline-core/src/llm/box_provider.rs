//! BoxInferenceProvider -- object-safe dynamic dispatch wrapper for InferenceProvider.
//!
//! 1. Define an object-safe `InferenceProviderDyn` trait with boxed futures
//! 2. Blanket-impl `InferenceProviderDyn` for all `T: InferenceProvider`
//! 3. `BoxInferenceProvider` wraps `Box<dyn InferenceProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use chatline_types::llm::InferenceError;

use super::provider::InferenceProvider;

/// Object-safe version of [`InferenceProvider`] with boxed futures.
pub trait InferenceProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, InferenceError>> + Send + 'a>>;
}

impl<T: InferenceProvider> InferenceProviderDyn for T {
    fn name(&self) -> &str {
        InferenceProvider::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, InferenceError>> + Send + 'a>> {
        Box::pin(self.generate(prompt))
    }
}

/// Type-erased inference provider.
///
/// Lets the binary pick the HTTP backend or the offline backend from
/// configuration at runtime.
pub struct BoxInferenceProvider {
    inner: Box<dyn InferenceProviderDyn + Send + Sync>,
}

impl BoxInferenceProvider {
    /// Wrap a concrete `InferenceProvider` in a type-erased box.
    pub fn new<T: InferenceProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
        self.inner.generate_boxed(prompt).await
    }
}
