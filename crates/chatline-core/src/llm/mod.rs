//! Inference provider abstractions for chatline.
//!
//! - `InferenceProvider`: RPITIT trait for concrete backends
//! - `BoxInferenceProvider`: object-safe wrapper for runtime selection
//! - `OfflineProvider`: a backend that is never reachable
//! - `FallbackResponder`: canned answers used when inference fails

pub mod box_provider;
pub mod fallback;
pub mod offline;
pub mod provider;
