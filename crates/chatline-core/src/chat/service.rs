//! Chat service: applies classified input lines to a session.
//!
//! For chat messages this runs the full exchange pipeline:
//! prompt builder -> inference provider -> fallback responder (on failure)
//! -> transcript append. Inference errors never leave this module; they are
//! logged and replaced with a canned answer.

use tracing::{debug, info};

use chatline_types::chat::{ExchangeOutcome, ReplySource, SessionStats, Turn};

use crate::llm::box_provider::BoxInferenceProvider;
use crate::llm::fallback::FallbackResponder;

use super::commands::LineAction;
use super::prompt::PromptBuilder;
use super::session::SessionManager;

/// What the loop should show after handling one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Session ended; show the final statistics.
    Terminated(SessionStats),
    Stats(SessionStats),
    /// Full transcript at the time of the command (may be empty).
    History(Vec<Turn>),
    /// Blank input; ask the user to type something.
    EmptyInput,
    Reply(ExchangeOutcome),
}

/// Runs chat exchanges against an inference provider.
pub struct ChatService {
    provider: BoxInferenceProvider,
}

impl ChatService {
    pub fn new(provider: BoxInferenceProvider) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Apply one classified line to the session.
    pub async fn handle(&self, session: &mut SessionManager, action: LineAction) -> LineOutcome {
        match action {
            LineAction::Quit => {
                session.terminate();
                LineOutcome::Terminated(session.stats())
            }
            LineAction::Stats => LineOutcome::Stats(session.stats()),
            LineAction::History => LineOutcome::History(session.transcript().turns().to_vec()),
            LineAction::Empty => LineOutcome::EmptyInput,
            LineAction::Chat(message) => LineOutcome::Reply(self.exchange(session, &message).await),
        }
    }

    /// Run one chat exchange and record it in the session.
    ///
    /// Always appends exactly two turns and increments the exchange counter.
    pub async fn exchange(&self, session: &mut SessionManager, message: &str) -> ExchangeOutcome {
        let prompt = PromptBuilder::build(session.transcript(), message);
        debug!(
            provider = self.provider.name(),
            prompt_chars = prompt.len(),
            "Sending inference request"
        );

        let outcome = match self.provider.generate(&prompt).await {
            Ok(answer) => ExchangeOutcome {
                answer,
                source: ReplySource::Model,
            },
            Err(reason) => {
                let rule = FallbackResponder::classify(message);
                info!(
                    provider = self.provider.name(),
                    reason = %reason,
                    rule = %rule,
                    "Inference failed, answering with fallback"
                );
                ExchangeOutcome {
                    answer: rule.response().to_string(),
                    source: ReplySource::Fallback { reason },
                }
            }
        };

        session.record_exchange(message, &outcome.answer);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use chatline_types::chat::Speaker;
    use chatline_types::llm::InferenceError;

    use super::*;
    use crate::chat::commands::classify;
    use crate::llm::offline::OfflineProvider;
    use crate::llm::provider::InferenceProvider;

    /// Returns queued results in order and records every prompt it sees.
    struct ScriptedProvider {
        replies: Mutex<VecDeque<Result<String, InferenceError>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedProvider {
        fn new(replies: Vec<Result<String, InferenceError>>) -> (Self, Arc<Mutex<Vec<String>>>) {
            let prompts = Arc::new(Mutex::new(Vec::new()));
            let provider = Self {
                replies: Mutex::new(replies.into()),
                prompts: Arc::clone(&prompts),
            };
            (provider, prompts)
        }
    }

    impl InferenceProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, prompt: &str) -> Result<String, InferenceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(InferenceError::Unavailable))
        }
    }

    fn offline_service() -> ChatService {
        ChatService::new(BoxInferenceProvider::new(OfflineProvider))
    }

    #[tokio::test]
    async fn test_hello_with_network_down_returns_greeting() {
        let service = offline_service();
        let mut session = SessionManager::new();

        let reply = match service.handle(&mut session, classify("hello")).await {
            LineOutcome::Reply(reply) => reply,
            other => panic!("expected reply, got {other:?}"),
        };
        assert!(reply.answer.contains("Hello! I'm an AI assistant."));
        assert_eq!(
            reply.source,
            ReplySource::Fallback {
                reason: InferenceError::Unavailable
            }
        );
    }

    #[tokio::test]
    async fn test_quit_as_first_line_reports_zero_messages() {
        let service = offline_service();
        let mut session = SessionManager::new();

        let outcome = service.handle(&mut session, classify("quit")).await;
        assert_eq!(
            outcome,
            LineOutcome::Terminated(SessionStats {
                total_messages: 0,
                conversation_turns: 0
            })
        );
        assert!(!session.is_running());
    }

    #[tokio::test]
    async fn test_two_exchanges_with_network_failing() {
        let service = offline_service();
        let mut session = SessionManager::new();

        service.handle(&mut session, classify("hello")).await;
        service.handle(&mut session, classify("tell me about python")).await;

        let speakers: Vec<Speaker> = session
            .transcript()
            .turns()
            .iter()
            .map(|t| t.speaker())
            .collect();
        assert_eq!(
            speakers,
            vec![Speaker::User, Speaker::Assistant, Speaker::User, Speaker::Assistant]
        );
        assert_eq!(session.exchange_count(), 2);
        assert!(session.is_running());
    }

    #[tokio::test]
    async fn test_meta_commands_never_append() {
        let service = offline_service();
        let mut session = SessionManager::new();
        service.handle(&mut session, classify("hi")).await;

        for line in ["stats", "history", "", "STATS"] {
            service.handle(&mut session, classify(line)).await;
        }
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.exchange_count(), 1);

        service.handle(&mut session, classify("bye")).await;
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_history_on_empty_transcript() {
        let service = offline_service();
        let mut session = SessionManager::new();

        let outcome = service.handle(&mut session, LineAction::History).await;
        assert_eq!(outcome, LineOutcome::History(Vec::new()));
        assert!(session.is_running());
        assert_eq!(session.exchange_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_line_outcome() {
        let service = offline_service();
        let mut session = SessionManager::new();
        assert_eq!(
            service.handle(&mut session, classify("   ")).await,
            LineOutcome::EmptyInput
        );
        assert!(session.is_running());
    }

    #[tokio::test]
    async fn test_model_answer_is_recorded() {
        let (provider, _) = ScriptedProvider::new(vec![Ok("Rust is great.".to_string())]);
        let service = ChatService::new(BoxInferenceProvider::new(provider));
        let mut session = SessionManager::new();

        let reply = service.exchange(&mut session, "what about rust?").await;
        assert_eq!(reply.answer, "Rust is great.");
        assert_eq!(reply.source, ReplySource::Model);
        assert_eq!(session.transcript().turns()[1].text(), "Rust is great.");
    }

    #[tokio::test]
    async fn test_failure_after_success_falls_back() {
        let (provider, _) = ScriptedProvider::new(vec![
            Ok("first".to_string()),
            Err(InferenceError::Status {
                status: 503,
                body: "loading".to_string(),
            }),
        ]);
        let service = ChatService::new(BoxInferenceProvider::new(provider));
        let mut session = SessionManager::new();

        service.exchange(&mut session, "one").await;
        let reply = service.exchange(&mut session, "thanks").await;
        assert_eq!(reply.answer, "You're welcome! Feel free to ask anything else.");
        assert!(reply.source.is_fallback());
        assert_eq!(session.exchange_count(), 2);
    }

    #[tokio::test]
    async fn test_prompt_is_built_from_prior_transcript() {
        let (provider, prompts) =
            ScriptedProvider::new(vec![Ok("A1".to_string()), Ok("A2".to_string())]);
        let service = ChatService::new(BoxInferenceProvider::new(provider));
        let mut session = SessionManager::new();

        service.exchange(&mut session, "Q1").await;
        service.exchange(&mut session, "Q2").await;

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts[0], "User: Q1\nAssistant: ");
        assert_eq!(prompts[1], "User: Q1\nAssistant: A1\n\nUser: Q2\nAssistant: ");
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(offline_service().provider_name(), "offline");
    }
}
