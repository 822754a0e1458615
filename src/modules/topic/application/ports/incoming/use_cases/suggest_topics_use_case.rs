use async_trait::async_trait;

use crate::topic::application::domain::entities::SuggestionResult;

//
// ──────────────────────────────────────────────────────────
// Suggest Topics Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SuggestTopicsCommand {
    topic: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SuggestTopicsCommandError {
    #[error("Topic cannot be empty")]
    EmptyTopic,
}

impl SuggestTopicsCommand {
    pub fn new(topic: String) -> Result<Self, SuggestTopicsCommandError> {
        let topic = topic.trim();

        if topic.is_empty() {
            return Err(SuggestTopicsCommandError::EmptyTopic);
        }

        Ok(Self {
            topic: topic.to_string(),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SuggestTopicsError {
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    #[error("No topic suggested")]
    EmptyModelReply,

    #[error("No valid topics")]
    NoTopicsParsed,

    #[error("Chat service error: {0}")]
    ChatServiceFailure(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SuggestTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SuggestTopicsCommand,
    ) -> Result<SuggestionResult, SuggestTopicsError>;
}
