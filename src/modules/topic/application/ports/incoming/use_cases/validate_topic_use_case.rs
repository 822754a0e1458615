use async_trait::async_trait;

use crate::topic::application::domain::entities::ValidationResult;

//
// ──────────────────────────────────────────────────────────
// Validate Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ValidateTopicCommand {
    name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidateTopicCommandError {
    #[error("Name cannot be empty")]
    EmptyName,
}

impl ValidateTopicCommand {
    /// Rejects names that are empty after trimming, but keeps the raw value:
    /// the upstream prompt quotes the name exactly as submitted.
    pub fn new(name: String) -> Result<Self, ValidateTopicCommandError> {
        if name.trim().is_empty() {
            return Err(ValidateTopicCommandError::EmptyName);
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidateTopicError {
    #[error("No topic suggested")]
    EmptyModelReply,

    /// The model judged the topic unsuitable; the reply text carries the
    /// reason and an alternative suggestion.
    #[error("{reply}")]
    TopicRejected { reply: String },

    #[error("Chat service error: {0}")]
    ChatServiceFailure(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ValidateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ValidateTopicCommand,
    ) -> Result<ValidationResult, ValidateTopicError>;
}
