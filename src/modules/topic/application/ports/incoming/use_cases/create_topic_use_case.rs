use async_trait::async_trait;

use crate::topic::application::{
    domain::entities::UserId, ports::outgoing::TopicResult,
};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateTopicCommand {
    name: String,
    owner: UserId,
}

#[derive(Debug, thiserror::Error)]
pub enum CreateTopicCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("User id is required")]
    MissingUserId,
}

impl CreateTopicCommand {
    /// Both values are stored exactly as submitted. The name only has to be
    /// non-empty after trimming; the owner id only has to be non-empty, so a
    /// whitespace-only id passes.
    pub fn new(name: String, user_id: String) -> Result<Self, CreateTopicCommandError> {
        if name.trim().is_empty() {
            return Err(CreateTopicCommandError::EmptyName);
        }

        if user_id.is_empty() {
            return Err(CreateTopicCommandError::MissingUserId);
        }

        Ok(Self {
            name,
            owner: UserId::new(user_id),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError>;
}
