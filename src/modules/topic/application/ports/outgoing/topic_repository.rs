use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use uuid::Uuid;

use crate::topic::application::domain::entities::UserId;

// Input DTO for persisting a topic. Name and owner are stored verbatim.
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub name: String,
    pub owner: UserId,
}

// The persisted row as returned to callers, timestamps included.
#[derive(Debug, Clone, Serialize)]
pub struct TopicResult {
    pub id: Uuid,
    pub name: String,
    pub owner: UserId,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(
        &self,
        data: CreateTopicData,
    ) -> Result<TopicResult, TopicRepositoryError>;
}
