mod chat_client;
mod topic_repository;

pub use chat_client::{ChatClient, ChatClientError, ChatPrompt};
pub use topic_repository::{CreateTopicData, TopicRepository, TopicRepositoryError, TopicResult};
