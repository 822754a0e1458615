pub mod sea_orm_entity;

mod openai_chat_client;
mod topic_repository_postgres;

pub use openai_chat_client::OpenAiChatClient;
pub use topic_repository_postgres::TopicRepositoryPostgres;
