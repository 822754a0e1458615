mod create_topic_service;
mod suggest_topics_service;
mod validate_topic_service;

pub use create_topic_service::CreateTopicService;
pub use suggest_topics_service::SuggestTopicsService;
pub use validate_topic_service::ValidateTopicService;
