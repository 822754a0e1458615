pub mod create_topic;
pub mod suggest_topics;
pub mod validate_topic;

pub use create_topic::create_topic_handler;
pub use suggest_topics::suggest_topics_handler;
pub use validate_topic::validate_topic_handler;

pub use create_topic::{CreateTopicRequest, TopicResponse};
pub use suggest_topics::{SuggestTopicRequest, SuggestTopicsResponse};
pub use validate_topic::{ValidateTopicRequest, ValidateTopicResponse};
