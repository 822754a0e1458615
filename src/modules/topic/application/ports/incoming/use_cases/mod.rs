mod create_topic_use_case;
mod suggest_topics_use_case;
mod validate_topic_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use suggest_topics_use_case::{
    SuggestTopicsCommand, SuggestTopicsCommandError, SuggestTopicsError, SuggestTopicsUseCase,
};
pub use validate_topic_use_case::{
    ValidateTopicCommand, ValidateTopicCommandError, ValidateTopicError, ValidateTopicUseCase,
};
