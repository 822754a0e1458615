use async_trait::async_trait;

use crate::topic::application::domain::entities::{SuggestionResult, ValidationResult};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, SuggestTopicsCommand,
    SuggestTopicsError, SuggestTopicsUseCase, ValidateTopicCommand, ValidateTopicError,
    ValidateTopicUseCase,
};
use crate::topic::application::ports::outgoing::TopicResult;

// Default stubs panic when reached, so a test that only exercises input
// validation fails loudly if the handler slips past it.

#[derive(Default, Clone)]
pub struct StubSuggestTopicsUseCase;

#[async_trait]
impl SuggestTopicsUseCase for StubSuggestTopicsUseCase {
    async fn execute(
        &self,
        _command: SuggestTopicsCommand,
    ) -> Result<SuggestionResult, SuggestTopicsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubValidateTopicUseCase;

#[async_trait]
impl ValidateTopicUseCase for StubValidateTopicUseCase {
    async fn execute(
        &self,
        _command: ValidateTopicCommand,
    ) -> Result<ValidationResult, ValidateTopicError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(&self, _command: CreateTopicCommand) -> Result<TopicResult, CreateTopicError> {
        unimplemented!("Not used in this test")
    }
}
