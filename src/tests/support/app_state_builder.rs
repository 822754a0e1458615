use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, SuggestTopicsUseCase, ValidateTopicUseCase,
};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    suggest_topics: Option<Arc<dyn SuggestTopicsUseCase + Send + Sync>>,
    validate_topic: Option<Arc<dyn ValidateTopicUseCase + Send + Sync>>,
    create_topic: Option<Arc<dyn CreateTopicUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            suggest_topics: Some(Arc::new(StubSuggestTopicsUseCase)),
            validate_topic: Some(Arc::new(StubValidateTopicUseCase)),
            create_topic: Some(Arc::new(StubCreateTopicUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_suggest_topics(
        mut self,
        uc: impl SuggestTopicsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.suggest_topics = Some(Arc::new(uc));
        self
    }

    pub fn with_validate_topic(
        mut self,
        uc: impl ValidateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.validate_topic = Some(Arc::new(uc));
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_topic = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            suggest_topics_use_case: self.suggest_topics.unwrap(),
            validate_topic_use_case: self.validate_topic.unwrap(),
            create_topic_use_case: self.create_topic.unwrap(),
        })
    }
}
