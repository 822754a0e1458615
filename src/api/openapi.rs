use crate::api::schemas::ErrorResponse;
use utoipa::OpenApi;

// Topics
use crate::topic::adapter::incoming::web::routes::{
    CreateTopicRequest, SuggestTopicRequest, SuggestTopicsResponse, TopicResponse,
    ValidateTopicRequest, ValidateTopicResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quiz Topic API",
        version = "1.0.0",
        description = "API documentation for quiz topic suggestion, validation, and creation",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Topic endpoints
        crate::topic::adapter::incoming::web::routes::suggest_topics::suggest_topics_handler,
        crate::topic::adapter::incoming::web::routes::validate_topic::validate_topic_handler,
        crate::topic::adapter::incoming::web::routes::create_topic::create_topic_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // Topic DTOs
            SuggestTopicRequest,
            SuggestTopicsResponse,
            ValidateTopicRequest,
            ValidateTopicResponse,
            CreateTopicRequest,
            TopicResponse
        )
    ),
    tags(
        (name = "topics", description = "Quiz topic endpoints"),
    )
)]
pub struct ApiDoc;
