use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        SuggestTopicsCommand, SuggestTopicsCommandError, SuggestTopicsError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

/// Request body for topic suggestions
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTopicRequest {
    /// Subject area to generate quiz topics from
    #[schema(example = "driving license")]
    pub user_topic: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuggestTopicsResponse {
    /// Up to three suggested topic names
    #[schema(example = json!(["Traffic Signs and Signals", "Road Rules and Regulations", "Vehicle Safety and Maintenance"]))]
    topics: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Suggest quiz topics
///
/// Asks the language model for up to three quiz topics related to the
/// submitted subject area.
#[utoipa::path(
    post,
    path = "/api/topic/suggest",
    tag = "topics",
    request_body = SuggestTopicRequest,
    responses(
        (
            status = 200,
            description = "Topics suggested",
            body = SuggestTopicsResponse,
            example = json!({
                "topics": [
                    "Traffic Signs and Signals",
                    "Road Rules and Regulations",
                    "Vehicle Safety and Maintenance"
                ]
            })
        ),
        (
            status = 400,
            description = "Invalid input or unusable model reply",
            body = ErrorResponse,
            examples(
                ("Missing topic" = (value = json!({
                    "error": "userTopic is required and must be a non-empty string"
                }))),
                ("Empty reply" = (value = json!({
                    "error": "No topic suggested"
                }))),
                ("No usable topics" = (value = json!({
                    "error": "No valid topics"
                })))
            )
        ),
        (
            status = 500,
            description = "Missing credentials or upstream failure",
            body = ErrorResponse,
            example = json!({
                "error": "Failed to suggest topics"
            })
        ),
    )
)]
#[post("/api/topic/suggest")]
pub async fn suggest_topics_handler(
    data: web::Data<AppState>,
    payload: web::Json<SuggestTopicRequest>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match SuggestTopicsCommand::new(payload.user_topic.clone().unwrap_or_default()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.suggest_topics_use_case.execute(command).await {
        Ok(result) => ApiResponse::ok(SuggestTopicsResponse {
            topics: result.topics,
        }),
        Err(err) => map_suggest_topics_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SuggestTopicsCommandError) -> actix_web::HttpResponse {
    match err {
        SuggestTopicsCommandError::EmptyTopic => {
            warn!("Rejected suggestion request without a usable topic");
            ApiResponse::bad_request("userTopic is required and must be a non-empty string")
        }
    }
}

fn map_suggest_topics_error(err: SuggestTopicsError) -> actix_web::HttpResponse {
    match err {
        SuggestTopicsError::MissingApiKey => {
            error!("OpenAI API key is not configured");
            ApiResponse::internal_error("OpenAI API key is not configured")
        }
        SuggestTopicsError::EmptyModelReply => {
            warn!("Model reply carried no suggestion content");
            ApiResponse::bad_request("No topic suggested")
        }
        SuggestTopicsError::NoTopicsParsed => {
            warn!("Model reply yielded no usable topics");
            ApiResponse::bad_request("No valid topics")
        }
        SuggestTopicsError::ChatServiceFailure(e) => {
            error!(error = %e, "OpenAI API error");
            ApiResponse::internal_error("Failed to suggest topics")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::{
        tests::support::app_state_builder::TestAppStateBuilder,
        topic::application::{
            domain::entities::SuggestionResult,
            ports::incoming::use_cases::SuggestTopicsUseCase,
        },
    };

    // ============================================================
    // SuggestTopics Use Case Mock
    // ============================================================

    #[derive(Clone)]
    struct MockSuggestTopicsUseCase {
        result: Result<SuggestionResult, SuggestTopicsError>,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl MockSuggestTopicsUseCase {
        fn success(topics: &[&str]) -> Self {
            Self {
                result: Ok(SuggestionResult {
                    topics: topics.iter().map(|t| t.to_string()).collect(),
                }),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failure(err: SuggestTopicsError) -> Self {
            Self {
                result: Err(err),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn seen_topics(&self) -> Arc<Mutex<Vec<String>>> {
            Arc::clone(&self.seen)
        }
    }

    #[async_trait]
    impl SuggestTopicsUseCase for MockSuggestTopicsUseCase {
        async fn execute(
            &self,
            command: SuggestTopicsCommand,
        ) -> Result<SuggestionResult, SuggestTopicsError> {
            self.seen.lock().unwrap().push(command.topic().to_string());
            self.result.clone()
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    // ============================================================
    // Tests
    // ============================================================

    #[actix_web::test]
    async fn suggest_topics_missing_field_returns_bad_request() {
        // Default state carries panicking stubs, so passing validation
        // would abort the test.
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({}))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(
            json["error"],
            "userTopic is required and must be a non-empty string"
        );
    }

    #[actix_web::test]
    async fn suggest_topics_null_topic_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": null }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(
            json["error"],
            "userTopic is required and must be a non-empty string"
        );
    }

    #[actix_web::test]
    async fn suggest_topics_whitespace_topic_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": "   " }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(
            json["error"],
            "userTopic is required and must be a non-empty string"
        );
    }

    #[actix_web::test]
    async fn suggest_topics_success_returns_topics() {
        let mock = MockSuggestTopicsUseCase::success(&[
            "Traffic Signs and Signals",
            "Road Rules and Regulations",
            "Vehicle Safety and Maintenance",
        ]);
        let seen = mock.seen_topics();

        let state = TestAppStateBuilder::default()
            .with_suggest_topics(mock)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": "  driving license  " }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(
            json["topics"],
            serde_json::json!([
                "Traffic Signs and Signals",
                "Road Rules and Regulations",
                "Vehicle Safety and Maintenance"
            ])
        );

        // The command trims the topic before it reaches the use case
        assert_eq!(*seen.lock().unwrap(), vec!["driving license"]);
    }

    #[actix_web::test]
    async fn suggest_topics_missing_api_key_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_suggest_topics(MockSuggestTopicsUseCase::failure(
                SuggestTopicsError::MissingApiKey,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": "math" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "OpenAI API key is not configured");
    }

    #[actix_web::test]
    async fn suggest_topics_empty_reply_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_suggest_topics(MockSuggestTopicsUseCase::failure(
                SuggestTopicsError::EmptyModelReply,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": "math" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "No topic suggested");
    }

    #[actix_web::test]
    async fn suggest_topics_unparseable_reply_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_suggest_topics(MockSuggestTopicsUseCase::failure(
                SuggestTopicsError::NoTopicsParsed,
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": "math" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "No valid topics");
    }

    #[actix_web::test]
    async fn suggest_topics_chat_failure_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_suggest_topics(MockSuggestTopicsUseCase::failure(
                SuggestTopicsError::ChatServiceFailure("timeout".to_string()),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(suggest_topics_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/topic/suggest")
            .set_json(serde_json::json!({ "userTopic": "math" }))
            .to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "Failed to suggest topics");
    }
}
