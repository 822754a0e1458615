use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        ValidateTopicCommand, ValidateTopicCommandError, ValidateTopicError,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

/// Request body for topic validation
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateTopicRequest {
    /// Topic name to validate
    #[schema(example = "JavaScript Async/Await")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTopicResponse {
    /// Always true; rejected topics are reported as errors instead
    #[schema(example = true)]
    is_valid: bool,

    /// Raw model reply, including the reasoning behind the verdict
    #[schema(example = "true. This topic is specific and quiz-friendly.")]
    suggestion: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Validate a quiz topic
///
/// Asks the language model whether the submitted name is suitable for quiz
/// questions. A rejected topic comes back as a 400 whose error message is
/// the model's reply, alternative suggestion included.
#[utoipa::path(
    post,
    path = "/api/topic/validate",
    tag = "topics",
    request_body = ValidateTopicRequest,
    responses(
        (
            status = 200,
            description = "Topic accepted",
            body = ValidateTopicResponse,
            example = json!({
                "isValid": true,
                "suggestion": "true. This topic is specific and quiz-friendly."
            })
        ),
        (
            status = 400,
            description = "Invalid input, unusable model reply, or rejected topic",
            body = ErrorResponse,
            examples(
                ("Missing name" = (value = json!({
                    "error": "name is required and must be a non-empty string"
                }))),
                ("Empty reply" = (value = json!({
                    "error": "No topic suggested"
                }))),
                ("Rejected topic" = (value = json!({
                    "error": "false. The topic is too general; try \"JavaScript Async/Await\" instead."
                })))
            )
        ),
        (
            status = 500,
            description = "Upstream failure",
            body = ErrorResponse,
            example = json!({
                "error": "Failed to validate topic"
            })
        ),
    )
)]
#[post("/api/topic/validate")]
pub async fn validate_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<ValidateTopicRequest>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match ValidateTopicCommand::new(payload.name.clone().unwrap_or_default()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.validate_topic_use_case.execute(command).await {
        Ok(result) => ApiResponse::ok(ValidateTopicResponse {
            is_valid: result.is_valid,
            suggestion: result.suggestion,
        }),
        Err(err) => map_validate_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: ValidateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        ValidateTopicCommandError::EmptyName => {
            warn!("Rejected validation request without a usable name");
            ApiResponse::bad_request("name is required and must be a non-empty string")
        }
    }
}

fn map_validate_topic_error(err: ValidateTopicError) -> actix_web::HttpResponse {
    match err {
        ValidateTopicError::EmptyModelReply => {
            warn!("Model reply carried no validation content");
            ApiResponse::bad_request("No topic suggested")
        }
        ValidateTopicError::TopicRejected { reply } => {
            warn!("Model rejected the submitted topic");
            ApiResponse::bad_request(&reply)
        }
        ValidateTopicError::ChatServiceFailure(e) => {
            error!(error = %e, "OpenAI API error");
            ApiResponse::internal_error("Failed to validate topic")
        }
    }
}
