use actix_web::{post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::schemas::ErrorResponse,
    shared::api::ApiResponse,
    topic::application::ports::incoming::use_cases::{
        CreateTopicCommand, CreateTopicCommandError, CreateTopicError,
    },
    topic::application::ports::outgoing::TopicResult,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

/// Request body for topic creation
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicRequest {
    /// Topic name, stored exactly as submitted
    #[schema(example = "Traffic Signs and Signals")]
    pub name: Option<String>,

    /// Identifier of the owning user
    #[schema(example = "user-123")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopicResponse {
    /// Topic ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: Uuid,

    /// Topic name
    #[schema(example = "Traffic Signs and Signals")]
    name: String,

    /// Identifier of the owning user
    #[schema(example = "user-123")]
    user_id: String,

    created_at: DateTime<FixedOffset>,
    updated_at: DateTime<FixedOffset>,
}

impl From<TopicResult> for TopicResponse {
    fn from(topic: TopicResult) -> Self {
        Self {
            id: topic.id,
            name: topic.name,
            user_id: topic.owner.into_inner(),
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a topic
///
/// Persists a topic under the given user and returns the stored row. Every
/// call inserts a fresh record; duplicates are not checked.
#[utoipa::path(
    post,
    path = "/api/topic/create",
    tag = "topics",
    request_body = CreateTopicRequest,
    responses(
        (
            status = 200,
            description = "Topic created",
            body = TopicResponse,
            example = json!({
                "id": "123e4567-e89b-12d3-a456-426614174000",
                "name": "Traffic Signs and Signals",
                "userId": "user-123",
                "createdAt": "2026-01-15T09:30:00+00:00",
                "updatedAt": "2026-01-15T09:30:00+00:00"
            })
        ),
        (
            status = 400,
            description = "Invalid input",
            body = ErrorResponse,
            examples(
                ("Missing name" = (value = json!({
                    "error": "name is required and must be a non-empty string"
                }))),
                ("Missing user id" = (value = json!({
                    "error": "userId is required"
                })))
            )
        ),
        (
            status = 500,
            description = "Persistence failure",
            body = ErrorResponse,
            example = json!({
                "error": "Failed to create topic"
            })
        ),
    )
)]
#[post("/api/topic/create")]
pub async fn create_topic_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match CreateTopicCommand::new(
        payload.name.clone().unwrap_or_default(),
        payload.user_id.clone().unwrap_or_default(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Execute use case
    match data.create_topic_use_case.execute(command).await {
        Ok(topic) => ApiResponse::ok(TopicResponse::from(topic)),
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateTopicCommandError) -> actix_web::HttpResponse {
    match err {
        CreateTopicCommandError::EmptyName => {
            warn!("Rejected creation request without a usable name");
            ApiResponse::bad_request("name is required and must be a non-empty string")
        }
        CreateTopicCommandError::MissingUserId => {
            warn!("Rejected creation request without a user id");
            ApiResponse::bad_request("userId is required")
        }
    }
}

fn map_create_topic_error(err: CreateTopicError) -> actix_web::HttpResponse {
    match err {
        CreateTopicError::RepositoryError(e) => {
            error!(error = %e, "Topic persistence failed");
            ApiResponse::internal_error("Failed to create topic")
        }
    }
}
