pub mod modules;
pub use modules::topic;
pub mod api;
pub mod health;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::shared::api::custom_json_config;
use crate::topic::adapter::outgoing::{OpenAiChatClient, TopicRepositoryPostgres};
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, SuggestTopicsUseCase, ValidateTopicUseCase,
};
use crate::topic::application::services::{
    CreateTopicService, SuggestTopicsService, ValidateTopicService,
};

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub suggest_topics_use_case: Arc<dyn SuggestTopicsUseCase + Send + Sync>,
    pub validate_topic_use_case: Arc<dyn ValidateTopicUseCase + Send + Sync>,
    pub create_topic_use_case: Arc<dyn CreateTopicUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // The key may be absent; the suggestion route reports that as a 500
    // instead of refusing to boot.
    let openai_api_key = env::var("OPENAI_API_KEY").ok();
    if openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; suggestion requests will fail");
    }

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Create adapters and services
    let chat_client = OpenAiChatClient::new(openai_api_key);
    let topic_repo = TopicRepositoryPostgres::new(Arc::clone(&db_arc));

    let suggest_topics_use_case = SuggestTopicsService::new(chat_client.clone());
    let validate_topic_use_case = ValidateTopicService::new(chat_client);
    let create_topic_use_case = CreateTopicService::new(topic_repo);

    let state = AppState {
        suggest_topics_use_case: Arc::new(suggest_topics_use_case),
        validate_topic_use_case: Arc::new(validate_topic_use_case),
        create_topic_use_case: Arc::new(create_topic_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Topics
    cfg.service(crate::topic::adapter::incoming::web::routes::suggest_topics_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::validate_topic_handler);
    cfg.service(crate::topic::adapter::incoming::web::routes::create_topic_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
