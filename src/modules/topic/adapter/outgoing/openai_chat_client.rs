use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::modules::topic::application::ports::outgoing::{
    ChatClient, ChatClientError, ChatPrompt,
};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

//
// ──────────────────────────────────────────────────────────
// Wire Types
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionMessage {
    pub role: String,
    pub content: String,
}

// Response fields are optional all the way down; a choice without message
// content counts as an empty reply, not an error.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Transport Seam
// ──────────────────────────────────────────────────────────
//

pub struct ChatHttpResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait ChatHttp: Send + Sync {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatHttpResponse, String>;
}

#[async_trait]
impl ChatHttp for reqwest::Client {
    async fn post_chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<ChatHttpResponse, String> {
        let response = self
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(ChatHttpResponse { status, body })
    }
}

//
// ──────────────────────────────────────────────────────────
// Adapter
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct OpenAiChatClient {
    http: Arc<dyn ChatHttp>,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Arc::new(reqwest::Client::new()),
            base_url: OPENAI_API_BASE.to_string(),
            api_key,
        }
    }

    // Test constructor taking a stub transport
    pub fn new_with_http(http: Arc<dyn ChatHttp>, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    async fn complete(&self, prompt: ChatPrompt) -> Result<Option<String>, ChatClientError> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ChatClientError::NotConfigured),
        };

        let request = ChatCompletionRequest {
            model: prompt.model,
            messages: vec![
                ChatCompletionMessage {
                    role: "system".to_string(),
                    content: prompt.system,
                },
                ChatCompletionMessage {
                    role: "user".to_string(),
                    content: prompt.user,
                },
            ],
        };

        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(model = %request.model, "Sending chat completion request");

        let response = self
            .http
            .post_chat(&url, api_key, &request)
            .await
            .map_err(ChatClientError::NetworkError)?;

        if !(200..300).contains(&response.status) {
            return Err(ChatClientError::ApiError(format!(
                "status {}: {}",
                response.status, response.body
            )));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&response.body)
            .map_err(|e| ChatClientError::ApiError(format!("Failed to parse response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        Ok(content)
    }
}
