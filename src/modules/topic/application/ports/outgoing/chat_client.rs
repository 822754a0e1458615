use async_trait::async_trait;

/// One chat-completion exchange: a fixed system instruction plus the user
/// message derived from request input, sent to a named model.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatPrompt {
    pub model: String,
    pub system: String,
    pub user: String,
}

impl ChatPrompt {
    pub fn new(model: &str, system: &str, user: &str) -> Self {
        Self {
            model: model.to_string(),
            system: system.to_string(),
            user: user.to_string(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatClientError {
    #[error("Chat service credentials are not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Outgoing port for the generative text service.
///
/// `complete` returns the reply text of the first choice, or `None` when the
/// service answered without content. No retrying happens behind this port; a
/// retry policy would wrap an implementation of it.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Whether credentials are present. Callers decide if and when to check;
    /// `complete` fails on its own if they are missing.
    fn is_configured(&self) -> bool;

    async fn complete(&self, prompt: ChatPrompt) -> Result<Option<String>, ChatClientError>;
}
