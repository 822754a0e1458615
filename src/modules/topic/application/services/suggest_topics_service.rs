use async_trait::async_trait;

use crate::topic::application::{
    domain::{entities::SuggestionResult, reply_parser},
    ports::{
        incoming::use_cases::{SuggestTopicsCommand, SuggestTopicsError, SuggestTopicsUseCase},
        outgoing::{ChatClient, ChatPrompt},
    },
};

const CHAT_MODEL: &str = "gpt-3.5-turbo";

const SYSTEM_PROMPT: &str = r#"You are a quiz topic suggestion assistant. Your task is to suggest 3 specific quiz topics
that are suitable for creating practice quizzes and study materials.

Focus on topics that:
- Are good for quiz questions and practice tests
- Cover specific concepts, rules, or knowledge areas to study
- Are suitable for theory practice and self-assessment
- Help users practice and test their understanding

Examples:
- Input: "driving license" → Output: "Traffic Signs and Signals", "Road Rules and Regulations", "Vehicle Safety and Maintenance"
- Input: "math" → Output: "Algebra Basics", "Geometry Fundamentals", "Calculus Derivatives"
- Input: "history" → Output: "World War II Events", "Ancient Civilizations", "Renaissance Period"

Return ONLY the 3 topic names, one per line, without numbering, bullets, or explanations.
Make them concise, specific, and quiz-friendly."#;

#[derive(Debug, Clone)]
pub struct SuggestTopicsService<C>
where
    C: ChatClient + Send + Sync,
{
    chat: C,
}

impl<C> SuggestTopicsService<C>
where
    C: ChatClient + Send + Sync,
{
    pub fn new(chat: C) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl<C> SuggestTopicsUseCase for SuggestTopicsService<C>
where
    C: ChatClient + Send + Sync,
{
    async fn execute(
        &self,
        command: SuggestTopicsCommand,
    ) -> Result<SuggestionResult, SuggestTopicsError> {
        // Credential check happens after input validation and only on this
        // path; the validation use case takes its chances with the call.
        if !self.chat.is_configured() {
            return Err(SuggestTopicsError::MissingApiKey);
        }

        let prompt = ChatPrompt::new(
            CHAT_MODEL,
            SYSTEM_PROMPT,
            &format!(
                "Suggest 3 quiz topics for practice and study related to: \"{}\"",
                command.topic()
            ),
        );

        let reply = self
            .chat
            .complete(prompt)
            .await
            .map_err(|e| SuggestTopicsError::ChatServiceFailure(e.to_string()))?;

        let reply = match reply {
            Some(text) if !text.is_empty() => text,
            _ => return Err(SuggestTopicsError::EmptyModelReply),
        };

        let topics = reply_parser::parse_suggested_topics(&reply);

        if topics.is_empty() {
            return Err(SuggestTopicsError::NoTopicsParsed);
        }

        Ok(SuggestionResult { topics })
    }
}
