use async_trait::async_trait;

use crate::topic::application::{
    domain::{entities::ValidationResult, reply_parser},
    ports::{
        incoming::use_cases::{ValidateTopicCommand, ValidateTopicError, ValidateTopicUseCase},
        outgoing::{ChatClient, ChatPrompt},
    },
};

const CHAT_MODEL: &str = "gpt-3.5-turbo";

const SYSTEM_PROMPT: &str = r#"You are a topic validation assistant. Your task is to validate if the topic is valid and suitable for quiz questions and study materials.

Return true if the topic is valid and suitable for quiz questions and study materials, otherwise return false and provide a reason why the topic is not valid. also provide a suggestion for a valid topic.

for example:
if the topic is coding, return false but suggest a more specific topic like "JavaScript Async/Await" or "Python".
if the topic is ASDFSADFSD or non-sense words or characters, return false and provide a suggestion for a valid topic.
if the topic is too general, return false and provide a suggestion for a more specific topic.
if the topic is not suitable for quiz questions and study materials, return false and provide a suggestion for a valid topic.
For any topic that only has 1 simple word like code, exam, drive, test, etc... return false and provide a suggestion for a more specific topic.
For any topic that is not a topic, return false and provide a suggestion for a valid topic."#;

#[derive(Debug, Clone)]
pub struct ValidateTopicService<C>
where
    C: ChatClient + Send + Sync,
{
    chat: C,
}

impl<C> ValidateTopicService<C>
where
    C: ChatClient + Send + Sync,
{
    pub fn new(chat: C) -> Self {
        Self { chat }
    }
}

#[async_trait]
impl<C> ValidateTopicUseCase for ValidateTopicService<C>
where
    C: ChatClient + Send + Sync,
{
    async fn execute(
        &self,
        command: ValidateTopicCommand,
    ) -> Result<ValidationResult, ValidateTopicError> {
        // No credential pre-check on this path; a missing key surfaces as a
        // failed call. The prompt quotes the name exactly as submitted.
        let prompt = ChatPrompt::new(
            CHAT_MODEL,
            SYSTEM_PROMPT,
            &format!("Validate the topic: \"{}\"", command.name()),
        );

        let reply = self
            .chat
            .complete(prompt)
            .await
            .map_err(|e| ValidateTopicError::ChatServiceFailure(e.to_string()))?;

        let reply = match reply {
            Some(text) if !text.is_empty() => text,
            _ => return Err(ValidateTopicError::EmptyModelReply),
        };

        if !reply_parser::reply_approves_topic(&reply) {
            return Err(ValidateTopicError::TopicRejected { reply });
        }

        Ok(ValidationResult {
            is_valid: true,
            suggestion: reply,
        })
    }
}
