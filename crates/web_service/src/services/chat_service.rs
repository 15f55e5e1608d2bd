//! Assistant chat over the same Gemini client.

use planner_llm::{Content, GeminiClient, GenerationConfig};

use crate::dto::ChatMessage;
use crate::error::{AppError, Result};

/// Persona instructions sent as a conversation preamble; Gemini's
/// generateContent call has no separate system role in this API surface.
const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for Focus Factory, a productivity app. \
Your role is to help users with:\n\
- Study techniques and focus strategies\n\
- Time management and productivity tips\n\
- Answering questions about the app's features\n\
- Providing motivation and accountability\n\n\
Keep responses concise, helpful, and focused on productivity and learning.";

const GREETING: &str =
    "Hello! I'm your Focus Factory AI assistant. How can I help you with your studies today?";

pub struct ChatService {
    client: GeminiClient,
    generation: GenerationConfig,
}

impl ChatService {
    pub fn new(client: GeminiClient, generation: GenerationConfig) -> Self {
        Self { client, generation }
    }

    pub async fn send(&self, messages: &[ChatMessage]) -> Result<String> {
        if messages.is_empty() {
            return Err(AppError::Validation(
                "Messages array is required".to_string(),
            ));
        }

        let mut contents = vec![Content::user(SYSTEM_PROMPT), Content::model(GREETING)];
        for message in messages {
            contents.push(match message.role.as_str() {
                "assistant" | "model" => Content::model(message.content.as_str()),
                _ => Content::user(message.content.as_str()),
            });
        }

        Ok(self.client.generate_content(contents, &self.generation).await?)
    }
}
