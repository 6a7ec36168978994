//! In-memory turn history of one chat session.
//!
//! The history only grows. A user turn is appended before the request goes
//! out; the assistant turn only when a non-empty reply comes back. Requests
//! always force mock mode, as the browser UI does.

use fox_core::models::ChatMessage;

use crate::client::{ChatClient, ChatOutcome};
use crate::error::ClientError;

/// Seed system prompt of every conversation.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that speaks English.";

/// What to show for a submitted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Assistant(String),
    /// Success without assistant content.
    Empty,
    ServerError(String),
}

impl Reply {
    /// Text rendered in place of the "Typing..." placeholder.
    pub fn display_text(&self) -> String {
        match self {
            Reply::Assistant(text) => text.clone(),
            Reply::Empty => "Sorry, no reply received.".to_string(),
            Reply::ServerError(message) => format!("Error: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::system(SYSTEM_PROMPT)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends `text` as the next user turn.
    ///
    /// Blank input is ignored (`Ok(None)`). On a transport fault the user
    /// turn stays in the history and the error is returned.
    pub async fn submit(
        &mut self,
        client: &ChatClient,
        text: &str,
        model: &str,
    ) -> Result<Option<Reply>, ClientError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        self.messages.push(ChatMessage::user(text));
        let outcome = client.chat(&self.messages, model, true).await?;
        Ok(Some(self.record(outcome)))
    }

    fn record(&mut self, outcome: ChatOutcome) -> Reply {
        match outcome {
            ChatOutcome::Failed { message, .. } => Reply::ServerError(message),
            ChatOutcome::Reply(response) => match response.assistant_content() {
                Some(content) if !content.is_empty() => {
                    let content = content.to_string();
                    self.messages.push(ChatMessage::assistant(content.clone()));
                    Reply::Assistant(content)
                }
                _ => Reply::Empty,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use fox_core::models::ChatResponse;
    use serde_json::json;

    use super::*;

    fn reply(content: serde_json::Value) -> ChatOutcome {
        ChatOutcome::Reply(ChatResponse {
            assistant: Some(json!({"role": "assistant", "content": content})),
            raw: json!({}),
            model: "chatgpt".into(),
        })
    }

    #[test]
    fn seeded_with_system_prompt() {
        let convo = Conversation::new();
        assert_eq!(convo.messages(), &[ChatMessage::system(SYSTEM_PROMPT)]);
    }

    #[test]
    fn successful_reply_is_appended() {
        let mut convo = Conversation::new();
        convo.messages.push(ChatMessage::user("hi"));
        let shown = convo.record(reply(json!("Hello!")));
        assert_eq!(shown, Reply::Assistant("Hello!".into()));
        assert_eq!(convo.messages().last(), Some(&ChatMessage::assistant("Hello!")));
        assert_eq!(convo.messages().len(), 3);
    }

    #[test]
    fn empty_or_missing_content_is_not_appended() {
        let mut convo = Conversation::new();
        assert_eq!(convo.record(reply(json!(""))), Reply::Empty);
        assert_eq!(convo.record(reply(json!(null))), Reply::Empty);
        let no_assistant = ChatOutcome::Reply(ChatResponse {
            assistant: None,
            raw: json!({}),
            model: String::new(),
        });
        assert_eq!(convo.record(no_assistant), Reply::Empty);
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn server_error_is_not_appended() {
        let mut convo = Conversation::new();
        let shown = convo.record(ChatOutcome::Failed {
            status: 500,
            message: "boom".into(),
        });
        assert_eq!(shown.display_text(), "Error: boom");
        assert_eq!(convo.messages().len(), 1);
    }

    #[test]
    fn display_texts() {
        assert_eq!(Reply::Empty.display_text(), "Sorry, no reply received.");
        assert_eq!(Reply::Assistant("x".into()).display_text(), "x");
    }
}
