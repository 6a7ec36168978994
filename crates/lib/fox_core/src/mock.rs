//! Mock reply synthesis.
//!
//! Picks the last user turn, classifies it (greeting, question, short text,
//! long text; first match wins) and fills the selected personality's template.

use chrono::Utc;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::models::{ChatMessage, ChatResponse, Role};

/// Personality used when the request names none.
pub const DEFAULT_MODEL: &str = "chatgpt";

const GREETINGS: [&str; 5] = ["hi", "hello", "hey", "selam", "merhaba"];

/// Texts shorter than this (in characters) are echoed in full.
const ECHO_LIMIT: usize = 40;

/// Longer texts are quoted up to this many characters.
const EXCERPT_LIMIT: usize = 200;

/// Mock personality, chosen by the request's model selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    ChatGpt,
    Gemini,
    Claude,
    Grok,
}

impl Personality {
    /// Unknown selectors fall back to [`Personality::ChatGpt`].
    pub fn from_model(model: &str) -> Self {
        match model {
            "gemini" => Personality::Gemini,
            "claude" => Personality::Claude,
            "grok" => Personality::Grok,
            _ => Personality::ChatGpt,
        }
    }

    fn greeting(self) -> &'static str {
        match self {
            Personality::Gemini => "👋 Hi! Gemini here. How can I help you today?",
            Personality::Claude => "Hello, I am Claude. What would you like to discuss?",
            Personality::Grok => "Hey, Grok here! Ready for some fun Q&A?",
            Personality::ChatGpt => "Hello! I am ChatGPT. How can I assist you?",
        }
    }

    fn question(self) -> &'static str {
        match self {
            Personality::Gemini => "Great question! Gemini suggests: let’s break it down together.",
            Personality::Claude => "Claude says: That’s an interesting question. Here’s my take…",
            Personality::Grok => "Grok: I like tough questions! Here’s a witty answer.",
            Personality::ChatGpt => "ChatGPT: Here’s what I think…",
        }
    }

    fn echo(self, text: &str) -> String {
        match self {
            Personality::Gemini => format!("Gemini echoes: \"{text}\""),
            Personality::Claude => format!("Claude heard: \"{text}\""),
            Personality::Grok => format!("Grok repeats: \"{text}\""),
            Personality::ChatGpt => format!("ChatGPT: \"{text}\""),
        }
    }

    fn excerpt(self, text: &str) -> String {
        let excerpt: String = text.chars().take(EXCERPT_LIMIT).collect();
        match self {
            Personality::Gemini => format!("Gemini received your message: \"{excerpt}\""),
            Personality::Claude => format!("Claude received: \"{excerpt}\""),
            Personality::Grok => format!("Grok got: \"{excerpt}\""),
            Personality::ChatGpt => format!("ChatGPT received: \"{excerpt}\""),
        }
    }

    /// Reply when the conversation has no usable user turn.
    fn opener(self) -> &'static str {
        match self {
            Personality::Gemini => "Hi! Gemini here. Ask me anything.",
            Personality::Claude => "Hello, I am Claude. Ready to chat.",
            Personality::Grok => "Hey, Grok here! What’s up?",
            Personality::ChatGpt => "Hello! I am ChatGPT. How can I assist you?",
        }
    }
}

/// Which template a user text selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Greeting,
    Question,
    Echo,
    Excerpt,
}

/// Classifies a user text. Rules are ordered, first match wins.
pub fn classify(text: &str) -> ReplyKind {
    let lowered = text.to_lowercase();
    if is_greeting(&lowered) {
        ReplyKind::Greeting
    } else if lowered.contains('?') {
        ReplyKind::Question
    } else if text.chars().count() < ECHO_LIMIT {
        ReplyKind::Echo
    } else {
        ReplyKind::Excerpt
    }
}

/// A greeting word at the start, followed by end of text or a non-word char.
fn is_greeting(lowered: &str) -> bool {
    GREETINGS.iter().any(|greeting| {
        lowered
            .strip_prefix(greeting)
            .is_some_and(|rest| !rest.chars().next().is_some_and(is_word_char))
    })
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// The last turn authored by the user, scanning from the end.
pub fn last_user_message(messages: &[ChatMessage]) -> Option<&ChatMessage> {
    messages.iter().rev().find(|m| m.role == Role::User)
}

/// Builds the mock reply text for a conversation.
pub fn reply_text(messages: &[ChatMessage], model: &str) -> String {
    let personality = Personality::from_model(model);
    let text = last_user_message(messages)
        .map(|m| m.content.as_str())
        .filter(|content| !content.is_empty());

    let Some(text) = text else {
        return personality.opener().to_string();
    };

    match classify(text) {
        ReplyKind::Greeting => personality.greeting().to_string(),
        ReplyKind::Question => personality.question().to_string(),
        ReplyKind::Echo => personality.echo(text),
        ReplyKind::Excerpt => personality.excerpt(text),
    }
}

/// Answers a conversation locally, shaped like an upstream completion.
pub fn mock_completion(messages: &[ChatMessage], model: &str) -> ChatResponse {
    let message = ChatMessage::assistant(reply_text(messages, model));
    let id = format!("mock-{}", Uuid::new_v4());
    debug!(%id, model, "synthesised mock reply");

    let raw = json!({
        "id": id,
        "object": "chat.completion",
        "created": Utc::now().timestamp(),
        "model": model,
        "choices": [{ "index": 0, "message": message, "finish_reason": "stop" }],
    });
    ChatResponse::from_completion(raw, model)
}
