use serde::{Serialize, Serializer};
use serde_json::Value;

use super::content::{ContentPart, ThinkingBlock};
use super::item::ReasoningItem;
use super::tool::ToolCall;

/// Assistant turn in chat-completions shape
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssistantMessage {
    /// Thinking blocks, when present, always lead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<ContentPart>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,

    /// Untouched reasoning payload for history replay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<ReasoningItem>,
}

impl AssistantMessage {
    /// Message whose only populated field is the raw reasoning payload
    pub fn reasoning_carrier(reasoning: ReasoningItem) -> Self {
        Self {
            reasoning: Some(reasoning),
            ..Self::default()
        }
    }

    pub fn thinking_blocks(&self) -> Vec<&ThinkingBlock> {
        self.content
            .iter()
            .flatten()
            .filter_map(ContentPart::as_thinking)
            .collect()
    }

    /// Concatenated text parts
    pub fn text(&self) -> Option<String> {
        let text = self
            .content
            .iter()
            .flatten()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Message handed to the request-assembly layer
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Assistant(AssistantMessage),

    /// Output item this crate does not interpret, forwarded as-is
    Passthrough(Value),
}

#[derive(Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
enum RoleTagged<'a> {
    Assistant(&'a AssistantMessage),
}

impl Message {
    pub fn role(&self) -> Option<&str> {
        match self {
            Self::Assistant(_) => Some("assistant"),
            Self::Passthrough(raw) => raw.get("role").and_then(Value::as_str),
        }
    }

    pub fn as_assistant(&self) -> Option<&AssistantMessage> {
        match self {
            Self::Assistant(message) => Some(message),
            Self::Passthrough(_) => None,
        }
    }
}

impl From<AssistantMessage> for Message {
    fn from(message: AssistantMessage) -> Self {
        Self::Assistant(message)
    }
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Assistant(message) => RoleTagged::Assistant(message).serialize(serializer),
            Self::Passthrough(raw) => raw.serialize(serializer),
        }
    }
}
