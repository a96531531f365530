use serde::{Deserialize, Serialize};

/// Reasoning text re-encoded for providers that require thinking blocks.
/// The signature is opaque and must round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingBlock {
    pub thinking: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl ThinkingBlock {
    pub fn new(thinking: impl Into<String>, signature: Option<String>) -> Self {
        Self {
            thinking: thinking.into(),
            signature,
        }
    }
}

/// Content block of an assistant message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text {
        text: String,
    },

    Thinking(ThinkingBlock),
}

impl ContentPart {
    /// Create text content
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text { text: s.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::Thinking(_) => None,
        }
    }

    pub fn as_thinking(&self) -> Option<&ThinkingBlock> {
        match self {
            Self::Thinking(block) => Some(block),
            Self::Text { .. } => None,
        }
    }

    pub fn is_thinking(&self) -> bool {
        matches!(self, Self::Thinking(_))
    }
}

impl From<ThinkingBlock> for ContentPart {
    fn from(block: ThinkingBlock) -> Self {
        Self::Thinking(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_thinking_block_wire_shape() {
        let part = ContentPart::from(ThinkingBlock::new("hmm", Some("sig".to_string())));
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(
            value,
            json!({"type": "thinking", "thinking": "hmm", "signature": "sig"})
        );
    }

    #[test]
    fn test_unsigned_thinking_omits_signature() {
        let part = ContentPart::from(ThinkingBlock::new("hmm", None));
        let value = serde_json::to_value(&part).unwrap();
        assert!(value.get("signature").is_none());
    }

    #[test]
    fn test_text_part_wire_shape() {
        let value = serde_json::to_value(ContentPart::text("hi")).unwrap();
        assert_eq!(value, json!({"type": "text", "text": "hi"}));
    }
}
