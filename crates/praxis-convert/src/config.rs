// Conversion options
// Decided per target provider by whoever assembles the request

use serde::{Deserialize, Serialize};

/// Type of LLM provider behind the chat-completions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    #[default]
    OpenAI,
    #[serde(rename = "azure_openai")]
    AzureOpenAI,
    Anthropic,
    Bedrock,
}

impl ProviderType {
    /// Whether the provider rejects assistant turns that carry reasoning
    /// without leading, signed thinking blocks
    pub fn requires_thinking_blocks(&self) -> bool {
        match self {
            ProviderType::OpenAI | ProviderType::AzureOpenAI => false,
            ProviderType::Anthropic | ProviderType::Bedrock => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Re-encode reasoning as thinking blocks at the head of the next
    /// assistant message
    pub preserve_thinking_blocks: bool,

    /// Emit a standalone message holding the raw reasoning payload
    pub reasoning_carrier: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            preserve_thinking_blocks: false,
            reasoning_carrier: true,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_provider(provider: ProviderType) -> Self {
        Self::default().with_thinking_blocks(provider.requires_thinking_blocks())
    }

    pub fn with_thinking_blocks(mut self, enabled: bool) -> Self {
        self.preserve_thinking_blocks = enabled;
        self
    }

    pub fn with_reasoning_carrier(mut self, enabled: bool) -> Self {
        self.reasoning_carrier = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::new();
        assert!(!options.preserve_thinking_blocks);
        assert!(options.reasoning_carrier);
    }

    #[test]
    fn test_for_provider() {
        assert!(ConvertOptions::for_provider(ProviderType::Anthropic).preserve_thinking_blocks);
        assert!(ConvertOptions::for_provider(ProviderType::Bedrock).preserve_thinking_blocks);
        assert!(!ConvertOptions::for_provider(ProviderType::OpenAI).preserve_thinking_blocks);
        assert!(!ConvertOptions::for_provider(ProviderType::AzureOpenAI).preserve_thinking_blocks);
    }

    #[test]
    fn test_provider_serde_names() {
        let json = serde_json::to_string(&ProviderType::AzureOpenAI).unwrap();
        assert_eq!(json, "\"azure_openai\"");

        let provider: ProviderType = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(provider, ProviderType::Anthropic);
    }

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: ConvertOptions =
            serde_json::from_str(r#"{"preserve_thinking_blocks": true}"#).unwrap();

        assert!(options.preserve_thinking_blocks);
        assert!(options.reasoning_carrier);
    }
}
