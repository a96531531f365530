//! Converts Responses-style output items (reasoning, function calls,
//! assistant messages) into chat-completions assistant messages.
//!
//! Providers such as Anthropic require reasoning to be replayed as signed
//! thinking blocks at the head of the assistant turn that follows it:
//!
//! ```rust
//! use praxis_convert::{convert, OutputItem};
//!
//! let items = vec![
//!     OutputItem::reasoning(["Check the forecast first."], Some("sig_abc")),
//!     OutputItem::function_call("call_1", "get_weather", r#"{"city":"Tokyo"}"#),
//! ];
//!
//! let messages = convert(&items, true);
//! let batch = messages[1].as_assistant().unwrap();
//! assert_eq!(batch.thinking_blocks()[0].signature.as_deref(), Some("sig_abc"));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod thinking;
pub mod types;

pub use config::{ConvertOptions, ProviderType};
pub use convert::{convert, convert_with_options, parse_output_items, to_request_messages};
pub use error::{ConvertError, Result};
pub use types::{
    AssistantMessage, ContentPart, ItemKind, Message, OutputItem, ReasoningItem, ThinkingBlock,
    ToolCall,
};
