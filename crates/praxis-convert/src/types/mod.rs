pub mod content;
pub mod item;
pub mod message;
pub mod tool;

pub use content::{ContentPart, ThinkingBlock};
pub use item::{
    FunctionCallItem, ItemKind, ItemStatus, MessageItem, OutputContent, OutputItem,
    ReasoningItem, SummaryText,
};
pub use message::{AssistantMessage, Message};
pub use tool::{FunctionCall, ToolCall};
