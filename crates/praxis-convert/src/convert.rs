use std::mem;

use serde_json::Value;

use crate::config::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::thinking;
use crate::types::{
    AssistantMessage, ContentPart, FunctionCallItem, Message, MessageItem, OutputItem,
    ReasoningItem, ThinkingBlock, ToolCall,
};

/// Convert a turn's output items into chat-completions messages.
///
/// With `preserve_thinking_blocks` set, each reasoning item is re-encoded as
/// signed thinking blocks leading the next tool-call batch or assistant text
/// message. Reasoning carrier messages are emitted in both modes.
pub fn convert(items: &[OutputItem], preserve_thinking_blocks: bool) -> Vec<Message> {
    let options = ConvertOptions::new().with_thinking_blocks(preserve_thinking_blocks);
    convert_with_options(items, &options)
}

pub fn convert_with_options(items: &[OutputItem], options: &ConvertOptions) -> Vec<Message> {
    let mut converter = Converter::new(options);
    for item in items {
        converter.push(item);
    }
    converter.finish()
}

/// Reasoning waiting for the next action item
#[derive(Debug, Default)]
enum Carry {
    #[default]
    Idle,
    Holding(ReasoningItem),
}

/// Consecutive tool calls that will share one assistant message
#[derive(Debug)]
struct ToolCallBatch {
    thinking: Vec<ThinkingBlock>,
    calls: Vec<ToolCall>,
}

struct Converter<'a> {
    options: &'a ConvertOptions,
    carry: Carry,
    batch: Option<ToolCallBatch>,
    messages: Vec<Message>,
}

impl<'a> Converter<'a> {
    fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            carry: Carry::Idle,
            batch: None,
            messages: Vec::new(),
        }
    }

    fn push(&mut self, item: &OutputItem) {
        match item {
            OutputItem::Reasoning(reasoning) => {
                self.flush_batch();
                self.hold(reasoning);
            }
            OutputItem::FunctionCall(call) => self.push_tool_call(call),
            OutputItem::Message(message) if message.is_assistant() => {
                self.flush_batch();
                let thinking = self.take_thinking();
                self.emit_text(message, thinking);
            }
            OutputItem::Message(_) | OutputItem::Other(_) => {
                self.flush_batch();
                self.emit_passthrough(item);
            }
        }
    }

    fn hold(&mut self, reasoning: &ReasoningItem) {
        if self.options.reasoning_carrier {
            self.messages
                .push(AssistantMessage::reasoning_carrier(reasoning.clone()).into());
        }

        if !self.options.preserve_thinking_blocks {
            return;
        }

        if let Carry::Holding(previous) = &self.carry {
            tracing::debug!(
                "Reasoning {:?} superseded before any action item",
                previous.id
            );
        }
        tracing::debug!(
            "Holding reasoning {:?}: segments={}, signed={}",
            reasoning.id,
            reasoning.summary.len(),
            reasoning.signature.is_some()
        );
        self.carry = Carry::Holding(reasoning.clone());
    }

    /// Consume the held reasoning, if any
    fn take_thinking(&mut self) -> Vec<ThinkingBlock> {
        match mem::take(&mut self.carry) {
            Carry::Idle => Vec::new(),
            Carry::Holding(reasoning) => thinking::project(&reasoning),
        }
    }

    fn push_tool_call(&mut self, call: &FunctionCallItem) {
        if self.batch.is_none() {
            let thinking = self.take_thinking();
            self.batch = Some(ToolCallBatch {
                thinking,
                calls: Vec::new(),
            });
        }
        if let Some(batch) = self.batch.as_mut() {
            batch.calls.push(ToolCall::from(call));
        }
    }

    fn flush_batch(&mut self) {
        let Some(batch) = self.batch.take() else {
            return;
        };

        tracing::debug!(
            "Flushing tool call batch: calls={}, thinking_blocks={}",
            batch.calls.len(),
            batch.thinking.len()
        );

        let content = if batch.thinking.is_empty() {
            None
        } else {
            Some(batch.thinking.into_iter().map(ContentPart::from).collect())
        };

        self.messages.push(
            AssistantMessage {
                content,
                tool_calls: Some(batch.calls),
                ..AssistantMessage::default()
            }
            .into(),
        );
    }

    fn emit_text(&mut self, message: &MessageItem, thinking: Vec<ThinkingBlock>) {
        if !thinking.is_empty() {
            tracing::debug!(
                "Attaching {} thinking blocks to assistant message {:?}",
                thinking.len(),
                message.id
            );
        }

        let text_parts = message.content.iter().filter_map(|part| {
            let text = part.text();
            if text.is_none() {
                tracing::warn!(
                    "Skipping unsupported content part type in assistant message: {}",
                    part.type_name()
                );
            }
            text.map(ContentPart::text)
        });

        let content = thinking
            .into_iter()
            .map(ContentPart::from)
            .chain(text_parts)
            .collect();

        self.messages.push(
            AssistantMessage {
                content: Some(content),
                ..AssistantMessage::default()
            }
            .into(),
        );
    }

    fn emit_passthrough(&mut self, item: &OutputItem) {
        match serde_json::to_value(item) {
            Ok(raw) => {
                tracing::warn!(
                    "Passing through unsupported output item type: {}",
                    item.type_name()
                );
                self.messages.push(Message::Passthrough(raw));
            }
            Err(e) => {
                tracing::error!("Failed to pass through {} item: {}", item.type_name(), e);
            }
        }
    }

    fn finish(mut self) -> Vec<Message> {
        self.flush_batch();

        if let Carry::Holding(reasoning) = &self.carry {
            tracing::debug!(
                "Reasoning {:?} not followed by an action item, no thinking blocks emitted",
                reasoning.id
            );
        }

        tracing::debug!(
            "Converted output items into {} messages (preserve_thinking_blocks={})",
            self.messages.len(),
            self.options.preserve_thinking_blocks
        );

        self.messages
    }
}

/// Parse a JSON array of Responses-style output items
pub fn parse_output_items(json: &str) -> Result<Vec<OutputItem>> {
    let value: Value = serde_json::from_str(json).map_err(ConvertError::InvalidJson)?;

    let raw_items = match value {
        Value::Array(items) => items,
        Value::Object(_) => return Err(ConvertError::ExpectedArray("object")),
        Value::String(_) => return Err(ConvertError::ExpectedArray("string")),
        Value::Number(_) => return Err(ConvertError::ExpectedArray("number")),
        Value::Bool(_) => return Err(ConvertError::ExpectedArray("boolean")),
        Value::Null => return Err(ConvertError::ExpectedArray("null")),
    };

    raw_items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value(raw)
                .map_err(|source| ConvertError::InvalidItem { index, source })
        })
        .collect()
}

/// Serialize messages into the `messages` array of a request body
pub fn to_request_messages(messages: &[Message]) -> Result<Value> {
    serde_json::to_value(messages).map_err(ConvertError::Serialization)
}
