// Responses API output items
// https://platform.openai.com/docs/api-reference/responses/object#responses/object-output

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

/// Lifecycle status reported on function calls and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    InProgress,
    Completed,
    Incomplete,
}

/// One segment of a reasoning trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryText {
    pub text: String,
}

/// Reasoning trace produced by the model.
///
/// The typed fields drive thinking-block projection. Serialization always
/// replays the payload the item was decoded from (minus its `type` tag), so
/// fields this crate does not model and the provider's own key names survive.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasoningItem {
    pub id: Option<String>,

    pub summary: Vec<SummaryText>,

    /// Opaque provider token. Must be echoed back byte for byte.
    pub signature: Option<String>,

    payload: Map<String, Value>,
}

#[derive(Deserialize)]
struct ReasoningFields {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    summary: Vec<SummaryText>,

    #[serde(default, alias = "encrypted_content")]
    signature: Option<String>,
}

impl ReasoningItem {
    /// Build a reasoning item in Responses shape
    pub fn new<I, S>(id: Option<String>, segments: I, signature: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let summary: Vec<SummaryText> = segments
            .into_iter()
            .map(|text| SummaryText { text: text.into() })
            .collect();

        let mut payload = Map::new();
        if let Some(id) = &id {
            payload.insert("id".to_string(), Value::String(id.clone()));
        }
        payload.insert(
            "summary".to_string(),
            Value::Array(
                summary
                    .iter()
                    .map(|segment| json!({"type": "summary_text", "text": &segment.text}))
                    .collect(),
            ),
        );
        if let Some(signature) = &signature {
            payload.insert(
                "encrypted_content".to_string(),
                Value::String(signature.clone()),
            );
        }

        Self {
            id,
            summary,
            signature,
            payload,
        }
    }

    /// Raw payload replayed in history, without the `type` tag
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

impl<'de> Deserialize<'de> for ReasoningItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut payload = Map::<String, Value>::deserialize(deserializer)?;
        payload.remove("type");

        let fields = ReasoningFields::deserialize(Value::Object(payload.clone()))
            .map_err(D::Error::custom)?;

        Ok(Self {
            id: fields.id,
            summary: fields.summary,
            signature: fields.signature,
            payload,
        })
    }
}

impl Serialize for ReasoningItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.payload.serialize(serializer)
    }
}

/// Tool/function invocation requested by the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCallItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub call_id: String,

    pub name: String,

    /// Raw JSON arguments, never parsed here
    pub arguments: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

/// Content part of an assistant output message
#[derive(Debug, Clone, PartialEq)]
pub enum OutputContent {
    OutputText {
        text: String,
        annotations: Option<Vec<Value>>,
    },

    Refusal {
        refusal: String,
    },

    /// Part kind this crate does not interpret, kept as raw JSON
    Other(Value),
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TypedContent {
    OutputText {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotations: Option<Vec<Value>>,
    },
    Refusal {
        refusal: String,
    },
}

impl OutputContent {
    /// Text carried by the part; `None` for parts kept raw
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::OutputText { text, .. } => Some(text),
            Self::Refusal { refusal } => Some(refusal),
            Self::Other(_) => None,
        }
    }

    /// Raw `type` tag of the part
    pub fn type_name(&self) -> &str {
        match self {
            Self::OutputText { .. } => "output_text",
            Self::Refusal { .. } => "refusal",
            Self::Other(raw) => raw
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for OutputContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let typed = match raw.get("type").and_then(Value::as_str) {
            Some(kind) => matches!(kind, "output_text" | "refusal"),
            None => return Err(D::Error::missing_field("type")),
        };

        if !typed {
            return Ok(Self::Other(raw));
        }

        match TypedContent::deserialize(raw).map_err(D::Error::custom)? {
            TypedContent::OutputText { text, annotations } => {
                Ok(Self::OutputText { text, annotations })
            }
            TypedContent::Refusal { refusal } => Ok(Self::Refusal { refusal }),
        }
    }
}

impl Serialize for OutputContent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::OutputText { text, annotations } => TypedContent::OutputText {
                text: text.clone(),
                annotations: annotations.clone(),
            }
            .serialize(serializer),
            Self::Refusal { refusal } => TypedContent::Refusal {
                refusal: refusal.clone(),
            }
            .serialize(serializer),
            Self::Other(raw) => raw.serialize(serializer),
        }
    }
}

/// Assistant text message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default = "assistant_role")]
    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,

    #[serde(default)]
    pub content: Vec<OutputContent>,
}

fn assistant_role() -> String {
    "assistant".to_string()
}

impl MessageItem {
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}

/// Variant tag of an output item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Reasoning,
    ToolCall,
    Message,
    Other,
}

/// Item in a model turn's output array
#[derive(Debug, Clone, PartialEq)]
pub enum OutputItem {
    Reasoning(ReasoningItem),
    FunctionCall(FunctionCallItem),
    Message(MessageItem),
    /// Item kind this crate does not interpret, kept as raw JSON
    Other(Value),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TypedItem {
    Reasoning(ReasoningItem),
    FunctionCall(FunctionCallItem),
    Message(MessageItem),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TypedItemRef<'a> {
    Reasoning(&'a ReasoningItem),
    FunctionCall(&'a FunctionCallItem),
    Message(&'a MessageItem),
}

impl OutputItem {
    /// Create a reasoning item from its segments
    pub fn reasoning<I, S>(segments: I, signature: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Reasoning(ReasoningItem::new(
            None,
            segments,
            signature.map(ToString::to_string),
        ))
    }

    /// Create a completed function call
    pub fn function_call(
        call_id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self::FunctionCall(FunctionCallItem {
            id: None,
            call_id: call_id.into(),
            name: name.into(),
            arguments: arguments.into(),
            status: Some(ItemStatus::Completed),
        })
    }

    /// Create a completed assistant message with one text part
    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::Message(MessageItem {
            id: None,
            role: assistant_role(),
            status: Some(ItemStatus::Completed),
            content: vec![OutputContent::OutputText {
                text: text.into(),
                annotations: None,
            }],
        })
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Reasoning(_) => ItemKind::Reasoning,
            Self::FunctionCall(_) => ItemKind::ToolCall,
            Self::Message(message) if message.is_assistant() => ItemKind::Message,
            Self::Message(_) | Self::Other(_) => ItemKind::Other,
        }
    }

    /// Raw `type` tag of the item
    pub fn type_name(&self) -> &str {
        match self {
            Self::Reasoning(_) => "reasoning",
            Self::FunctionCall(_) => "function_call",
            Self::Message(_) => "message",
            Self::Other(raw) => raw
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }
}

impl From<TypedItem> for OutputItem {
    fn from(item: TypedItem) -> Self {
        match item {
            TypedItem::Reasoning(item) => Self::Reasoning(item),
            TypedItem::FunctionCall(item) => Self::FunctionCall(item),
            TypedItem::Message(item) => Self::Message(item),
        }
    }
}

impl<'de> Deserialize<'de> for OutputItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let typed = match raw.get("type").and_then(Value::as_str) {
            Some(kind) => matches!(kind, "reasoning" | "function_call" | "message"),
            None => return Err(D::Error::missing_field("type")),
        };

        if typed {
            TypedItem::deserialize(raw)
                .map(Into::into)
                .map_err(D::Error::custom)
        } else {
            Ok(Self::Other(raw))
        }
    }
}

impl Serialize for OutputItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Reasoning(item) => TypedItemRef::Reasoning(item).serialize(serializer),
            Self::FunctionCall(item) => TypedItemRef::FunctionCall(item).serialize(serializer),
            Self::Message(item) => TypedItemRef::Message(item).serialize(serializer),
            Self::Other(raw) => raw.serialize(serializer),
        }
    }
}
