use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Event identifiers arrive as numbers or strings depending on who wrote the data file.
/// Any JSON number is accepted, negative and fractional ones included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EventId {
    Number(Number),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for EventId {
    fn from(value: u64) -> Self {
        EventId::Number(value.into())
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventRecord {
    pub id: EventId,
    pub date: String, // raw, parsed by dates::parse_event_date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventRecord {
    pub fn new(id: impl Into<EventId>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            cover: None,
            title: None,
            extra: Map::new(),
        }
    }

    pub fn display_title(&self) -> String {
        self.title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Untitled Event".to_string())
    }
}

/// What the site's data file holds: the event list and the slider's focus items.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct DataSnapshot {
    pub events: Option<Vec<EventRecord>>,
    pub focus: Vec<Value>,
}

impl DataSnapshot {
    pub fn events(&self) -> Option<&[EventRecord]> {
        self.events.as_deref()
    }
}
