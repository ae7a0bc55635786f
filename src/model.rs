//! Core data types: RawMessage, RawContact, Conversation, ThreadItem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    pub id: String,
    /// Free-form phone number text, as stored by the platform.
    pub address: String,
    pub body: String,
    pub timestamp_millis: i64,
    pub direction: Direction,
}

impl RawMessage {
    pub fn is_outbound(&self) -> bool {
        self.direction == Direction::Outbound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub raw_phone_numbers: Vec<String>,
    /// Parallel to `raw_phone_numbers`.
    #[serde(default)]
    pub normalized_phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversation {
    /// Match key shared by every message in the group.
    pub key: String,
    /// Raw address of the most recent message, not canonicalized.
    pub display_number: String,
    pub contact_name: Option<String>,
    /// Most recent first.
    pub messages: Vec<RawMessage>,
    pub last_message: RawMessage,
    pub unread_count: u32,
}

impl Conversation {
    /// Contact name when known, otherwise the display number.
    pub fn title(&self) -> &str {
        self.contact_name.as_deref().unwrap_or(&self.display_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThreadItem {
    Message { message: RawMessage },
    Separator { date: NaiveDate },
}

impl ThreadItem {
    /// Locale-stable date key (`YYYY-MM-DD`) for separators.
    pub fn date_key(&self) -> Option<String> {
        match self {
            ThreadItem::Separator { date } => Some(date.format("%Y-%m-%d").to_string()),
            ThreadItem::Message { .. } => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, ThreadItem::Separator { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadOrder {
    /// Oldest first, read top-down.
    #[default]
    Ascending,
    /// Newest first, for bottom-anchored (inverted) chat lists.
    Descending,
}

/// A single partner's thread, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thread {
    pub address: String,
    pub contact_name: Option<String>,
    pub items: Vec<ThreadItem>,
}
