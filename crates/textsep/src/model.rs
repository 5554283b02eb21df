use crate::error::TextsepError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A single piece of text split out of a pasted blob.
///
/// The serialized shape is fixed: `content`, `type`, `id` and a millisecond
/// `timestamp`. Stored lists written by older builds decode as long as those
/// four fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ContentItem {
    /// Builds an item with a fresh id and the current time. Content is
    /// trimmed; callers are expected to have rejected blank text already.
    pub fn new(content: impl AsRef<str>, kind: impl Into<String>) -> Self {
        Self {
            content: content.as_ref().trim().to_string(),
            kind: kind.into(),
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Identifies one of the item lists.
///
/// `saved` and `removed` are reserved; anything else names a user-created
/// folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FolderId {
    Saved,
    Removed,
    Custom(String),
}

impl FolderId {
    pub const SAVED: &'static str = "saved";
    pub const REMOVED: &'static str = "removed";

    pub fn as_str(&self) -> &str {
        match self {
            FolderId::Saved => Self::SAVED,
            FolderId::Removed => Self::REMOVED,
            FolderId::Custom(id) => id,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, FolderId::Custom(_))
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FolderId {
    type Err = TextsepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(TextsepError::Api("Folder id cannot be empty".to_string())),
            Self::SAVED => Ok(FolderId::Saved),
            Self::REMOVED => Ok(FolderId::Removed),
            other if other.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') => {
                Ok(FolderId::Custom(other.to_string()))
            }
            other => Err(TextsepError::Api(format!("Invalid folder id: {}", other))),
        }
    }
}

impl TryFrom<String> for FolderId {
    type Error = TextsepError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FolderId> for String {
    fn from(id: FolderId) -> Self {
        id.as_str().to_string()
    }
}

/// A named grouping of items as shown to the user.
///
/// `count` is derived: the registry recomputes it from the persisted lists
/// and never treats the stored number as authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub count: usize,
}

impl Folder {
    pub fn new(id: FolderId, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            icon: icon.into(),
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_item_serializes_with_type_and_millis() {
        let mut item = ContentItem::new("  buy milk ", "Bullet Point");
        item.timestamp = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        item.id = "abc".to_string();

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["content"], "buy milk");
        assert_eq!(json["type"], "Bullet Point");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["timestamp"], 1_700_000_000_123i64);
    }

    #[test]
    fn content_item_decodes_stored_shape() {
        let raw = r#"{"content":"x","type":"Single Content","id":"1","timestamp":5}"#;
        let item: ContentItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.kind, "Single Content");
        assert_eq!(item.timestamp.timestamp_millis(), 5);
    }

    #[test]
    fn folder_id_parses_reserved_and_custom() {
        assert_eq!("saved".parse::<FolderId>().unwrap(), FolderId::Saved);
        assert_eq!("removed".parse::<FolderId>().unwrap(), FolderId::Removed);
        assert_eq!(
            "1700000000000".parse::<FolderId>().unwrap(),
            FolderId::Custom("1700000000000".to_string())
        );
        assert!("".parse::<FolderId>().is_err());
        assert!("../etc".parse::<FolderId>().is_err());
    }

    #[test]
    fn folder_id_serializes_as_plain_string() {
        let folder = Folder::new(FolderId::Saved, "Saved Items", "💾");
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(json["id"], "saved");
    }
}
