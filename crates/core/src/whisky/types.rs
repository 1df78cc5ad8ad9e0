use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical whisky identifier.
///
/// Backends assign ids in their native form (an autoincrement row id, a
/// counter value, or a document UUID); all of them travel through this
/// string newtype so the wire format is identical regardless of the
/// active backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WhiskyId(String);

impl WhiskyId {
    /// Creates an id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the id as a numeric row id.
    ///
    /// Integer-keyed backends use this; an id that does not parse can
    /// never name a record there.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for WhiskyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for WhiskyId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for WhiskyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WhiskyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A whisky in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whisky {
    /// Assigned by the storage backend at creation; absent until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WhiskyId>,
    pub name: String,
    pub origin: String,
}

impl Whisky {
    /// Creates an unsaved whisky; the storage backend assigns the id.
    pub fn new(name: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            origin: origin.into(),
        }
    }

    /// Sets a specific id on this whisky (useful for testing).
    pub fn with_id(mut self, id: impl Into<WhiskyId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_whisky_omits_id_in_json() {
        let whisky = Whisky::new("Jameson", "Ireland");
        let json = serde_json::to_value(&whisky).unwrap();

        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "Jameson");
        assert_eq!(json["origin"], "Ireland");
    }

    #[test]
    fn test_saved_whisky_serializes_id_as_string() {
        let whisky = Whisky::new("Jameson", "Ireland").with_id(4);
        let json = serde_json::to_value(&whisky).unwrap();

        assert_eq!(json["id"], "4");
    }

    #[test]
    fn test_whisky_roundtrip() {
        let whisky = Whisky::new("Lagavulin 16", "Scotland, Islay").with_id("doc-1");
        let json = serde_json::to_string(&whisky).unwrap();
        let parsed: Whisky = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, whisky);
    }

    #[test]
    fn test_deserialize_without_id() {
        let parsed: Whisky =
            serde_json::from_str(r#"{"name":"Jameson","origin":"Ireland"}"#).unwrap();

        assert!(parsed.id.is_none());
    }

    #[test]
    fn test_numeric_id_parses() {
        assert_eq!(WhiskyId::from(17).as_i64(), Some(17));
        assert_eq!(WhiskyId::new("not-a-number").as_i64(), None);
    }
}
