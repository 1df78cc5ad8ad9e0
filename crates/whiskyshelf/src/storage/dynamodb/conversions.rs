//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! the whisky domain type. These are testable in isolation without
//! DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use whiskyshelf_core::storage::RepositoryError;
use whiskyshelf_core::whisky::{Whisky, WhiskyId};

/// Convert a stored whisky to a DynamoDB item.
///
/// Fails when the whisky has no assigned id; unsaved records never become
/// documents.
pub fn whisky_to_item(
    whisky: &Whisky,
) -> Result<HashMap<String, AttributeValue>, RepositoryError> {
    let id = whisky.id.as_ref().ok_or_else(|| {
        RepositoryError::Serialization("whisky has no assigned id".to_string())
    })?;

    let mut item = HashMap::new();
    item.insert("id".to_string(), AttributeValue::S(id.to_string()));
    item.insert("name".to_string(), AttributeValue::S(whisky.name.clone()));
    item.insert(
        "origin".to_string(),
        AttributeValue::S(whisky.origin.clone()),
    );

    Ok(item)
}

/// Convert a DynamoDB item to a Whisky.
pub fn item_to_whisky(item: &HashMap<String, AttributeValue>) -> Result<Whisky, RepositoryError> {
    Ok(Whisky {
        id: Some(WhiskyId::new(get_string(item, "id")?)),
        name: get_string(item, "name")?,
        origin: get_string(item, "origin")?,
    })
}

/// Extract a string attribute from an item.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::Serialization(format!("missing string attribute: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_round_trip() {
        let whisky = Whisky::new("Jameson", "Ireland").with_id("doc-1");

        let item = whisky_to_item(&whisky).unwrap();
        let back = item_to_whisky(&item).unwrap();

        assert_eq!(back, whisky);
    }

    #[test]
    fn test_unsaved_whisky_is_rejected() {
        let whisky = Whisky::new("Jameson", "Ireland");

        let result = whisky_to_item(&whisky);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_missing_attribute_is_serialization_error() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("doc-1".to_string()));

        let result = item_to_whisky(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }

    #[test]
    fn test_non_string_attribute_is_serialization_error() {
        let mut item = HashMap::new();
        item.insert("id".to_string(), AttributeValue::S("doc-1".to_string()));
        item.insert("name".to_string(), AttributeValue::N("7".to_string()));
        item.insert("origin".to_string(), AttributeValue::S("Ireland".to_string()));

        let result = item_to_whisky(&item);

        assert!(matches!(result, Err(RepositoryError::Serialization(_))));
    }
}
