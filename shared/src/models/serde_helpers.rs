//! Serde helpers for partial-update payloads

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable field into `Option<Option<T>>`
///
/// Paired with `#[serde(default)]`, this distinguishes three states:
/// - field absent -> `None` (leave unchanged)
/// - field `null` -> `Some(None)` (clear)
/// - field value  -> `Some(Some(v))` (set)
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        parent_id: Option<Option<String>>,
    }

    #[test]
    fn test_absent_field() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.parent_id, None);
    }

    #[test]
    fn test_null_field() {
        let patch: Patch = serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(patch.parent_id, Some(None));
    }

    #[test]
    fn test_value_field() {
        let patch: Patch = serde_json::from_str(r#"{"parent_id":"abc"}"#).unwrap();
        assert_eq!(patch.parent_id, Some(Some("abc".to_string())));
    }
}
