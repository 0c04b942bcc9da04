//! Input validation helpers
//!
//! Field-level checks run before any lookup or write.
//! SQLite TEXT has no built-in length enforcement.

use crate::core::CatalogError;

/// Entity names: category, product
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CatalogError::Validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate an optional string, if present, with the rules of [`validate_required_text`].
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), CatalogError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Phones", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(" \t\n", "name", MAX_NAME_LEN).is_err());

        let err = validate_required_text("abcdef", "name", 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: name is too long (6 chars, max 5)"
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "name", MAX_NAME_LEN).is_ok());
        assert!(validate_optional_text(&Some("Tablets".into()), "name", MAX_NAME_LEN).is_ok());
        assert!(matches!(
            validate_optional_text(&Some("  ".into()), "name", MAX_NAME_LEN),
            Err(CatalogError::Validation(_))
        ));
    }
}
