use std::borrow::Cow;

use validator::ValidationError;

use crate::shared::constants::{
    CATEGORY_NAME_MAX_LENGTH, NAME_EMPTY_MESSAGE, NAME_TOO_LONG_MESSAGE,
};

/// Validator for category names
///
/// Emptiness is checked before length. Length counts characters, not bytes.
/// - Valid: "Filme", "Séries", "a" repeated 255 times
/// - Invalid: "", "a" repeated 256 times
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(
            ValidationError::new("required").with_message(Cow::Borrowed(NAME_EMPTY_MESSAGE)),
        );
    }

    if name.chars().count() > CATEGORY_NAME_MAX_LENGTH {
        return Err(
            ValidationError::new("length").with_message(Cow::Borrowed(NAME_TOO_LONG_MESSAGE)),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(name: &str) -> Option<String> {
        validate_category_name(name)
            .err()
            .and_then(|e| e.message.map(|m| m.to_string()))
    }

    #[test]
    fn test_category_name_valid() {
        assert!(validate_category_name("Filme").is_ok());
        assert!(validate_category_name("Séries").is_ok());
        assert!(validate_category_name("a").is_ok());
        assert!(validate_category_name(&"a".repeat(255)).is_ok());
        assert!(validate_category_name(" ").is_ok()); // whitespace is not empty
    }

    #[test]
    fn test_category_name_invalid() {
        assert_eq!(message_of("").as_deref(), Some(NAME_EMPTY_MESSAGE));
        assert_eq!(
            message_of(&"a".repeat(256)).as_deref(),
            Some(NAME_TOO_LONG_MESSAGE)
        );
    }

    #[test]
    fn test_category_name_length_counts_characters() {
        // 255 two-byte characters: 510 bytes, still within the limit
        assert!(validate_category_name(&"é".repeat(255)).is_ok());
        assert_eq!(
            message_of(&"é".repeat(256)).as_deref(),
            Some(NAME_TOO_LONG_MESSAGE)
        );
    }
}
