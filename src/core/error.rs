use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Bare message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Surface the first failing rule's own message so callers see the literal text
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        tracing::debug!("Validation failed: {}", message);
        AppError::Validation(message)
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use validator::ValidationError;

    use super::*;

    #[test]
    fn test_validation_errors_keep_rule_message() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("length").with_message(Cow::Borrowed("too long")),
        );

        let err = AppError::from(errors);

        assert_eq!(err, AppError::Validation("too long".to_string()));
        assert_eq!(err.message(), "too long");
        assert_eq!(err.to_string(), "Validation error: too long");
    }

    #[test]
    fn test_validation_errors_without_message_fall_back_to_display() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("length"));

        let err = AppError::from(errors);

        assert!(!err.message().is_empty());
    }
}
