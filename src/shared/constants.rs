/// Maximum number of characters allowed in a category name
pub const CATEGORY_NAME_MAX_LENGTH: usize = 255;

// =============================================================================
// VALIDATION MESSAGES
// =============================================================================

/// Raised when a category name is empty or was never supplied
pub const NAME_EMPTY_MESSAGE: &str = "name can not be empty or null";

/// Raised when a category name exceeds `CATEGORY_NAME_MAX_LENGTH`
pub const NAME_TOO_LONG_MESSAGE: &str = "name can not be longer than 255 characters";
