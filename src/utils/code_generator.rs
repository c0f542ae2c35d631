//! Short code generation and validation utilities.
//!
//! Generated codes are drawn uniformly from the 62 ASCII alphanumerics using
//! the thread-local CSPRNG from `rand` (ChaCha, seeded from the OS). Custom
//! codes may additionally use `-` and `_`.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::json;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Shortest custom code accepted.
pub const MIN_CODE_LENGTH: usize = 1;

/// Longest code accepted, matching the width of the `links.code` column.
pub const MAX_CODE_LENGTH: usize = 16;

/// Codes that would shadow fixed routes and therefore never resolve.
pub const RESERVED_CODES: &[&str] = &["api", "health", "shorten", "static", "stats"];

/// Generates a random alphanumeric code of `length` characters.
///
/// Each character is selected independently and uniformly from `[A-Za-z0-9]`.
/// Uniqueness is not guaranteed here; callers must check the store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true for characters allowed in custom codes.
pub fn is_code_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Returns true if the code collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates the format of a user-provided custom short code.
///
/// Store-level uniqueness is checked separately by the link service.
///
/// # Rules
///
/// - Length: 1-16 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::InvalidCustomCode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    let length = code.chars().count();
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(AppError::invalid_custom_code(
            "Custom code must be 1-16 characters",
            json!({ "provided_length": length }),
        ));
    }

    if !code.chars().all(is_code_char) {
        return Err(AppError::invalid_custom_code(
            "Custom code can only contain letters, numbers, - or _",
            json!({ "code": code }),
        ));
    }

    if is_reserved(code) {
        return Err(AppError::invalid_custom_code(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
