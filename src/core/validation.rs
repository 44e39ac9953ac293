//! Variable name validation.

use crate::error::{ParseError, Result};

/// Validate a variable name before it is handed to a shell.
///
/// Names must be portable shell identifiers:
/// - ASCII letters, digits, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ParseError::InvalidName` if the name is not assignable.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidName(name.to_string()).into())
    }
}
