//! Field-level input validation.
//!
//! Validators are pure functions of their input; an error names the
//! offending field so handlers can return a `{field: message}` body.

use crate::error::DomainError;

/// Minimum length for post and comment text.
pub const TEXT_MIN: usize = 2;
/// Maximum length for post and comment text.
pub const TEXT_MAX: usize = 300;

fn validate_text(
    text: &str,
    required_message: &str,
    length_message: &str,
) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation {
            field: "text",
            message: required_message.to_string(),
        });
    }

    let len = text.chars().count();
    if !(TEXT_MIN..=TEXT_MAX).contains(&len) {
        return Err(DomainError::Validation {
            field: "text",
            message: length_message.to_string(),
        });
    }

    Ok(())
}

/// Validate the body text of a post: required, 2-300 characters.
pub fn validate_post_text(text: &str) -> Result<(), DomainError> {
    validate_text(
        text,
        "Text field is required",
        "Post must be between 2 and 300 characters",
    )
}

/// Validate the body text of a comment: required, 2-300 characters.
pub fn validate_comment_text(text: &str) -> Result<(), DomainError> {
    validate_text(
        text,
        "Text comment field is required",
        "Comment must be between 2 and 300 characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: DomainError) -> &'static str {
        match err {
            DomainError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_text_within_bounds() {
        assert!(validate_post_text("hi").is_ok());
        assert!(validate_post_text(&"a".repeat(300)).is_ok());
        assert!(validate_comment_text("a comment").is_ok());
    }

    #[test]
    fn rejects_empty_text() {
        assert_eq!(field_of(validate_post_text("").unwrap_err()), "text");
        assert_eq!(field_of(validate_post_text("   ").unwrap_err()), "text");
        assert_eq!(field_of(validate_comment_text("").unwrap_err()), "text");
    }

    #[test]
    fn rejects_text_outside_bounds() {
        assert!(validate_post_text("a").is_err());
        assert!(validate_post_text(&"a".repeat(301)).is_err());
        assert!(validate_comment_text("x").is_err());
        assert!(validate_comment_text(&"x".repeat(301)).is_err());
    }

    #[test]
    fn empty_text_reports_required_message() {
        match validate_post_text("").unwrap_err() {
            DomainError::Validation { message, .. } => {
                assert_eq!(message, "Text field is required")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        match validate_comment_text("  ").unwrap_err() {
            DomainError::Validation { message, .. } => {
                assert_eq!(message, "Text comment field is required")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn length_is_counted_in_characters() {
        // two multi-byte characters still satisfy the minimum
        assert!(validate_post_text("éé").is_ok());
    }
}
