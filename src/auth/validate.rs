/**
 * Credential Validation
 *
 * Pure validation functions for the values users type into the signup,
 * login, and post forms. No I/O, no state.
 *
 * # Policy
 *
 * - Email: minimal shape check only - an '@' with a non-empty local and
 *   domain part. No DNS or deliverability verification.
 * - Password: length >= 8 characters. No upper bound, no complexity rules.
 * - Slug: non-empty and URL-safe (ASCII alphanumeric, '-', '_').
 */

use thiserror::Error;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Why a password was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Shorter than [`MIN_PASSWORD_LENGTH`] characters
    #[error("password is too short")]
    TooShort,
}

/// Check that a candidate string has a minimal email shape.
///
/// Returns true only for a non-empty string containing `@` with non-empty
/// text on both sides. Anything beyond that is the mail system's problem.
pub fn validate_email(candidate: &str) -> bool {
    match candidate.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Check password strength.
///
/// Length is the only rule. Counted in characters, not bytes, so multibyte
/// passwords are not penalized.
pub fn validate_password(candidate: &str) -> Result<(), PasswordError> {
    if candidate.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort);
    }
    Ok(())
}

/// Check that a slug is non-empty and URL-safe.
///
/// Slugs are primary keys that appear verbatim in URLs, so only ASCII
/// alphanumerics, hyphens, and underscores are accepted.
pub fn validate_slug(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_basic_shape() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a@b"));
    }

    #[test]
    fn test_validate_email_rejects_missing_parts() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("@"));
    }

    #[test]
    fn test_password_length_boundary() {
        // Exactly 8 characters is accepted, 7 is not
        assert_eq!(validate_password("12345678"), Ok(()));
        assert_eq!(validate_password("1234567"), Err(PasswordError::TooShort));
        assert_eq!(validate_password(""), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_password_counts_characters_not_bytes() {
        // Eight multibyte characters pass even though the byte length differs
        assert_eq!(validate_password("éééééééé"), Ok(()));
    }

    #[test]
    fn test_password_no_upper_bound() {
        let long = "x".repeat(10_000);
        assert_eq!(validate_password(&long), Ok(()));
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("my-first-post"));
        assert!(validate_slug("post_2"));
        assert!(validate_slug("90s-mixtape"));
        assert!(!validate_slug(""));
        assert!(!validate_slug("has space"));
        assert!(!validate_slug("semi;colon"));
        assert!(!validate_slug("path/slash"));
    }
}
