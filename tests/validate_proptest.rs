//! Property-based tests for credential validation
//!
//! Uses proptest to generate random inputs and verify the validation
//! policy holds across the whole input space, not just the examples.

use proptest::prelude::*;

use inkpost::auth::validate::{validate_email, validate_password, validate_slug, PasswordError};

proptest! {
    #[test]
    fn test_password_length_is_the_only_rule(password in ".*") {
        let result = validate_password(&password);
        if password.chars().count() >= 8 {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(PasswordError::TooShort));
        }
    }

    #[test]
    fn test_email_with_both_parts_is_accepted(
        local in "[a-z0-9.]{1,16}",
        domain in "[a-z0-9]{1,16}\\.[a-z]{2,4}",
    ) {
        prop_assert!(validate_email(&format!("{}@{}", local, domain)), "email with both parts should be accepted");
    }

    #[test]
    fn test_email_without_at_is_rejected(candidate in "[^@]*") {
        prop_assert!(!validate_email(&candidate));
    }

    #[test]
    fn test_email_with_empty_local_is_rejected(domain in "[a-z]{1,16}") {
        prop_assert!(!validate_email(&format!("@{}", domain)), "email with empty local should be rejected");
    }

    #[test]
    fn test_url_safe_slugs_are_accepted(slug in "[A-Za-z0-9_-]{1,32}") {
        prop_assert!(validate_slug(&slug));
    }

    #[test]
    fn test_slug_with_foreign_characters_is_rejected(
        slug in "[A-Za-z0-9_-]{0,8}[^A-Za-z0-9_-][A-Za-z0-9_-]{0,8}",
    ) {
        prop_assert!(!validate_slug(&slug));
    }
}
