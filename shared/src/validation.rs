//! Input validation functions
//!
//! This module provides validation utilities for user input. Everything here
//! runs before any remote call is made.

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a person's display name
pub fn validate_full_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Full name cannot be empty".to_string());
    }
    if name.len() > 120 {
        return Err("Full name too long".to_string());
    }
    Ok(())
}

/// Validate a food entry name
pub fn validate_food_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Food name cannot be empty".to_string());
    }
    if name.len() > 200 {
        return Err("Food name too long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com", true)]
    #[case("a.b@c.co", true)]
    #[case("", false)]
    #[case("no-at-sign", false)]
    #[case("spaces in@mail.com", false)]
    #[case("missing@tld", false)]
    fn email_validation(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(validate_email(email).is_ok(), valid);
    }

    #[test]
    fn password_length_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn names_must_be_nonempty() {
        assert!(validate_full_name("   ").is_err());
        assert!(validate_full_name("Ada Lovelace").is_ok());
        assert!(validate_food_name("").is_err());
        assert!(validate_food_name("Pad Thai").is_ok());
    }
}
