//! Input validation utilities

use crate::constants::{self, MAX_COMPETITION_TITLE_LENGTH, MAX_REASON_LENGTH};

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate an ISO 4217 currency code
pub fn validate_currency(currency: &str) -> Result<(), &'static str> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err("Currency must be a 3-letter ISO 4217 code")
    }
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a competition title
pub fn validate_competition_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Competition title cannot be empty");
    }
    if sanitized.len() as u64 > MAX_COMPETITION_TITLE_LENGTH {
        return Err("Competition title must be at most 256 characters");
    }
    Ok(sanitized)
}

/// Validate and sanitize an optional review or suspension reason.
///
/// An empty reason after trimming counts as absent.
pub fn validate_reason(reason: Option<&str>) -> Result<Option<String>, &'static str> {
    let Some(reason) = reason else {
        return Ok(None);
    };

    let sanitized = sanitize_string(reason);
    if sanitized.is_empty() {
        return Ok(None);
    }
    if sanitized.len() as u64 > MAX_REASON_LENGTH {
        return Err("Reason must be at most 1024 characters");
    }
    Ok(Some(sanitized))
}

/// Validate an entry fee amount in minor currency units
pub fn validate_entry_fee(cents: i64) -> Result<(), &'static str> {
    if cents < 0 {
        return Err("Entry fee cannot be negative");
    }
    if cents > 100_000_000 {
        return Err("Entry fee exceeds maximum allowed amount");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("organizer").is_ok());
        assert!(validate_role("participant").is_ok());
        assert!(validate_role("superuser").is_err());
    }

    #[test]
    fn test_validate_currency() {
        assert!(validate_currency("USD").is_ok());
        assert!(validate_currency("EUR").is_ok());
        assert!(validate_currency("usd").is_err());
        assert!(validate_currency("DOLLARS").is_err());
    }

    #[test]
    fn test_validate_competition_title() {
        assert_eq!(
            validate_competition_title("  Autumn photo contest  "),
            Ok("Autumn photo contest".to_string())
        );
        assert!(validate_competition_title("   ").is_err());
        assert!(validate_competition_title(&"x".repeat(257)).is_err());
    }

    #[test]
    fn test_validate_reason() {
        assert_eq!(validate_reason(None), Ok(None));
        assert_eq!(validate_reason(Some("   ")), Ok(None));
        assert_eq!(
            validate_reason(Some("  Blurry photo  ")),
            Ok(Some("Blurry photo".to_string()))
        );
        assert!(validate_reason(Some(&"x".repeat(1025))).is_err());
    }

    #[test]
    fn test_validate_entry_fee() {
        assert!(validate_entry_fee(0).is_ok());
        assert!(validate_entry_fee(1500).is_ok());
        assert!(validate_entry_fee(-1).is_err());
        assert!(validate_entry_fee(100_000_001).is_err());
    }
}
