//! Validation helpers for DTOs.

use validator::ValidationError;

const MAX_PLAYER_KEY_LENGTH: usize = 64;

/// Validates a player/session key used to scope clue progression.
///
/// Keys are 1 to 64 characters drawn from ASCII letters, digits, `.`, `-`
/// and `_`, so they stay safe to log and to use as map keys.
pub fn validate_player_key(key: &str) -> Result<(), ValidationError> {
    if key.is_empty() || key.len() > MAX_PLAYER_KEY_LENGTH {
        let mut err = ValidationError::new("player_key_length");
        err.message = Some(
            format!(
                "player key must be 1-{} characters (got {})",
                MAX_PLAYER_KEY_LENGTH,
                key.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        let mut err = ValidationError::new("player_key_format");
        err.message =
            Some("player key must contain only ASCII letters, digits, '.', '-' or '_'".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_player_key_valid() {
        assert!(validate_player_key("alice").is_ok());
        assert!(validate_player_key("device-42").is_ok());
        assert!(validate_player_key("user_7.mobile").is_ok());
        assert!(validate_player_key(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_player_key_invalid_length() {
        assert!(validate_player_key("").is_err());
        assert!(validate_player_key(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_player_key_invalid_format() {
        assert!(validate_player_key("alice bob").is_err()); // space
        assert!(validate_player_key("alice@home").is_err()); // symbol
        assert!(validate_player_key("héloïse").is_err()); // non-ASCII
    }
}
