use super::errors::ConfigError;

const VISIBLE_PREFIX: usize = 8;

/// A non-empty Nebius API key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, then `...`, then one `*` per hidden character.
    pub fn masked(&self) -> String {
        let visible: String = self.0.chars().take(VISIBLE_PREFIX).collect();
        let hidden = self.0.chars().count().saturating_sub(VISIBLE_PREFIX);
        format!("{}...{}", visible, "*".repeat(hidden))
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey({})", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_key() {
        let result = ApiKey::new("");

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_mask_everything_after_first_eight_characters() {
        // Arrange
        let key = ApiKey::new("abc123xyz").unwrap();

        // Act
        let masked = key.masked();

        // Assert
        assert_eq!(masked, "abc123xy...*");
    }

    #[test]
    fn should_show_short_key_without_stars() {
        let key = ApiKey::new("short").unwrap();

        assert_eq!(key.masked(), "short...");
    }

    #[test]
    fn should_count_characters_not_bytes_when_masking() {
        let key = ApiKey::new("ñññññññññ").unwrap();

        assert_eq!(key.masked(), "ññññññññ...*");
    }

    #[test]
    fn should_mask_key_in_debug_output() {
        let key = ApiKey::new("sk-live-0123456789").unwrap();

        assert_eq!(format!("{:?}", key), "ApiKey(sk-live-...**********)");
    }
}
