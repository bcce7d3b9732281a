use chrono::Duration;
use std::fmt;

use crate::error::TokenError;

pub const DEFAULT_ROOM: &str = "test-room";
pub const DEFAULT_VALIDITY_HOURS: u32 = 24;
pub const DEFAULT_PARTICIPANTS: &str = "client-1,client-2,client-3";

/// Shared HMAC secret. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        SigningKey(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey([REDACTED])")
    }
}

/// Everything the issuer needs for one run.
#[derive(Debug, Clone)]
pub struct IssuerConfig {
    pub issuer_id: String,
    pub signing_key: SigningKey,
    pub room: String,
    pub validity_hours: u32,
    pub participants: Vec<String>,
    pub server_url: Option<String>,
}

impl IssuerConfig {
    pub fn new(issuer_id: impl Into<String>, signing_key: SigningKey) -> Self {
        IssuerConfig {
            issuer_id: issuer_id.into(),
            signing_key,
            room: DEFAULT_ROOM.to_string(),
            validity_hours: DEFAULT_VALIDITY_HOURS,
            participants: parse_participants(DEFAULT_PARTICIPANTS),
            server_url: None,
        }
    }

    pub fn validity(&self) -> Duration {
        Duration::hours(i64::from(self.validity_hours))
    }
}

/// Splits a comma separated participant list, dropping blanks.
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_validity_hours(raw: &str) -> Result<u32, TokenError> {
    let hours: u32 = raw
        .trim()
        .parse()
        .map_err(|_| TokenError::Config(format!("validity must be a whole number of hours, got '{}'", raw)))?;
    if hours == 0 {
        return Err(TokenError::Config("validity must be at least one hour".to_string()));
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participants_trims_and_skips_blanks() {
        assert_eq!(
            parse_participants(" alice, bob,,carol ,"),
            vec!["alice", "bob", "carol"]
        );
        assert!(parse_participants(" , ").is_empty());
    }

    #[test]
    fn test_parse_validity_hours() {
        assert_eq!(parse_validity_hours("24").unwrap(), 24);
        assert_eq!(parse_validity_hours(" 1 ").unwrap(), 1);
        assert!(matches!(parse_validity_hours("0"), Err(TokenError::Config(_))));
        assert!(matches!(parse_validity_hours("-3"), Err(TokenError::Config(_))));
        assert!(matches!(parse_validity_hours("a day"), Err(TokenError::Config(_))));
    }

    #[test]
    fn test_signing_key_debug_is_redacted() {
        let key = SigningKey::new("secret");
        assert_eq!(format!("{:?}", key), "SigningKey([REDACTED])");
        let config = IssuerConfig::new("devkey", key);
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_defaults() {
        let config = IssuerConfig::new("devkey", SigningKey::new("secret"));
        assert_eq!(config.room, "test-room");
        assert_eq!(config.validity().num_seconds(), 86_400);
        assert_eq!(config.participants, vec!["client-1", "client-2", "client-3"]);
    }
}
