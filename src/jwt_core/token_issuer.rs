use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use tracing::debug;

use crate::config::{IssuerConfig, SigningKey, DEFAULT_ROOM, DEFAULT_VALIDITY_HOURS};
use crate::error::TokenError;
use crate::types::{AccessClaims, IssuedToken, RoomGrant};

/// Mints HS256 room access tokens for a single issuer id and shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    issuer_id: String,
    key: EncodingKey,
    default_room: String,
    default_validity: Duration,
}

impl TokenIssuer {
    pub fn new(issuer_id: &str, signing_key: &SigningKey) -> Result<Self, TokenError> {
        if issuer_id.is_empty() {
            return Err(TokenError::InvalidInput("issuer id must not be empty".to_string()));
        }
        if signing_key.is_empty() {
            return Err(TokenError::Signing("signing key must not be empty".to_string()));
        }

        Ok(TokenIssuer {
            issuer_id: issuer_id.to_string(),
            key: EncodingKey::from_secret(signing_key.as_bytes()),
            default_room: DEFAULT_ROOM.to_string(),
            default_validity: Duration::hours(i64::from(DEFAULT_VALIDITY_HOURS)),
        })
    }

    pub fn from_config(config: &IssuerConfig) -> Result<Self, TokenError> {
        let mut issuer = TokenIssuer::new(&config.issuer_id, &config.signing_key)?;
        issuer.default_room = config.room.clone();
        issuer.default_validity = config.validity();
        Ok(issuer)
    }

    pub fn issue_token(&self, room: &str, participant: &str, validity: Duration) -> Result<IssuedToken, TokenError> {
        self.issue_token_at(room, participant, validity, Utc::now())
    }

    pub fn issue_token_at(
        &self,
        room: &str,
        participant: &str,
        validity: Duration,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        self.issue_with_grant(RoomGrant::full(room), participant, validity, None, now)
    }

    /// Uses the configured room and validity.
    pub fn issue_for_default_room(&self, participant: &str) -> Result<IssuedToken, TokenError> {
        self.issue_token(&self.default_room, participant, self.default_validity)
    }

    pub fn issue_with_grant(
        &self,
        grant: RoomGrant,
        participant: &str,
        validity: Duration,
        name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenError> {
        if grant.room.is_empty() {
            return Err(TokenError::InvalidInput("room must not be empty".to_string()));
        }
        if participant.is_empty() {
            return Err(TokenError::InvalidInput("participant must not be empty".to_string()));
        }
        if validity <= Duration::zero() {
            return Err(TokenError::InvalidInput(format!(
                "validity must be positive, got {}ms",
                validity.num_milliseconds()
            )));
        }
        // exp and nbf are whole seconds; a fractional validity cannot be represented.
        if validity != Duration::seconds(validity.num_seconds()) {
            return Err(TokenError::InvalidInput(format!(
                "validity must be a whole number of seconds, got {}ms",
                validity.num_milliseconds()
            )));
        }

        let nbf = now.timestamp();
        let claims = AccessClaims {
            exp: nbf + validity.num_seconds(),
            iss: self.issuer_id.clone(),
            nbf,
            sub: participant.to_string(),
            name: name.filter(|n| !n.is_empty()).map(String::from),
            video: grant,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;
        debug!(participant, room = %claims.video.room, exp = claims.exp, "issued room token");

        Ok(IssuedToken {
            participant: claims.sub,
            room: claims.video.room,
            token,
            not_before: claims.nbf,
            expires_at: claims.exp,
        })
    }
}

/// One-shot issuance without a config record.
pub fn issue_token(
    room: &str,
    participant: &str,
    validity: Duration,
    signing_key: &[u8],
    issuer_id: &str,
) -> Result<String, TokenError> {
    let issuer = TokenIssuer::new(issuer_id, &SigningKey::new(signing_key))?;
    Ok(issuer.issue_token(room, participant, validity)?.token)
}
