//! Room access token minting.
//!
//! Builds HS256-signed JWTs carrying a `video` grant (room, join, publish,
//! subscribe) for a real-time media server, from an issuer id and shared
//! secret supplied at runtime.

pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod jwt_core;
pub mod types;

pub use config::{IssuerConfig, SigningKey};
pub use error::TokenError;
pub use jwt_core::{issue_token, TokenIssuer};
pub use types::{AccessClaims, IssuedToken, RoomGrant};

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so stdout carries only tokens.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
