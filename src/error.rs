use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Signing failed: {0}")]
    Signing(String),
    #[error("{0}")]
    Usage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::Signing(err.to_string())
    }
}
