pub mod token_issuer;

pub use token_issuer::{issue_token, TokenIssuer};
