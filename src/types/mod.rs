// src/types/mod.rs
pub mod claims;
pub mod output;

pub use claims::{AccessClaims, RoomGrant};
pub use output::{IssuedToken, Output};
