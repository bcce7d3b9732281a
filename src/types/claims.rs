// src/types/claims.rs
use serde::{Deserialize, Serialize};

/// Room permissions carried in the `video` claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomGrant {
    pub room: String,
    pub room_join: bool,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl RoomGrant {
    /// Join, publish and subscribe all allowed.
    pub fn full(room: impl Into<String>) -> Self {
        RoomGrant {
            room: room.into(),
            room_join: true,
            can_publish: true,
            can_subscribe: true,
        }
    }

    pub fn subscribe_only(room: impl Into<String>) -> Self {
        RoomGrant {
            can_publish: false,
            ..RoomGrant::full(room)
        }
    }
}

// Field order is the serialized order; keep it fixed so a given instant
// always yields the same payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub exp: i64,
    pub iss: String,
    pub nbf: i64,
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub video: RoomGrant,
}
