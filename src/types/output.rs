use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub participant: String,
    pub room: String,
    pub token: String,
    pub not_before: i64,
    pub expires_at: i64,
}

#[derive(Debug, Serialize)]
pub struct Output {
    pub room: String,
    pub valid_for_hours: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    pub tokens: Vec<IssuedToken>,
}
