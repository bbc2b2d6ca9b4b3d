use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Append-only record of one query/response exchange against a stack.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct ChatLog {
    pub id: i64,
    pub stack_id: String,
    pub user_query: String,
    pub response: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChatMessage {
    pub stack_id: String,
    pub user_query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
