use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// A named container for one workflow configuration. Stacks are never updated
/// or deleted through the API; only created and read.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Stack {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateStack {
    pub name: String,
    pub description: Option<String>,
}
