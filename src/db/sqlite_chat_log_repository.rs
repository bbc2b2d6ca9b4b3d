use async_trait::async_trait;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::chat_log_repository::ChatLogRepository;
use crate::models::chat_log::ChatLog;

pub struct SqliteChatLogRepository {
    pub pool: SqlitePool,
}

#[async_trait]
impl ChatLogRepository for SqliteChatLogRepository {
    async fn insert_chat_log(
        &self,
        stack_id: &str,
        user_query: &str,
        response: &str,
    ) -> Result<ChatLog, sqlx::Error> {
        let now = OffsetDateTime::now_utc();
        let result = sqlx::query_as::<_, ChatLog>(
            r#"
            INSERT INTO chat_logs (stack_id, user_query, response, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, stack_id, user_query, response, created_at
            "#,
        )
        .bind(stack_id)
        .bind(user_query)
        .bind(response)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }
}
