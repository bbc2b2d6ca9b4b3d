use async_trait::async_trait;

use crate::models::chat_log::ChatLog;

#[async_trait]
pub trait ChatLogRepository: Send + Sync {
    async fn insert_chat_log(
        &self,
        stack_id: &str,
        user_query: &str,
        response: &str,
    ) -> Result<ChatLog, sqlx::Error>;
}
