use async_trait::async_trait;

use crate::models::stack::Stack;

#[async_trait]
pub trait StackRepository: Send + Sync {
    async fn insert_stack(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Stack, sqlx::Error>;

    async fn list_stacks(&self) -> Result<Vec<Stack>, sqlx::Error>;

    async fn find_stack_by_id(&self, stack_id: &str) -> Result<Option<Stack>, sqlx::Error>;
}
