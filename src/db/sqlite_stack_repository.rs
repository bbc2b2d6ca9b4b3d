use async_trait::async_trait;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::stack_repository::StackRepository;
use crate::models::stack::Stack;

pub struct SqliteStackRepository {
    pub pool: SqlitePool,
}

#[async_trait]
impl StackRepository for SqliteStackRepository {
    async fn insert_stack(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Stack, sqlx::Error> {
        let now = OffsetDateTime::now_utc();
        let result = sqlx::query_as::<_, Stack>(
            r#"
            INSERT INTO stacks (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn list_stacks(&self) -> Result<Vec<Stack>, sqlx::Error> {
        let results = sqlx::query_as::<_, Stack>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM stacks
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }

    async fn find_stack_by_id(&self, stack_id: &str) -> Result<Option<Stack>, sqlx::Error> {
        let result = sqlx::query_as::<_, Stack>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM stacks
            WHERE id = $1
            "#,
        )
        .bind(stack_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}
