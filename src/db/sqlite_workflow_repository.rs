use async_trait::async_trait;
use serde_json::Value;
use sqlx::SqlitePool;
use time::OffsetDateTime;

use super::workflow_repository::WorkflowRepository;
use crate::models::workflow::Workflow;

pub struct SqliteWorkflowRepository {
    pub pool: SqlitePool,
}

#[async_trait]
impl WorkflowRepository for SqliteWorkflowRepository {
    async fn upsert_workflow(
        &self,
        stack_id: &str,
        nodes: Value,
        edges: Value,
    ) -> Result<Workflow, sqlx::Error> {
        let now = OffsetDateTime::now_utc();
        // One atomic statement so concurrent saves for the same stack_id cannot
        // both insert.
        let result = sqlx::query_as::<_, Workflow>(
            r#"
            INSERT INTO workflows (stack_id, nodes, edges, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            ON CONFLICT(stack_id) DO UPDATE
            SET nodes = excluded.nodes,
                edges = excluded.edges,
                updated_at = excluded.updated_at
            RETURNING id, stack_id, nodes, edges, created_at, updated_at
            "#,
        )
        .bind(stack_id)
        .bind(nodes)
        .bind(edges)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_workflow_by_stack_id(
        &self,
        stack_id: &str,
    ) -> Result<Option<Workflow>, sqlx::Error> {
        let result = sqlx::query_as::<_, Workflow>(
            r#"
            SELECT id, stack_id, nodes, edges, created_at, updated_at
            FROM workflows
            WHERE stack_id = $1
            "#,
        )
        .bind(stack_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}
