use async_trait::async_trait;
use serde_json::Value;

use crate::models::workflow::Workflow;

#[async_trait]
pub trait WorkflowRepository: Send + Sync {
    /// Insert a workflow for `stack_id`, or overwrite `nodes`/`edges` in place
    /// if one already exists. `id` and `created_at` survive the overwrite.
    async fn upsert_workflow(
        &self,
        stack_id: &str,
        nodes: Value,
        edges: Value,
    ) -> Result<Workflow, sqlx::Error>;

    async fn find_workflow_by_stack_id(
        &self,
        stack_id: &str,
    ) -> Result<Option<Workflow>, sqlx::Error>;
}
