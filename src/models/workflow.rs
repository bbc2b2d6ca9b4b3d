use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use time::OffsetDateTime;

/// The saved graph for a stack. `nodes` and `edges` are opaque JSON arrays
/// owned by the front-end canvas; the backend stores and returns them as-is.
/// At most one row exists per `stack_id` (UNIQUE constraint + upsert).
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Workflow {
    pub id: i64,
    pub stack_id: String,
    pub nodes: Value,
    pub edges: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Save payload. Each node/edge must be a JSON object but its keys are not
/// interpreted here. Unknown top-level fields are accepted and dropped.
#[derive(Debug, Deserialize, Serialize)]
pub struct SaveWorkflow {
    pub stack_id: String,
    pub nodes: Vec<Map<String, Value>>,
    pub edges: Vec<Map<String, Value>>,
}

impl SaveWorkflow {
    /// Collapse the validated record lists back into the storage representation.
    pub fn into_graph(self) -> (String, Value, Value) {
        let nodes = Value::Array(self.nodes.into_iter().map(Value::Object).collect());
        let edges = Value::Array(self.edges.into_iter().map(Value::Object).collect());
        (self.stack_id, nodes, edges)
    }
}
