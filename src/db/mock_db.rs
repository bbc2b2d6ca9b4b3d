use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use time::OffsetDateTime;

use super::chat_log_repository::ChatLogRepository;
use super::stack_repository::StackRepository;
use super::workflow_repository::WorkflowRepository;
use crate::models::chat_log::ChatLog;
use crate::models::stack::Stack;
use crate::models::workflow::Workflow;

#[derive(Default)]
pub struct MockStackRepository {
    pub stacks: Mutex<Vec<Stack>>,
    pub should_fail: bool,
}

#[async_trait]
impl StackRepository for MockStackRepository {
    async fn insert_stack(
        &self,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Stack, sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        let now = OffsetDateTime::now_utc();
        let stack = Stack {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.stacks.lock().unwrap().push(stack.clone());
        Ok(stack)
    }

    async fn list_stacks(&self) -> Result<Vec<Stack>, sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        Ok(self.stacks.lock().unwrap().clone())
    }

    async fn find_stack_by_id(&self, stack_id: &str) -> Result<Option<Stack>, sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        Ok(self
            .stacks
            .lock()
            .unwrap()
            .iter()
            .find(|stack| stack.id == stack_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct MockWorkflowRepository {
    pub workflows: Mutex<Vec<Workflow>>,
    pub should_fail: bool,
}

#[async_trait]
impl WorkflowRepository for MockWorkflowRepository {
    async fn upsert_workflow(
        &self,
        stack_id: &str,
        nodes: Value,
        edges: Value,
    ) -> Result<Workflow, sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        let now = OffsetDateTime::now_utc();
        let mut workflows = self.workflows.lock().unwrap();
        if let Some(existing) = workflows.iter_mut().find(|w| w.stack_id == stack_id) {
            existing.nodes = nodes;
            existing.edges = edges;
            existing.updated_at = now;
            return Ok(existing.clone());
        }
        let workflow = Workflow {
            id: workflows.len() as i64 + 1,
            stack_id: stack_id.to_string(),
            nodes,
            edges,
            created_at: now,
            updated_at: now,
        };
        workflows.push(workflow.clone());
        Ok(workflow)
    }

    async fn find_workflow_by_stack_id(
        &self,
        stack_id: &str,
    ) -> Result<Option<Workflow>, sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        Ok(self
            .workflows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.stack_id == stack_id)
            .cloned())
    }
}

#[derive(Default)]
pub struct MockChatLogRepository {
    pub logs: Mutex<Vec<ChatLog>>,
    pub should_fail: bool,
}

#[async_trait]
impl ChatLogRepository for MockChatLogRepository {
    async fn insert_chat_log(
        &self,
        stack_id: &str,
        user_query: &str,
        response: &str,
    ) -> Result<ChatLog, sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }
        let mut logs = self.logs.lock().unwrap();
        let log = ChatLog {
            id: logs.len() as i64 + 1,
            stack_id: stack_id.to_string(),
            user_query: user_query.to_string(),
            response: response.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        logs.push(log.clone());
        Ok(log)
    }
}
