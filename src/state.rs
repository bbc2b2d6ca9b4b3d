use crate::db::{
    chat_log_repository::ChatLogRepository, stack_repository::StackRepository,
    workflow_repository::WorkflowRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub stack_repo: Arc<dyn StackRepository>,
    pub workflow_repo: Arc<dyn WorkflowRepository>,
    pub chat_log_repo: Arc<dyn ChatLogRepository>,
}
