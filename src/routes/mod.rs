pub mod chat;
pub mod health;
pub mod stacks;
pub mod workflows;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Full application router. Shared by `main` and the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/stacks", post(stacks::create_stack).get(stacks::list_stacks))
        .route("/stacks/{stack_id}", get(stacks::get_stack))
        .route("/workflows", post(workflows::save_workflow))
        .route("/workflows/{stack_id}", get(workflows::get_workflow))
        .route("/chat", post(chat::handle_chat))
        .with_state(state)
}
