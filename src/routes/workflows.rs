use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{models::workflow::SaveWorkflow, responses::ErrorResponse, state::AppState};

/// Upsert: first save for a stack inserts, later saves overwrite the graph in
/// place.
pub async fn save_workflow(
    State(state): State<AppState>,
    Json(payload): Json<SaveWorkflow>,
) -> Response {
    let (stack_id, nodes, edges) = payload.into_graph();

    match state
        .workflow_repo
        .upsert_workflow(&stack_id, nodes, edges)
        .await
    {
        Ok(workflow) => (StatusCode::OK, Json(workflow)).into_response(),
        Err(e) => {
            eprintln!("DB error saving workflow for stack {}: {:?}", stack_id, e);
            ErrorResponse::server_error("Failed to save workflow").into_response()
        }
    }
}

pub async fn get_workflow(State(state): State<AppState>, Path(stack_id): Path<String>) -> Response {
    match state.workflow_repo.find_workflow_by_stack_id(&stack_id).await {
        Ok(Some(workflow)) => (StatusCode::OK, Json(workflow)).into_response(),
        Ok(None) => ErrorResponse::not_found("Workflow not found").into_response(),
        Err(e) => {
            eprintln!("DB error fetching workflow for stack {}: {:?}", stack_id, e);
            ErrorResponse::server_error("Failed to fetch workflow").into_response()
        }
    }
}
