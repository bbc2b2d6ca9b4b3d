use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{models::stack::CreateStack, responses::ErrorResponse, state::AppState};

pub async fn create_stack(
    State(state): State<AppState>,
    Json(payload): Json<CreateStack>,
) -> Response {
    let CreateStack { name, description } = payload;
    // Time-derived id, no collision check. Creations within the same
    // millisecond would collide.
    let id = format!("stack_{}", Utc::now().timestamp_millis());

    match state
        .stack_repo
        .insert_stack(&id, &name, description.as_deref())
        .await
    {
        Ok(stack) => (StatusCode::OK, Json(stack)).into_response(),
        Err(e) => {
            eprintln!("DB error creating stack: {:?}", e);
            ErrorResponse::server_error("Failed to create stack").into_response()
        }
    }
}

pub async fn list_stacks(State(state): State<AppState>) -> Response {
    match state.stack_repo.list_stacks().await {
        Ok(stacks) => (StatusCode::OK, Json(stacks)).into_response(),
        Err(e) => {
            eprintln!("DB error listing stacks: {:?}", e);
            ErrorResponse::server_error("Failed to fetch stacks").into_response()
        }
    }
}

pub async fn get_stack(State(state): State<AppState>, Path(stack_id): Path<String>) -> Response {
    match state.stack_repo.find_stack_by_id(&stack_id).await {
        Ok(Some(stack)) => (StatusCode::OK, Json(stack)).into_response(),
        Ok(None) => ErrorResponse::not_found("Stack not found").into_response(),
        Err(e) => {
            eprintln!("DB error fetching stack {}: {:?}", stack_id, e);
            ErrorResponse::server_error("Failed to fetch stack").into_response()
        }
    }
}
