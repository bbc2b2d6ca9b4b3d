use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    models::chat_log::{ChatMessage, ChatReply},
    responses::ErrorResponse,
    state::AppState,
};

pub async fn handle_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatMessage>,
) -> Response {
    let ChatMessage {
        stack_id,
        user_query,
    } = payload;

    // TODO: run the stack's workflow graph here once execution lands.
    let response = format!("Mock response for query: {}", user_query);

    match state
        .chat_log_repo
        .insert_chat_log(&stack_id, &user_query, &response)
        .await
    {
        Ok(log) => (
            StatusCode::OK,
            Json(ChatReply {
                response: log.response,
                created_at: log.created_at,
            }),
        )
            .into_response(),
        Err(e) => {
            eprintln!("DB error logging chat for stack {}: {:?}", stack_id, e);
            ErrorResponse::server_error("Failed to record chat message").into_response()
        }
    }
}
