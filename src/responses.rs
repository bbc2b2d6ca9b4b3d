use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Error envelope for every non-2xx response: `{"detail": "..."}`.
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn not_found(msg: &str) -> impl IntoResponse {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: msg.to_string(),
            }),
        )
    }

    pub fn server_error(msg: &str) -> impl IntoResponse {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                detail: msg.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;
    use serde_json::from_slice;

    use crate::responses::ErrorResponse;

    #[tokio::test]
    async fn test_not_found_response() {
        let resp = ErrorResponse::not_found("Stack not found").into_response();
        assert_eq!(resp.status(), axum::http::StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: ErrorResponse = from_slice(&body).unwrap();
        assert_eq!(json.detail, "Stack not found");
    }

    #[tokio::test]
    async fn test_server_error_response() {
        let resp = ErrorResponse::server_error("Failed to save workflow").into_response();
        assert_eq!(
            resp.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );

        let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: ErrorResponse = from_slice(&body).unwrap();
        assert_eq!(json.detail, "Failed to save workflow");
    }
}
