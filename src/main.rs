use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use genai_stack_backend::config::Config;
use genai_stack_backend::db;
use genai_stack_backend::db::chat_log_repository::ChatLogRepository;
use genai_stack_backend::db::sqlite_chat_log_repository::SqliteChatLogRepository;
use genai_stack_backend::db::sqlite_stack_repository::SqliteStackRepository;
use genai_stack_backend::db::sqlite_workflow_repository::SqliteWorkflowRepository;
use genai_stack_backend::db::stack_repository::StackRepository;
use genai_stack_backend::db::workflow_repository::WorkflowRepository;
use genai_stack_backend::routes;
use genai_stack_backend::state::AppState;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config = Config::from_env();

    let pool = establish_connection(&config.database_url).await;
    db::create_tables(&pool)
        .await
        .expect("Failed to create database schema");

    let state = AppState {
        stack_repo: Arc::new(SqliteStackRepository { pool: pool.clone() }) as Arc<dyn StackRepository>,
        workflow_repo: Arc::new(SqliteWorkflowRepository { pool: pool.clone() })
            as Arc<dyn WorkflowRepository>,
        chat_log_repo: Arc::new(SqliteChatLogRepository { pool: pool.clone() })
            as Arc<dyn ChatLogRepository>,
    };

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .expect("Invalid origin in ALLOWED_ORIGINS")
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true);

    let app = routes::app(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = config.bind_addr.parse().expect("Invalid BIND_ADDR");
    let listener = TcpListener::bind(addr).await.unwrap();
    println!("GenAI Stack API running at http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}

/// Establish a connection to the database and verify it.
async fn establish_connection(database_url: &str) -> SqlitePool {
    let pool = SqlitePool::connect(database_url)
        .await
        .expect("Failed to connect to the database");

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .expect("Failed to verify database connection");

    info!("Successfully connected to the database");
    pool
}
