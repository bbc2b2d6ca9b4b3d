pub mod chat_log_repository;
#[cfg(test)]
pub mod mock_db;
pub mod sqlite_chat_log_repository;
pub mod sqlite_stack_repository;
pub mod sqlite_workflow_repository;
pub mod stack_repository;
pub mod workflow_repository;

use sqlx::SqlitePool;

/// Create the schema if it does not exist yet. Runs on every startup.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stacks (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // UNIQUE(stack_id) backs the single-statement upsert in
    // SqliteWorkflowRepository; without it concurrent saves could insert twice.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS workflows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            stack_id TEXT NOT NULL UNIQUE,
            nodes TEXT NOT NULL,
            edges TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS chat_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            stack_id TEXT NOT NULL,
            user_query TEXT NOT NULL,
            response TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
