use std::env;

pub struct Config {
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok(); // Load .env file

        // SQLite file next to the binary by default; point DATABASE_URL at
        // another file (or :memory:) to override.
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://genai_stack.db?mode=rwc".to_string());

        let allowed_origins: Vec<String> = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());

        Config {
            database_url,
            allowed_origins,
            bind_addr,
        }
    }
}
