use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub mealdb_base_url: String,
    /// URL the keep-alive job pings in production (typically our own
    /// /api/health behind the hosting platform's public hostname).
    pub keep_alive_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://data/recipebox.db".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8081".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let mealdb_base_url = env::var("MEALDB_BASE_URL")
            .unwrap_or_else(|_| crate::constants::MEALDB_DEFAULT_BASE_URL.to_string());

        let keep_alive_url = env::var("KEEP_ALIVE_URL").ok().filter(|s| !s.is_empty());

        Ok(Config {
            server_host,
            server_port,
            database_url,
            allowed_origins,
            environment,
            mealdb_base_url,
            keep_alive_url,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
