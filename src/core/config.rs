use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("STAGEHUB_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        // Trailing slash would double up when joining paths
        let base_url = base_url.trim_end_matches('/').to_string();

        let timeout_secs = env::var("STAGEHUB_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "STAGEHUB_API_TIMEOUT_SECS must be a valid number".to_string())?;

        let user_agent = env::var("STAGEHUB_USER_AGENT")
            .unwrap_or_else(|_| format!("stagehub-client/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            base_url,
            timeout_secs,
            user_agent,
        })
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let path = env::var("STAGEHUB_STORAGE_PATH")
            .unwrap_or_else(|_| "stagehub-storage.json".to_string());

        Ok(Self { path })
    }
}
