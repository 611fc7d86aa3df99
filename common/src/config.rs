use once_cell::sync::OnceCell;
use std::env;

/// Fallback bcrypt work factor, matching `bcrypt::DEFAULT_COST`.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

#[derive(Debug, Clone)]
pub struct Config {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub mongodb_uri: String,
    pub database_name: String,
    pub bcrypt_cost: u32,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Loads `env_path` (if present) into the environment and builds the
    /// global config. Later calls return the first value.
    pub fn init(env_path: &str) -> &'static Self {
        dotenvy::from_filename(env_path).ok();

        CONFIG.get_or_init(Config::from_env)
    }

    /// Reads the config straight from the current environment.
    pub fn from_env() -> Self {
        let project_name =
            env::var("PROJECT_NAME").unwrap_or_else(|_| "islam-education-seeder".into());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/seeder.log".into());
        let mongodb_uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
        let database_name =
            env::var("MONGODB_DATABASE").unwrap_or_else(|_| "islam_education".into());
        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|c| c.parse().ok())
            .filter(|c| (4..=31).contains(c))
            .unwrap_or(DEFAULT_BCRYPT_COST);

        Config {
            project_name,
            log_level,
            log_file,
            mongodb_uri,
            database_name,
            bcrypt_cost,
        }
    }

    /// # Panics
    /// Panics if [`Config::init`] has not run yet.
    pub fn get() -> &'static Self {
        CONFIG.get().expect("Config not initialized")
    }
}
