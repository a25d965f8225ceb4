use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory for the file-backed key-value store.
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// How many featured events the home view shows.
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

fn default_featured_limit() -> usize {
    3
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `EVENTIFY__STORAGE__DATA_DIR=/tmp/eventify` overrides the file value
            .add_source(config::Environment::with_prefix("EVENTIFY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
