// src/config/table_config.rs

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for the demo binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Number of threads for the parallel table build
    pub threads: Option<usize>,

    /// Use the rayon table build instead of the sequential one
    pub parallel: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            log_level: "info".to_string(),
            threads: None, // Use Rayon's default
            parallel: false,
        }
    }
}

impl TableConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Start with defaults
            .set_default("log_level", "info")?
            .set_default("parallel", false)?;

        if Path::new("gcd-table.toml").exists() {
            builder = builder.add_source(File::with_name("gcd-table.toml"));
        }

        // Override with environment variables (prefix: GCD_TABLE_)
        builder = builder.add_source(
            Environment::with_prefix("GCD_TABLE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("log_level", "info")?
            .set_default("parallel", false)?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("GCD_TABLE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }
}
