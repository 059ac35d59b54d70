// src/config/mod.rs

pub mod table_config;

// Re-export main types for convenience
pub use table_config::TableConfig;
