//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use crate::core::auto_layout::{LayoutConfig, LayoutEngine};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Fixed seed for the placement jitter
    /// Example: LAYOUT_SEED=42
    pub seed: Option<u64>,

    /// Override for the number of simulation steps
    pub iterations: Option<usize>,

    /// Log level filter (trace|debug|info|warn|error|off)
    pub log_level: Option<String>,

    /// Log output format (compact|pretty|json)
    pub log_format: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Numeric variables that fail to parse are ignored.
    pub fn from_env() -> Self {
        Self {
            seed: std::env::var("LAYOUT_SEED")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            iterations: std::env::var("LAYOUT_ITERATIONS")
                .ok()
                .and_then(|v| v.trim().parse().ok()),
            log_level: std::env::var("LAYOUT_LOG_LEVEL").ok(),
            log_format: std::env::var("LAYOUT_LOG_FORMAT").ok(),
        }
    }

    /// Check if a fixed seed is configured
    pub fn has_seed(&self) -> bool {
        self.seed.is_some()
    }

    /// Apply the environment overrides on top of `base`
    pub fn layout_config(&self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            iterations: self.iterations.unwrap_or(base.iterations),
            ..base
        }
    }

    /// Build an engine from `base` plus the environment overrides
    pub fn engine(&self, base: LayoutConfig) -> LayoutEngine {
        let engine = LayoutEngine::new(self.layout_config(base));
        match self.seed {
            Some(seed) => engine.with_seed(seed),
            None => engine,
        }
    }
}
