//! Configuration errors
//!
//! Everything that can go wrong happens before the first tick. Once a
//! `GameState` exists the simulation has no failure surface.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("hole layout has no goals; at least one goal hole is required")]
    EmptyGoalSequence,

    #[error("invalid tuning value for `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("tick rate must be positive, got {0}")]
    InvalidTickRate(u32),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
