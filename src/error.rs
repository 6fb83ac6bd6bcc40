//! Error types for configuration and level loading
//!
//! Only load-time work can fail. A simulation tick never returns an error.

use thiserror::Error;

/// Invalid physics tuning
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tuning value `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("tuning value `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("failed to parse tuning: {0}")]
    Json(#[from] serde_json::Error),
}

/// Level document could not be loaded
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid body size {width}x{height}: extents must be positive and finite")]
    DegenerateBody { width: f32, height: f32 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
