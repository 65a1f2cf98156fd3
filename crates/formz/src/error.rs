// File: src/error.rs
// Purpose: Error type shared by configuration loading and script generation

use std::path::PathBuf;

/// Errors raised while loading form definitions or rendering conditions.
///
/// Missing values or unknown fields met during a render pass are not errors:
/// those are skipped so that partial data never aborts page rendering.
#[derive(Debug, thiserror::Error)]
pub enum FormzError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("activation condition of validator `{validator}` on field `{field}`: {message}")]
    Condition {
        field: String,
        validator: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, FormzError>;
