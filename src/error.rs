use std::path::PathBuf;
use thiserror::Error;

/// Failures at the edges of the engine: parsing names, loading request
/// configuration. Converting text itself never fails.
#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("unknown script: {0}")]
    UnknownScript(String),

    #[error("unknown Roman style: {0}")]
    UnknownStyle(String),

    #[error("unknown engine code: {0}")]
    UnknownEngine(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid request config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, TranslitError>;
