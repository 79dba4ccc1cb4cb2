use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// The engine itself never fails; only reading a config from disk can.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
