use latlay::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Failed to parse layout document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Edge endpoint '{0}' is not a node of the document")]
    UnknownNode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
