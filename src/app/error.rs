use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcordError {
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown collection: {0}")]
    CollectionNotFound(String),

    #[error("Unknown topic: {0}")]
    TopicNotFound(String),

    #[error("No outline for book: {0}")]
    OutlineNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ConcordError>;
