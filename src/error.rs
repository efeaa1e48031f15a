use thiserror::Error;

#[derive(Error, Debug)]
pub enum KsecError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("secrets \"{0}\" not found")]
    NotFound(String),

    #[error("secrets \"{0}\" already exists")]
    AlreadyExists(String),

    #[error("Secret key \"{key}\" does not exist in secret \"{secret}\"")]
    KeyNotFound { secret: String, key: String },

    #[error("Data is not formatted correctly: {0}")]
    MalformedData(String),

    #[error("{0}")]
    Other(String),
}

impl From<config::ConfigError> for KsecError {
    fn from(err: config::ConfigError) -> Self {
        KsecError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KsecError>;
