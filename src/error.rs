use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    /// The snapshot breaks the caller contract; no partial result is produced.
    #[error("inconsistent input: {0}")]
    InconsistentInput(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AssessError {
    pub fn is_inconsistent_input(&self) -> bool {
        matches!(self, AssessError::InconsistentInput(_))
    }
}

pub type Result<T> = std::result::Result<T, AssessError>;
