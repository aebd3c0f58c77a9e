use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("registry responded with HTTP {0}")]
    RegistryStatus(reqwest::StatusCode),

    #[error("registry returned an empty payload")]
    EmptyRegistry,

    #[error("failed to parse registry JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
