use thiserror::Error;

#[derive(Error, Debug)]
pub enum GqlDemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid variables JSON: {0}")]
    InvalidVariables(String),
}

pub type Result<T> = std::result::Result<T, GqlDemoError>;
