use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("ui framework call failed: {0}")]
    Framework(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UiError>;
