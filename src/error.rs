use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Processing failed: {0}")]
    Process(String),
}

impl FetcherError {
    pub fn process(message: impl Into<String>) -> Self {
        Self::Process(message.into())
    }
}

pub type Result<T> = std::result::Result<T, FetcherError>;
