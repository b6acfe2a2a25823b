use thiserror::Error;

#[derive(Error, Debug)]
pub enum RingError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Could not read {0} from the terminal")]
    Prompt(&'static str),
}

pub type Result<T> = std::result::Result<T, RingError>;
