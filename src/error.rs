use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Username must not be empty")]
    EmptyIdentifier,

    #[error("Invalid username: {0}")]
    InvalidIdentifier(String),

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the error came from talking to the remote service rather than from local input.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::GitHubApi(_) | Error::UserNotFound(_) | Error::Network(_) | Error::Serialization(_)
        )
    }
}
