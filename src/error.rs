use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Form is already {0}")]
    FormBusy(&'static str),

    #[error("Too many attempts. Please try again in a moment.")]
    RateLimited,

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl Error {
    /// Text shown inline under a waitlist form for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::InvalidEmail => "Please enter a valid email address",
            Error::RateLimited => "Too many attempts. Please try again in a moment.",
            _ => "Something went wrong. Please try again.",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
