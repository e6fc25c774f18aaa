use thiserror::Error;

/// Fallback shown when no better failure message can be derived.
pub const UNKNOWN_ERROR: &str = "Unknown error";

pub type Result<T> = std::result::Result<T, QueryError>;

/// Failures a query submission can settle with.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("literature service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// The service answered with a success status but the payload did not
    /// decode into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl QueryError {
    /// Single inline message suitable for display. Decoder internals are
    /// never surfaced; anything without a usable message degrades to
    /// [`UNKNOWN_ERROR`].
    pub fn display_message(&self) -> String {
        match self {
            QueryError::Transport(message) if !message.trim().is_empty() => message.clone(),
            QueryError::Service { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => UNKNOWN_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Transport(err.to_string())
    }
}
