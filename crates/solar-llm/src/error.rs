use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolarError {
    /// The request never produced a usable response: connection failure,
    /// timeout, non-success status, or a body that could not be read.
    #[error("Solar request failed{}: {message}", status_suffix(.status))]
    RequestFailed {
        status: Option<StatusCode>,
        message: String,
    },

    /// The connection dropped after streaming had begun.
    #[error("Solar stream interrupted: {0}")]
    StreamInterrupted(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SolarError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: StatusCode, body: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: Some(status),
            message: body.into(),
        }
    }

    pub fn is_request_failed(&self) -> bool {
        matches!(self, Self::RequestFailed { .. })
    }

    pub fn is_stream_interrupted(&self) -> bool {
        matches!(self, Self::StreamInterrupted(_))
    }
}

impl From<reqwest::Error> for SolarError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

fn status_suffix(status: &Option<StatusCode>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, SolarError>;
