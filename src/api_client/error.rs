use reqwest::StatusCode;
use thiserror::Error;

use super::models::ErrorResponseModel;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request to the expense service could not complete: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Authentication rejected by the expense service{}", suffix(.message))]
    Auth { message: Option<String> },
    #[error("Request rejected as invalid by the expense service{}", suffix(.message))]
    Validation { message: Option<String> },
    #[error("Status code other than 2xx received from API. StatusCode: {0}. Body: {1}")]
    Status(StatusCode, String),
    #[error("Could not parse response body from the expense service. Error: {0}")]
    Parse(#[from] serde_json::Error),
}

fn suffix(message: &Option<String>) -> String {
    message.as_ref().map(|msg| format!(": {}", msg)).unwrap_or_default()
}

impl Error {
    ///
    /// Maps a non-2xx response onto the error taxonomy. The server's
    /// `{ "message": ... }` body is kept when it can be read.
    ///
    pub fn from_response(status: StatusCode, body: String) -> Self {
        let message = parse_server_message(&body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Auth { message },
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
                => Error::Validation { message },
            _ => Error::Status(status, body),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth { .. })
    }

    /// Message the server supplied for this failure, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Auth { message } | Error::Validation { message } => message.as_deref(),
            _ => None,
        }
    }
}

pub fn parse_server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponseModel>(body).ok()
        .and_then(|res| res.message)
        .filter(|msg| !msg.trim().is_empty())
}
