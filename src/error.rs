//! Failure taxonomy for the news service client.
//!
//! Every command surfaces at most one of these to the user, as a single
//! line on stderr. The `Display` strings are the user-facing messages.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("unable to reach the news service: {0}")]
    Network(#[source] reqwest::Error),

    /// The service answered with HTTP 403.
    #[error("rate limited by the news service (HTTP 403); try again later")]
    RateLimited,

    /// Any other non-success status.
    #[error("news service returned HTTP {0}")]
    Upstream(StatusCode),

    /// A success status carrying a body we could not decode.
    #[error("unexpected response from the news service: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid news service endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl NewsError {
    /// Classify a non-success HTTP status. 403 is the service's rate-limit
    /// signal; everything else is a generic upstream failure.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::FORBIDDEN {
            NewsError::RateLimited
        } else {
            NewsError::Upstream(status)
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
