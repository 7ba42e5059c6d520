//! Unified error type.

use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// The error type returned by trove's fallible operations.
///
/// Most variants are infrastructure failures: binding a port, reading or
/// decoding a fixture, bad configuration. [`Error::InvalidArgument`] is the
/// one a client can cause; it renders as `400 Bad Request` with the message
/// as a plain-text body, so a handler can bail out with `?` on the first
/// bad parameter.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("fixture `{name}`: {source}")]
    Fixture {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidArgument(message) => Response::builder()
                .status(Status::BadRequest)
                .text(message),
            other => {
                tracing::error!("handler failed: {other}");
                Response::status(Status::InternalServerError)
            }
        }
    }
}
