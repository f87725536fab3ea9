//! Failure taxonomy for one directory load.
//!
//! Every variant is terminal for the attempt that produced it. Errors are
//! reported as data (`DirectoryState::last_error` and the `load` result) and
//! never cross the presentation boundary as panics.

use thiserror::Error;

use super::decode::DecodeError;
use super::ports::TransportError;

/// Non-success HTTP status returned by the users endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The endpoint answered 404.
    #[error("users endpoint not found (404)")]
    NotFound,
    /// The endpoint answered with a 5xx status.
    #[error("users endpoint server error ({status})")]
    ServerError {
        /// Status code in `500..=599`.
        status: u16,
    },
    /// Any other status outside `200..=299`.
    #[error("users request failed ({status})")]
    RequestFailed {
        /// Offending status code.
        status: u16,
    },
}

impl HttpError {
    /// Classify `status`, returning `None` for success codes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use directory::domain::HttpError;
    ///
    /// assert_eq!(HttpError::from_status(200), None);
    /// assert_eq!(HttpError::from_status(404), Some(HttpError::NotFound));
    /// assert_eq!(
    ///     HttpError::from_status(503),
    ///     Some(HttpError::ServerError { status: 503 })
    /// );
    /// ```
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(Self::NotFound),
            500..=599 => Some(Self::ServerError { status }),
            _ => Some(Self::RequestFailed { status }),
        }
    }

    /// Status code carried by the error.
    pub const fn status(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::ServerError { status } | Self::RequestFailed { status } => status,
        }
    }
}

/// Why a directory load failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The endpoint answered with a non-success status.
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The body could not be decoded into a users page.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The request never produced an HTTP response.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A newer load replaced this one before it finished.
    #[error("load superseded by a newer request")]
    Superseded,
}
