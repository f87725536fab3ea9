//! Driven port for fetching the raw users page.
//!
//! The port only moves bytes: status validation and decoding stay in the
//! domain so every adapter is judged by the same rules.

use async_trait::async_trait;

use super::define_port_error;

/// Raw HTTP outcome of one users request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl UsersResponse {
    /// Build a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

define_port_error! {
    /// Network failures below HTTP semantics.
    pub enum TransportError {
        /// The request did not complete before the client timeout.
        Timeout {
            /// Client diagnostic.
            message: String,
        } => "users request timed out: {message}",
        /// The server could not be reached (DNS, refused connection).
        Connect {
            /// Client diagnostic.
            message: String,
        } => "could not connect to users endpoint: {message}",
        /// Any other transport failure, including body read errors.
        Transport {
            /// Client diagnostic.
            message: String,
        } => "users request failed: {message}",
    }
}

/// Port for retrieving the users page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersSource: Send + Sync {
    /// Issue one request for the configured users page.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use directory::domain::ports::{FixtureUsersSource, UsersSource};
    ///
    /// # async fn demo() -> Result<(), directory::domain::ports::TransportError> {
    /// let response = FixtureUsersSource::default().fetch_users().await?;
    /// assert_eq!(response.status, 200);
    /// # Ok(())
    /// # }
    /// ```
    async fn fetch_users(&self) -> Result<UsersResponse, TransportError>;
}

/// Fixture source answering every request with the same response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureUsersSource {
    response: UsersResponse,
}

impl FixtureUsersSource {
    /// Answer with `response`.
    pub const fn new(response: UsersResponse) -> Self {
        Self { response }
    }
}

impl Default for FixtureUsersSource {
    fn default() -> Self {
        Self::new(UsersResponse::new(
            200,
            r#"{"users":[],"total":0,"skip":0,"limit":10}"#,
        ))
    }
}

#[async_trait]
impl UsersSource for FixtureUsersSource {
    async fn fetch_users(&self) -> Result<UsersResponse, TransportError> {
        Ok(self.response.clone())
    }
}
