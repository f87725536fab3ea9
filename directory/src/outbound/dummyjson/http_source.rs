//! Reqwest-backed users source.
//!
//! This adapter owns transport details only: the GET request, the client
//! timeout and mapping reqwest failures. Status validation and decoding
//! happen in the domain.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::ports::{TransportError, UsersResponse, UsersSource};

const DEFAULT_USER_AGENT: &str = concat!("directory/", env!("CARGO_PKG_VERSION"));

/// Users source that performs one HTTP GET against a fixed endpoint.
pub struct DummyJsonHttpSource {
    client: Client,
    endpoint: Url,
}

impl DummyJsonHttpSource {
    /// Build an adapter, optionally bounding each request by `timeout`.
    ///
    /// Without a timeout the client default applies.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
        if let Some(limit) = timeout {
            builder = builder.timeout(limit);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Endpoint every request is sent to.
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UsersSource for DummyJsonHttpSource {
    async fn fetch_users(&self) -> Result<UsersResponse, TransportError> {
        debug!(endpoint = %self.endpoint, "requesting users page");
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(status, bytes = body.len(), "users page received");
        Ok(UsersResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else if error.is_connect() {
        TransportError::connect(error.to_string())
    } else {
        TransportError::transport(error.to_string())
    }
}
