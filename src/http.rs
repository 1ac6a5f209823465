// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use reqwest::{Client, ClientBuilder, StatusCode, header};
use std::time::Duration;
use thiserror::Error;

/// Creates HTTP clients that share a user agent and timeout.
///
/// Every client created by a factory identifies itself with the same
/// user agent, and gives up on a request that takes longer than the
/// factory's timeout, whether it is stuck connecting or reading.
#[derive(Clone, Debug)]
pub struct HTTPClientFactory {
    user_agent: String,
    timeout: Duration,
}

impl HTTPClientFactory {
    /// Default number of seconds to wait before giving up on a request.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

    /// Creates a new factory whose user agent is built from the given
    /// application `name` and `version`.
    pub fn new(name: &str, version: &str) -> Self {
        let user_agent = format!("{name} v{version}");
        let timeout = Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS);
        Self { user_agent, timeout }
    }

    /// The user agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Creates a new HTTP client.
    ///
    /// According to the reqwest docs, this only fails if a TLS backend
    /// or the DNS resolver cannot be initialized.
    pub fn create(&self) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(&self.user_agent)
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .build()
            .map_err(HTTPError::Client)
    }
}

impl Default for HTTPClientFactory {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug, Error)]
pub enum HTTPError {
    /// An HTTP client could not be constructed.
    #[error("Could not create HTTP client: {0}")]
    Client(reqwest::Error),

    /// An error that occurred while making an HTTP request, including
    /// timeouts and errors reading the response body.
    #[error("Error while making HTTP request: {0}")]
    Request(#[from] reqwest::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    #[error("Request returned HTTP {0}")]
    Http(StatusCode),

    /// A missing Content-Type header in a response.
    #[error("Missing Content-Type header")]
    MissingContentType,

    /// An invalid Content-Type header.
    #[error("Invalid Content-Type header value: {0}")]
    InvalidContentType(#[from] header::ToStrError),

    /// A Content-Type that is not understood by the service.
    #[error("Unexpected content type: {0}")]
    UnexpectedContentType(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn it_returns_user_agent_with_version_number() {
        let factory = HTTPClientFactory::default();
        let user_agent = factory.user_agent();
        let version_re = Regex::new(r"^[a-z]+ v\d+\.\d+\.\d+(-(alpha|beta)\.\d+)?$").unwrap();
        assert!(
            version_re.is_match(user_agent),
            "{} does not match {}",
            user_agent,
            version_re,
        );
    }

    #[test]
    fn it_builds_a_user_agent_from_a_name_and_version() {
        let factory = HTTPClientFactory::new("testagent", "1.2.3");
        assert_eq!(factory.user_agent(), "testagent v1.2.3");
    }

    #[test]
    fn it_times_out_after_twenty_seconds_by_default() {
        let factory = HTTPClientFactory::default();
        assert_eq!(factory.timeout, Duration::from_secs(20));
    }

    #[test]
    fn it_creates_a_client() {
        assert!(HTTPClientFactory::default().create().is_ok());
    }
}
