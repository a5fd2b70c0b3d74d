//! HTTP access to the source registry.
//!
//! A single blocking GET per run. The body is buffered in full before it is
//! handed to the decoder; retry policy belongs to whoever schedules the runs.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::error::{BridgeError, Result};

/// Default timeout for the registry request (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the registry's model listing endpoint
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Use a client configured by the caller (proxies, TLS roots, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Get a reference to the inner HTTP client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Fetch the raw listing from `url`.
    ///
    /// Anything but `200 OK` is reported as [`BridgeError::UpstreamStatus`];
    /// connection, timeout and body read failures as [`BridgeError::Transport`].
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching models from registry: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Registry at {} answered with {}", url, status);
            return Err(BridgeError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes()?;
        debug!("Read {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
