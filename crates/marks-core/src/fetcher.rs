use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{Error, Result};

/// Network seam used by the reachability verifier (allows mocking in tests).
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `address` and succeed once a non-error response starts arriving.
    ///
    /// Transport failures and error statuses (4xx/5xx) are both errors. The
    /// body is opaque; implementations need not read it in full.
    async fn reach(&self, address: &str) -> Result<()>;
}

/// HTTP client used to confirm bookmarked addresses resolve
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new fetcher with configured HTTP client
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(10))
    }

    /// Creates a new fetcher with a custom request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("marks/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }
}

// Note: Default is not implemented as Fetcher::new() can fail.

#[async_trait]
impl Transport for Fetcher {
    async fn reach(&self, address: &str) -> Result<()> {
        let response = self.client.get(address).send().await?;
        let status = response.status();
        let mut response = response.error_for_status().inspect_err(|_| {
            debug!("GET {} returned {}", address, status);
        })?;

        // One chunk proves the body is being served; the rest is dropped unread
        let first = response.chunk().await?;
        debug!(
            "{} answered {} ({} bytes read)",
            address,
            status,
            first.map_or(0, |chunk| chunk.len())
        );
        Ok(())
    }
}
