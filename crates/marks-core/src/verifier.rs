//! Reachability verification with a single relay fallback.
//!
//! A direct GET to `protocol + url` is tried first. If it fails for any
//! reason (transport error, error status, timeout) exactly one more GET is
//! issued to the relay prefix followed by the same address. The two attempts
//! never overlap.

use std::time::Duration;
use tracing::{debug, info};

use crate::fetcher::Transport;
use crate::{Error, Result};

/// Default CORS relay used for the fallback attempt.
pub const DEFAULT_RELAY_PREFIX: &str = "https://cors-anywhere.herokuapp.com/";

/// Default time budget for each attempt.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Confirms that bookmark addresses resolve.
pub struct Verifier<T: Transport> {
    transport: T,
    relay_prefix: String,
    attempt_timeout: Duration,
}

impl<T: Transport> Verifier<T> {
    /// Verifier with the default relay and attempt timeout.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            relay_prefix: DEFAULT_RELAY_PREFIX.to_string(),
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    /// Use `prefix` instead of the default relay for the fallback attempt.
    #[must_use]
    pub fn with_relay_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.relay_prefix = prefix.into();
        self
    }

    /// Bound each of the two attempts by `timeout`.
    #[must_use]
    pub const fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Prefix used for the fallback attempt.
    pub fn relay_prefix(&self) -> &str {
        &self.relay_prefix
    }

    /// The transport requests go through.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Succeeds if either the direct request or the relay request succeeds.
    ///
    /// Fails with [`Error::UnreachableUrl`] ("URL not found") when both fail.
    pub async fn verify(&self, protocol: &str, url: &str) -> Result<()> {
        let address = format!("{protocol}{url}");

        match self.attempt(&address).await {
            Ok(()) => {
                debug!("{} is reachable", address);
                return Ok(());
            },
            Err(e) => info!("Direct request to {} failed ({}), trying relay", address, e),
        }

        let relayed = format!("{}{}", self.relay_prefix, address);
        match self.attempt(&relayed).await {
            Ok(()) => {
                debug!("{} is reachable through relay", address);
                Ok(())
            },
            Err(e) => {
                info!("Relay request for {} failed ({})", address, e);
                Err(Error::UnreachableUrl { address })
            },
        }
    }

    async fn attempt(&self, address: &str) -> Result<()> {
        match tokio::time::timeout(self.attempt_timeout, self.transport.reach(address)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(format!(
                "no response from {address} within {:?}",
                self.attempt_timeout
            ))),
        }
    }
}
