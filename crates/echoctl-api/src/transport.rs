// Shared transport configuration for building reqwest::Client instances.
//
// The service expects a browser-like client: gzip, keep-alive, and the
// session cookie sent verbatim on every request. Header assembly lives
// in `client::connect`; this module only owns builder mechanics.

use std::time::Duration;

use crate::error::Error;

const USER_AGENT: &str = concat!("echoctl/", env!("CARGO_PKG_VERSION"));

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with the given default headers.
    ///
    /// Used by [`Client::connect`](crate::Client::connect) to inject the
    /// `Cookie` and `csrf` headers on every request.
    pub fn build_client(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)
    }
}
