//! HTTP client factory with consistent timeout configuration.
//!
//! Outbound HTTP clients (currently only the Resend sender) are built here
//! rather than through `reqwest::Client::new()`, so that a slow provider can
//! never hold a notification task open indefinitely.

use reqwest::Client;
use std::time::Duration;

/// Default connect timeout (TCP handshake + TLS).
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default request timeout (total request/response time).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build an HTTP client with default timeouts.
///
/// Falls back to a client without timeouts if the builder fails (e.g., TLS
/// backend initialisation); the failure is logged.
pub fn build_client() -> Client {
    try_build_client().unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to build HTTP client with timeouts");
        Client::new()
    })
}

/// Build an HTTP client with default timeouts, returning Result for use in
/// fallible contexts.
pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .timeout(DEFAULT_REQUEST_TIMEOUT)
        .build()
}
