//! Error types for the IP Control client

use thiserror::Error;

/// Errors that can occur during IP Control communication
#[derive(Debug, Error)]
pub enum IpControlError {
    /// Network or HTTP communication error
    ///
    /// Covers timeouts, refused connections, DNS failures, and non-2xx
    /// status codes. The protocol gives no way to tell a powered-off
    /// device from an unreachable one, so callers treat all of these
    /// the same way.
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The device answered 2xx with a body that is not a parameter document
    ///
    /// Kept separate from [`IpControlError::Network`]: something is
    /// listening on the control port, but it does not speak this protocol.
    #[error("XML parsing error: {0}")]
    Parse(String),
}
