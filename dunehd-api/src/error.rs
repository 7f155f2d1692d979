use ipcontrol_client::IpControlError;
use thiserror::Error;

/// High-level API errors for Dune HD operations
///
/// This enum abstracts away the underlying HTTP communication details and
/// separates the failure classes that callers handle differently: a device
/// that cannot be reached, a response that is not the expected document, and
/// a document whose fields violate the protocol.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection timeouts, refused connections, DNS failures, and non-2xx
    /// HTTP responses. On this protocol a powered-down device looks exactly
    /// like an unreachable one, so callers usually absorb this case into an
    /// "offline" presentation instead of propagating it.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsing error
    ///
    /// The device answered 2xx but the body could not be parsed as an IP
    /// Control parameter document. Unlike [`ApiError::Network`] this points
    /// at a protocol or firmware mismatch and is worth surfacing.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Protocol violation in an otherwise well-formed response
    ///
    /// A parameter that must be numeric carried a non-numeric value. A
    /// parameter that is missing entirely is not an error; it is reported
    /// as absent by the typed accessors on `StatusReport`.
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convert from IpControlError to ApiError
impl From<IpControlError> for ApiError {
    fn from(error: IpControlError) -> Self {
        match error {
            IpControlError::Network(msg) => ApiError::Network(msg),
            IpControlError::Parse(msg) => ApiError::Parse(msg),
        }
    }
}
