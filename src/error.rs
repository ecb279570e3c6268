use std::io;
use thiserror::Error;

/// Fatal errors that prevent the server from starting.
///
/// Per-connection failures are never represented here: a malformed request
/// or mid-response I/O error is contained in that connection's handler and
/// logged, not surfaced to the caller.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Bad port or content root supplied at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The listening port could not be bound.
    #[error("failed to bind port {port}")]
    Bind {
        port: u16,
        #[source]
        source: io::Error,
    },
}
