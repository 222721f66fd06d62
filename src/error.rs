//! Crate-level error types.
//!
//! [`OrderDeskError`] unifies every error source (configuration, HTTP,
//! JSON, TLS, terminal) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrderDeskError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum OrderDeskError {
    /// An environment variable held a value that could not be used.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request failed or the server answered a read with a non-2xx status.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refused a status update.
    #[error("failed to update order status ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// TLS configuration could not be built.
    #[error("tls error: {0}")]
    Tls(String),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),
}
