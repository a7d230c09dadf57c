use thiserror::Error;

/// Top-level error type for the `shopfront-api` crate.
///
/// Covers every failure mode of a catalog read: transport, HTTP status,
/// payload decoding, and boundary validation. `shopfront-core` maps these
/// into domain errors; the UI collapses them into one message per page.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── HTTP ────────────────────────────────────────────────────────
    /// Non-2xx response from the catalog host.
    #[error("Catalog host returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// The payload decoded but violates the product schema.
    #[error("Invalid product payload: {field} {reason}")]
    Validation { field: &'static str, reason: String },
}

impl Error {
    /// Returns `true` if the host reported the product as unknown.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// Nothing in the workspace retries automatically; callers may use this
    /// to word a diagnostic.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_is_not_found() {
        let err = Error::Status {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn server_errors_are_transient() {
        let err = Error::Status {
            status: 503,
            body: "maintenance".into(),
        };
        assert!(err.is_transient());
        assert!(!err.is_not_found());
    }

    #[test]
    fn validation_is_neither() {
        let err = Error::Validation {
            field: "price",
            reason: "must not be negative".into(),
        };
        assert!(!err.is_transient());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid product payload: price must not be negative"
        );
    }
}
