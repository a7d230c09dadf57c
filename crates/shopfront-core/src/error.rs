// ── Core error types ──
//
// Domain errors from shopfront-core. Consumers never see raw HTTP or JSON
// failures; the `From<shopfront_api::Error>` impl translates them. Pages
// collapse every variant into one fixed message, but the detail survives
// for logging.

use thiserror::Error;

use crate::model::ProductId;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach catalog host at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Catalog request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Product not found: {id}")]
    ProductNotFound { id: ProductId },

    #[error("Invalid response from catalog host: {message}")]
    InvalidResponse { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shopfront_api::Error> for CoreError {
    fn from(err: shopfront_api::Error) -> Self {
        match err {
            shopfront_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            shopfront_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shopfront_api::Error::Tls(reason) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            shopfront_api::Error::Status { status, body } => CoreError::Api {
                message: if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    format!("HTTP {status}: {body}")
                },
                status: Some(status),
            },
            shopfront_api::Error::Deserialization { message, body: _ } => {
                CoreError::InvalidResponse { message }
            }
            shopfront_api::Error::Validation { field, reason } => CoreError::InvalidResponse {
                message: format!("{field} {reason}"),
            },
        }
    }
}
