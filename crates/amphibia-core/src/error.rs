// ── Core error types ──
//
// Errors produced by `Source` implementations. The loader never surfaces
// these to observers (every failure collapses to `LoadState::Error`),
// but they keep the connectivity / protocol split for diagnostics.

use thiserror::Error;

use amphibia_api::FailureKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connectivity ─────────────────────────────────────────────────
    #[error("Cannot reach {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Protocol ─────────────────────────────────────────────────────
    #[error("Server responded with HTTP {status}")]
    Http { status: u16 },

    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Invalid endpoint URL: {message}")]
    InvalidEndpoint { message: String },

    // ── Local ────────────────────────────────────────────────────────
    #[error("Request cancelled")]
    Cancelled,
}

impl CoreError {
    /// The failure category, or `None` for a cancelled fetch.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::ConnectionFailed { .. } | Self::Timeout => Some(FailureKind::Connectivity),
            Self::Http { .. } | Self::MalformedResponse { .. } | Self::InvalidEndpoint { .. } => {
                Some(FailureKind::Protocol)
            }
            Self::Cancelled => None,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<amphibia_api::Error> for CoreError {
    fn from(err: amphibia_api::Error) -> Self {
        match err {
            amphibia_api::Error::Transport(ref e) if e.is_timeout() => CoreError::Timeout,
            amphibia_api::Error::Transport(e) => CoreError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            amphibia_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            amphibia_api::Error::InvalidUrl(e) => CoreError::InvalidEndpoint {
                message: e.to_string(),
            },
            amphibia_api::Error::Status { status, .. } => CoreError::Http { status },
            amphibia_api::Error::Deserialization { message, body: _ } => {
                CoreError::MalformedResponse { message }
            }
        }
    }
}
