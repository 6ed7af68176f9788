use thiserror::Error;

/// The two failure categories a caller can branch on.
///
/// The list loader treats both identically; the split exists so that
/// diagnostics (and any future retry policy) can tell a flaky network
/// apart from a misbehaving server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a usable HTTP response
    /// (DNS, connection refused/reset, timeout, TLS).
    Connectivity,
    /// The server answered, but not with a decodable success payload
    /// (non-2xx status, malformed body).
    Protocol,
}

/// Top-level error type for the `amphibia-api` crate.
#[derive(Debug, Error)]
pub enum Error {
    // ── Connectivity ────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Protocol ────────────────────────────────────────────────────
    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {}", preview(.body))]
    Status { status: u16, body: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Which [`FailureKind`] this error belongs to.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) | Self::Tls(_) => FailureKind::Connectivity,
            Self::InvalidUrl(_) | Self::Status { .. } | Self::Deserialization { .. } => {
                FailureKind::Protocol
            }
        }
    }

    /// Returns `true` if this is a transient error worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// The HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// First 200 bytes of a response body, cut on a char boundary.
pub(crate) fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_decode_errors_are_protocol_failures() {
        let status = Error::Status {
            status: 503,
            body: String::new(),
        };
        let decode = Error::Deserialization {
            message: "expected `[`".into(),
            body: "{}".into(),
        };
        assert_eq!(status.kind(), FailureKind::Protocol);
        assert_eq!(decode.kind(), FailureKind::Protocol);
        assert!(status.is_transient());
        assert!(!decode.is_transient());
        assert_eq!(status.status(), Some(503));
        assert_eq!(decode.status(), None);
    }

    #[test]
    fn tls_errors_are_connectivity_failures() {
        assert_eq!(
            Error::Tls("bad cert".into()).kind(),
            FailureKind::Connectivity
        );
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = preview(&body);
        assert!(cut.len() <= 200);
        assert!(cut.chars().all(|c| c == 'é'));
    }
}
