//! Uniform failure shape for every remote call.
//!
//! Transport failures (connection refused, timeout, TLS) and structured error
//! bodies returned by the server both end up as an [`ApiError`], so callers
//! only ever look at `message` and `status`.

use serde::Deserialize;
use thiserror::Error;

pub const STATUS_UNAUTHORIZED: u16 = 401;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    /// HTTP status when the failure came from a response.
    pub status: Option<u16>,
}

/// Error body produced by the server's exception handler. Older endpoints
/// answer with a bare `{message}` instead.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    titulo: Option<String>,
    detalhe: Option<String>,
    message: Option<String>,
    mensagem_desenvolvedor: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: Option<u16>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Failure that never produced an HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(message, None)
    }

    /// Normalize a non-2xx response. `fallback` is used when the body carries
    /// no usable message.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        if let Some(dev) = parsed.mensagem_desenvolvedor.as_deref() {
            tracing::debug!(status, detail = dev, "server error detail");
        }

        let message = [parsed.detalhe, parsed.message, parsed.titulo]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        Self::new(message, Some(status))
    }

    /// 401/403: the session is no longer valid.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self.status, Some(STATUS_UNAUTHORIZED | STATUS_FORBIDDEN))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string(), e.status().map(|s| s.as_u16()))
    }
}
