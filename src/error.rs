use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::cors;
use crate::llm::LLMError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Every failure the proxy can report. The display string is the exact
/// message the caller sees; detail only goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0} is missing")]
    MissingApiKey(String),

    #[error("Qwen API error")]
    Upstream { status: u16, payload: Value },

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<LLMError> for ProxyError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Upstream { status, payload } => ProxyError::Upstream { status, payload },
            other => ProxyError::Internal(other.into()),
        }
    }
}

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::MissingApiKey(_)
            | ProxyError::Upstream { .. }
            | ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        match &self {
            ProxyError::MethodNotAllowed => {
                debug!("Rejected request with unsupported method");
                return (status, body).into_response();
            }
            ProxyError::MissingApiKey(name) => {
                error!("API key variable {} is not set", name);
            }
            ProxyError::Upstream {
                status: upstream_status,
                payload,
            } => {
                error!(status = *upstream_status, "Qwen API error: {}", payload);
            }
            ProxyError::Internal(err) => {
                error!("Proxy error: {:#}", err);
            }
        }

        (status, cors::origin_header(), body).into_response()
    }
}
