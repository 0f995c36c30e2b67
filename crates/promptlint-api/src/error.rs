use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use promptlint_core::{AuditError, AuditErrorKind};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Audit(#[from] AuditError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Audit(err) = self;
        let status = match err.kind {
            AuditErrorKind::InvalidRequest => StatusCode::UNPROCESSABLE_ENTITY,
            AuditErrorKind::Provider | AuditErrorKind::MalformedResponse => StatusCode::BAD_GATEWAY,
            AuditErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
        };

        let body = Json(json!({
            "kind": err.kind.as_str(),
            "message": err.message,
        }));

        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
