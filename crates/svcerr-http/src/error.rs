//! HTTP response conversion for the model error.
//!
//! `ApiError` wraps `svcerr_core::Error` so handlers can return
//! `Result<_, ApiError>` and propagate model errors with `?`.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use svcerr_core::Error;

/// Model error on its way out through HTTP.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub Error);

impl ApiError {
    pub fn into_inner(self) -> Error {
        self.0
    }

    pub fn status_code(&self) -> StatusCode {
        response_status(&self.0)
    }
}

/// Status line for `err`: its code when that is a status whose response can
/// carry the JSON body, 500 otherwise.
///
/// 1xx, 204, 205 and 304 responses have no body, so they are never used.
pub fn response_status(err: &Error) -> StatusCode {
    let code = u16::try_from(svcerr_core::http_status(Some(err))).unwrap_or(0);
    let carries_body = (200..600).contains(&code) && !matches!(code, 204 | 205 | 304);
    if carries_body {
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.0.to_json();
        let mut response = (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response();
        // Kept for middleware that reports or rewrites error responses.
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Replaces the detail of an error answered with a 5xx status line by that
/// status's reason phrase.
///
/// Keyed on [`response_status`], not the code, so errors whose code falls
/// back to 500 are hidden too. Client faults pass through unchanged: their
/// detail describes the caller's own request.
pub fn redact(err: Error) -> Error {
    let status = response_status(&err);
    if status.is_server_error() {
        err.with_detail(status.canonical_reason().unwrap_or_default())
    } else {
        err
    }
}
