//! Request ID and error reporting middleware.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderName, HeaderValue, header};
use axum::middleware::Next;
use axum::response::Response;
use svcerr_core::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::redact;
use crate::handler::{ErrorHandler, LogErrorHandler};

static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Middleware state: where error responses are reported, and whether
/// server-fault detail is hidden from clients.
#[derive(Clone)]
pub struct ErrorReporting {
    handler: Arc<dyn ErrorHandler>,
    redact_server_detail: bool,
}

impl Default for ErrorReporting {
    fn default() -> Self {
        Self::new(LogErrorHandler)
    }
}

impl ErrorReporting {
    pub fn new(handler: impl ErrorHandler + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            redact_server_detail: false,
        }
    }

    /// When enabled, responses with a 5xx status line carry the reason phrase
    /// instead of the detail.
    /// The handler still sees the full error.
    pub fn redact_server_detail(mut self, enabled: bool) -> Self {
        self.redact_server_detail = enabled;
        self
    }

    fn report(&self, response: Response) -> Response {
        let Some(err) = response.extensions().get::<Error>().cloned() else {
            return response;
        };

        self.handler.handle(&err);

        if !(self.redact_server_detail && response.status().is_server_error()) {
            return response;
        }

        let redacted = redact(err);
        let (mut parts, _) = response.into_parts();
        parts.headers.remove(header::CONTENT_LENGTH);
        let body = Body::from(redacted.to_json());
        parts.extensions.insert(redacted);
        Response::from_parts(parts, body)
    }
}

/// Ensures every request carries an `X-Request-Id` header and reports
/// error responses.
///
/// An incoming ID is preserved, otherwise a UUID v4 is generated. The ID is
/// set on the request and response headers and attached to a tracing span,
/// so handler logs include `request_id`. Any response produced from an
/// `ApiError` is passed to the configured [`ErrorHandler`] inside that span.
pub async fn error_reporting_middleware(
    State(reporting): State<ErrorReporting>,
    mut req: Request,
    next: Next,
) -> Response {
    let request_id = req
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    if let Ok(val) = HeaderValue::from_str(&request_id) {
        req.headers_mut().insert(X_REQUEST_ID.clone(), val);
    }

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = async move {
        let response = next.run(req).await;
        reporting.report(response)
    }
    .instrument(span)
    .await;

    if let Ok(val) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID.clone(), val);
    }

    response
}
