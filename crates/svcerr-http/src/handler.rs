//! Reporting of errors that end a request.

use svcerr_core::{DynError, error_id, http_status, is_bad_request};

/// Receives every error a transport is about to surface to a client.
///
/// Handlers observe; they must not block and cannot change the response.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, err: &DynError);
}

impl<F> ErrorHandler for F
where
    F: Fn(&DynError) + Send + Sync,
{
    fn handle(&self, err: &DynError) {
        self(err);
    }
}

/// Logs each error through `tracing`.
///
/// Client faults are logged at `warn`, everything else (server faults and
/// errors that are not model errors) at `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorHandler;

impl ErrorHandler for LogErrorHandler {
    fn handle(&self, err: &DynError) {
        let code = http_status(Some(err));
        let id = error_id(Some(err));
        if is_bad_request(Some(err)) {
            tracing::warn!(error_id = id, code, error = %err, "request failed");
        } else {
            tracing::error!(error_id = id, code, error = %err, "request failed");
        }
    }
}
