//! Shared application state: error reporting and server metadata.

use std::sync::Arc;
use std::time::Instant;

use svcerr_http::ErrorReporting;

use crate::config::Config;

/// Shared application state, cloneable across handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    start_time: Instant,
    reporting: ErrorReporting,
}

impl AppState {
    /// Creates a new application state from config.
    pub fn new(config: &Config) -> Self {
        Self::with_redaction(config.redact)
    }

    /// Creates a state that logs errors, optionally redacting 5xx detail
    /// (for tests and embedding).
    pub fn with_redaction(redact: bool) -> Self {
        Self::with_reporting(ErrorReporting::default().redact_server_detail(redact))
    }

    /// Creates a state with a custom error reporting pipeline.
    pub fn with_reporting(reporting: ErrorReporting) -> Self {
        Self {
            inner: Arc::new(Inner {
                start_time: Instant::now(),
                reporting,
            }),
        }
    }

    pub fn reporting(&self) -> &ErrorReporting {
        &self.inner.reporting
    }

    pub fn uptime_secs(&self) -> u64 {
        self.inner.start_time.elapsed().as_secs()
    }
}
