//! Request/response types for the svcerr server HTTP API.

use serde::{Deserialize, Serialize};
use svcerr_core::Error;

#[derive(Serialize)]
pub struct HealthResponse {
    /// Server status ("ok").
    pub status: String,
    /// Server version.
    pub version: String,
    /// Server uptime in seconds.
    pub uptime_seconds: u64,
}

/// One named error in the catalog.
#[derive(Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub error: Error,
}

#[derive(Deserialize)]
pub struct RenderParams {
    /// Detail to put on the rendered error (defaults to empty).
    #[serde(default)]
    pub detail: Option<String>,
}

/// Classification of an error text.
#[derive(Serialize)]
pub struct InspectResponse {
    /// The error as decoded, or the fallback holding the raw text as detail.
    pub error: Error,
    /// Whether the text was a well-formed JSON error.
    pub decoded: bool,
    /// Category name for the code, if it is one of the named kinds.
    pub kind: Option<&'static str>,
    pub client_error: bool,
    pub server_error: bool,
    pub not_found: bool,
    pub already_exists: bool,
}
