//! The error value and its constructors.

use std::fmt::{self, Display, Write as _};

use serde::{Deserialize, Serialize};

use crate::kind::ErrorKind;
use crate::status::status_text;

/// Structured service error.
///
/// `status` is the reason phrase for `code` at the moment of construction
/// and is never recomputed. The fields are public so the value maps 1:1 to
/// its wire form; assigning `code` directly leaves `status` stale.
///
/// `==` compares all four fields. Category comparison (identity only) is
/// [`Error::is`] / [`crate::is`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Error {
    pub id: String,
    pub code: i32,
    pub detail: String,
    pub status: String,
}

impl Error {
    /// Creates an error with an arbitrary identity.
    pub fn new(id: impl Into<String>, detail: impl Into<String>, code: i32) -> Self {
        Self {
            id: id.into(),
            code,
            detail: detail.into(),
            status: status_text(code).to_owned(),
        }
    }

    /// Creates an error for `kind`; the identity is the decimal code.
    pub fn from_kind(kind: ErrorKind, detail: impl Display) -> Self {
        Self::new(kind.id(), detail.to_string(), kind.code())
    }

    /// 400 Bad Request.
    pub fn bad_request(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::BadRequest, detail)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::Unauthorized, detail)
    }

    /// 403 Forbidden.
    pub fn forbidden(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::Forbidden, detail)
    }

    /// 404 Not Found.
    pub fn not_found(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::NotFound, detail)
    }

    /// 405 Method Not Allowed.
    pub fn method_not_allowed(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::MethodNotAllowed, detail)
    }

    /// 408 Request Timeout.
    pub fn timeout(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::Timeout, detail)
    }

    /// 409 Conflict.
    pub fn conflict(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::Conflict, detail)
    }

    /// 429 Too Many Requests.
    pub fn too_many_requests(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::TooManyRequests, detail)
    }

    /// 500 Internal Server Error.
    pub fn internal_server_error(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::InternalServerError, detail)
    }

    /// 502 Bad Gateway.
    pub fn bad_gateway(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::BadGateway, detail)
    }

    /// 503 Service Unavailable.
    pub fn service_unavailable(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::ServiceUnavailable, detail)
    }

    /// 504 Gateway Timeout.
    pub fn gateway_timeout(detail: impl Display) -> Self {
        Self::from_kind(ErrorKind::GatewayTimeout, detail)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl std::error::Error for Error {}

/// Concatenates the display form of every argument, without separators.
///
/// For callers that collect a heterogeneous list of values before building
/// an error detail.
pub fn concat_detail(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for arg in args {
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
    }
    out
}
