//! svcerr HTTP - axum transport adapter for the svcerr error model.
//!
//! Provides:
//! - `ApiError`, which renders a model error as a response whose status line
//!   is the error's code and whose body is its JSON text form
//! - server-fault detail redaction for trust boundaries
//! - `ErrorHandler` / `LogErrorHandler` for reporting failed requests
//! - a middleware that tags requests with `x-request-id` and reports every
//!   error response through an `ErrorHandler`

pub mod error;
pub mod handler;
pub mod middleware;

pub use error::{ApiError, redact, response_status};
pub use handler::{ErrorHandler, LogErrorHandler};
pub use middleware::{ErrorReporting, error_reporting_middleware};
