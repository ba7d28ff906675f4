//! svcerr core - the structured error model shared by every service layer.
//!
//! One error type, [`Error`], carries an identity token, a status-like
//! numeric code, free-text detail and the reason phrase for the code. It is
//! built through named constructors, domain sentinels, [`Error::parse`] or
//! the [`ErrorBuilder`], and travels between processes as compact JSON.
//!
//! Comparison is by identity only: two errors built by the same constructor
//! are the same category regardless of their detail text. Use
//! [`Error::kind`] when an exhaustive `match` over categories is wanted.
//!
//! Transport crates (`svcerr-http`) depend on this crate and map the model
//! to their own status semantics.
//!
//! **Zero transport dependencies** - no axum, no wire-protocol code.

pub mod builder;
pub mod classify;
pub mod codec;
pub mod error;
pub mod kind;
pub mod sentinel;
pub mod status;
pub mod wrap;

pub use builder::ErrorBuilder;
pub use classify::{
    error_id, http_status, is, is_already_exists, is_bad_request, is_not_found, is_server_error,
};
pub use codec::DecodeError;
pub use error::{Error, concat_detail};
pub use kind::ErrorKind;
pub use sentinel::{
    DEPENDENCY_UNAVAILABLE, INVALID_INPUT, PERSISTENCE_FAILURE, RESOURCE_EXISTS,
    RESOURCE_NOT_FOUND, SYNC_FAILED, sentinels,
};
pub use status::status_text;
pub use wrap::{ResultExt, with_detail, wrap};

/// Any error value the classification helpers can inspect.
///
/// Model errors are recognised by downcasting; everything else is compared
/// and reported through its `Display` form.
pub type DynError = dyn std::error::Error + 'static;

/// Result alias for code that propagates the model error.
pub type Result<T> = std::result::Result<T, Error>;
