//! Adding context to an error without losing its classification.

use std::fmt::Display;

use crate::DynError;
use crate::error::Error;

/// Identity given to errors produced by wrapping something that is not a
/// model error.
pub const WRAPPED_ERROR_ID: &str = "WRAPPED_ERROR";

/// Identity given to errors produced by [`with_detail`] on something that is
/// not a model error.
pub const DETAILED_ERROR_ID: &str = "DETAILED_ERROR";

/// Prefixes `message` to the error's detail, keeping identity, code and status.
///
/// With no error, yields a 500 `WRAPPED_ERROR` carrying `message`. A foreign
/// error becomes a 500 `WRAPPED_ERROR` whose detail is `message: <error text>`.
pub fn wrap(original: Option<&DynError>, message: impl Display) -> Error {
    match original {
        None => Error::new(WRAPPED_ERROR_ID, message.to_string(), 500),
        Some(err) => match err.downcast_ref::<Error>() {
            Some(model) => model.wrap(message),
            None => Error::new(WRAPPED_ERROR_ID, format!("{message}: {err}"), 500),
        },
    }
}

/// Replaces the error's detail, keeping identity, code and status.
///
/// With no error, or a foreign one, yields a 500 `DETAILED_ERROR` whose
/// detail is exactly `detail`; the foreign error's text is dropped.
pub fn with_detail(original: Option<&DynError>, detail: impl Into<String>) -> Error {
    match original.and_then(|err| err.downcast_ref::<Error>()) {
        Some(model) => model.with_detail(detail),
        None => Error::new(DETAILED_ERROR_ID, detail, 500),
    }
}

impl Error {
    /// Newest context first: `"{message}: {detail}"`.
    pub fn wrap(&self, message: impl Display) -> Error {
        Error {
            id: self.id.clone(),
            code: self.code,
            detail: format!("{message}: {}", self.detail),
            status: self.status.clone(),
        }
    }

    pub fn with_detail(&self, detail: impl Into<String>) -> Error {
        Error {
            id: self.id.clone(),
            code: self.code,
            detail: detail.into(),
            status: self.status.clone(),
        }
    }
}

/// Extension trait for adding context while propagating with `?`.
pub trait ResultExt<T> {
    /// Maps the error through [`wrap`].
    fn wrap_err(self, message: impl Display) -> Result<T, Error>;

    /// Maps the error through [`with_detail`].
    fn with_err_detail(self, detail: impl Into<String>) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn wrap_err(self, message: impl Display) -> Result<T, Error> {
        self.map_err(|e| wrap(Some(&e), message))
    }

    fn with_err_detail(self, detail: impl Into<String>) -> Result<T, Error> {
        self.map_err(|e| with_detail(Some(&e), detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::is;
    use crate::sentinel::PERSISTENCE_FAILURE;

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "disk gone")
    }

    #[test]
    fn wrap_prefixes_and_keeps_classification() {
        let orig = Error::not_found("orig");
        let wrapped = wrap(Some(&orig), "lookup failed");
        assert_eq!(wrapped.detail, "lookup failed: orig");
        assert_eq!(wrapped.id, orig.id);
        assert_eq!(wrapped.code, orig.code);
        assert_eq!(wrapped.status, orig.status);
    }

    #[test]
    fn repeated_wraps_put_newest_context_first() {
        let err = Error::timeout("read tcp")
            .wrap("fetch profile")
            .wrap("render page");
        assert_eq!(err.detail, "render page: fetch profile: read tcp");
        assert!(err.is(&Error::timeout("")));
    }

    #[test]
    fn wrap_without_error() {
        let err = wrap(None, "nothing to wrap");
        assert_eq!(err.id, WRAPPED_ERROR_ID);
        assert_eq!(err.code, 500);
        assert_eq!(err.detail, "nothing to wrap");
        assert_eq!(err.status, "Internal Server Error");
    }

    #[test]
    fn wrap_foreign_error_keeps_its_text() {
        let err = wrap(Some(&io_error()), "load config");
        assert_eq!(err.id, WRAPPED_ERROR_ID);
        assert_eq!(err.code, 500);
        assert_eq!(err.detail, "load config: disk gone");
    }

    #[test]
    fn with_detail_replaces() {
        let orig = Error::not_found("orig");
        let err = with_detail(Some(&orig), "new detail");
        assert_eq!(err.detail, "new detail");
        assert_eq!(err.id, "404");
        assert_eq!(err.status, "Not Found");
    }

    #[test]
    fn with_detail_fallbacks_drop_foreign_text() {
        let err = with_detail(None, "d");
        assert_eq!((err.id.as_str(), err.code, err.detail.as_str()), (DETAILED_ERROR_ID, 500, "d"));

        let err = with_detail(Some(&io_error()), "d");
        assert_eq!(err.id, DETAILED_ERROR_ID);
        assert_eq!(err.detail, "d");
    }

    #[test]
    fn wrapping_a_sentinel_leaves_it_untouched() {
        let err = PERSISTENCE_FAILURE.wrap("insert order 9");
        assert_eq!(err.detail, "insert order 9: database operation failed");
        assert_eq!(PERSISTENCE_FAILURE.detail, "database operation failed");
        assert!(is(Some(&err), Some(&*PERSISTENCE_FAILURE)));
    }

    #[test]
    fn result_ext_adds_context() {
        let res: Result<(), std::io::Error> = Err(io_error());
        let err = res.wrap_err("open journal").unwrap_err();
        assert_eq!(err.detail, "open journal: disk gone");

        let res: Result<u8, Error> = Err(Error::conflict("dup"));
        let err = res.wrap_err("create user").unwrap_err();
        assert_eq!(err.code, 409);
        assert_eq!(err.detail, "create user: dup");

        let res: Result<u8, Error> = Err(Error::forbidden("scope"));
        let err = res.with_err_detail("not yours").unwrap_err();
        assert_eq!((err.code, err.detail.as_str()), (403, "not yours"));

        let ok: Result<u8, Error> = Ok(1);
        assert_eq!(ok.wrap_err("unused").unwrap(), 1);
    }
}
