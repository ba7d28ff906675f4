//! Classification and comparison predicates.
//!
//! The free functions accept any error (`None` standing in for "no error")
//! so transport and logging code can classify values it did not build.
//! The `Error` methods are the typed shortcuts.

use crate::DynError;
use crate::error::Error;
use crate::kind::ErrorKind;
use crate::sentinel::{RESOURCE_EXISTS, RESOURCE_NOT_FOUND};

/// Identity reported for errors that are not model errors.
pub const UNKNOWN_ERROR_ID: &str = "UNKNOWN_ERROR";

/// Status reported for errors that are not model errors.
pub const FALLBACK_STATUS: i32 = 500;

fn as_model(err: Option<&DynError>) -> Option<&Error> {
    err.and_then(|e| e.downcast_ref::<Error>())
}

/// Reports whether `err` and `target` are the same error category.
///
/// A missing error on either side is never a match. Two model errors match
/// on identity alone; any other pair matches when their text forms are equal.
pub fn is(err: Option<&DynError>, target: Option<&DynError>) -> bool {
    let (Some(err), Some(target)) = (err, target) else {
        return false;
    };
    if let (Some(e), Some(t)) = (as_model(Some(err)), as_model(Some(target))) {
        return e.is(t);
    }
    err.to_string() == target.to_string()
}

/// Status code to respond with: the model error's code, 500 otherwise.
pub fn http_status(err: Option<&DynError>) -> i32 {
    as_model(err).map_or(FALLBACK_STATUS, |e| e.code)
}

/// Identity of a model error, `UNKNOWN_ERROR` otherwise.
pub fn error_id(err: Option<&DynError>) -> &str {
    as_model(err).map_or(UNKNOWN_ERROR_ID, |e| e.id.as_str())
}

/// Any 404-identity error, including [`RESOURCE_NOT_FOUND`].
pub fn is_not_found(err: Option<&DynError>) -> bool {
    is(err, Some(&*RESOURCE_NOT_FOUND)) || is(err, Some(&Error::not_found("")))
}

/// Any 409-identity error, including [`RESOURCE_EXISTS`].
pub fn is_already_exists(err: Option<&DynError>) -> bool {
    is(err, Some(&*RESOURCE_EXISTS)) || is(err, Some(&Error::conflict("")))
}

/// A model error in the 4xx range. Note that this covers every client
/// fault, not only 400.
pub fn is_bad_request(err: Option<&DynError>) -> bool {
    as_model(err).is_some_and(Error::is_client_error)
}

/// A model error in the 5xx range.
pub fn is_server_error(err: Option<&DynError>) -> bool {
    as_model(err).is_some_and(Error::is_server_error)
}

impl Error {
    /// Same category: identities are equal. Code, detail and status are
    /// not compared.
    pub fn is(&self, other: &Error) -> bool {
        self.id == other.id
    }

    /// The category for this error's code, if it is one of the named kinds.
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_code(self.code)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct Plain(&'static str);

    impl fmt::Display for Plain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for Plain {}

    #[test]
    fn is_compares_identity_only() {
        assert!(is(
            Some(&Error::not_found("a")),
            Some(&Error::not_found("b"))
        ));
        assert!(!is(
            Some(&Error::not_found("a")),
            Some(&Error::conflict("a"))
        ));
        // Identity wins even when the codes disagree.
        let custom = Error::new("404", "", 410);
        assert!(is(Some(&custom), Some(&Error::not_found("x"))));
    }

    #[test]
    fn is_never_matches_missing_errors() {
        assert!(!is(None, Some(&Error::not_found("a"))));
        assert!(!is(Some(&Error::not_found("a")), None));
        assert!(!is(None, None));
    }

    #[test]
    fn is_falls_back_to_text_for_foreign_errors() {
        assert!(is(Some(&Plain("boom")), Some(&Plain("boom"))));
        assert!(!is(Some(&Plain("boom")), Some(&Plain("bang"))));

        let model = Error::bad_request("x");
        let same_text = Plain(r#"{"id":"400","code":400,"detail":"x","status":"Bad Request"}"#);
        assert!(is(Some(&model), Some(&same_text)));
        assert!(!is(Some(&model), Some(&Plain("400"))));
    }

    #[test]
    fn is_sees_through_boxed_errors() {
        let boxed: Box<DynError> = Box::new(Error::not_found("boxed"));
        assert!(is(Some(&*boxed), Some(&Error::not_found(""))));
        assert!(is_not_found(Some(&*boxed)));
    }

    #[test]
    fn http_status_falls_back_to_500() {
        assert_eq!(http_status(Some(&Error::forbidden("no"))), 403);
        assert_eq!(http_status(Some(&Error::new("X", "", 418))), 418);
        assert_eq!(http_status(Some(&Plain("plain"))), 500);
        assert_eq!(http_status(None), 500);
    }

    #[test]
    fn error_id_falls_back_to_unknown() {
        assert_eq!(error_id(Some(&Error::timeout("slow"))), "408");
        assert_eq!(error_id(Some(&Plain("plain"))), UNKNOWN_ERROR_ID);
        assert_eq!(error_id(None), UNKNOWN_ERROR_ID);
    }

    #[test]
    fn not_found_recognises_sentinel_and_any_404() {
        assert!(is_not_found(Some(&*RESOURCE_NOT_FOUND)));
        assert!(is_not_found(Some(&Error::not_found("user 7"))));
        assert!(!is_not_found(Some(&Error::conflict("user 7"))));
        assert!(!is_not_found(Some(&Plain("not found"))));
        assert!(!is_not_found(None));
    }

    #[test]
    fn already_exists_recognises_sentinel_and_any_409() {
        assert!(is_already_exists(Some(&*RESOURCE_EXISTS)));
        assert!(is_already_exists(Some(&Error::conflict("dup key"))));
        assert!(!is_already_exists(Some(&Error::not_found("dup key"))));
        assert!(!is_already_exists(None));
    }

    #[test]
    fn range_predicates() {
        assert!(is_bad_request(Some(&Error::bad_request("x"))));
        assert!(is_bad_request(Some(&Error::not_found("x"))));
        assert!(!is_bad_request(Some(&Error::internal_server_error("x"))));
        assert!(!is_bad_request(Some(&Plain("x"))));
        assert!(!is_bad_request(None));

        assert!(is_server_error(Some(&Error::internal_server_error("x"))));
        assert!(is_server_error(Some(&Error::gateway_timeout("x"))));
        assert!(!is_server_error(Some(&Error::too_many_requests("x"))));
        assert!(!is_server_error(Some(&Error::new("X", "", 600))));
        assert!(!is_server_error(None));
    }

    #[test]
    fn kind_follows_code() {
        assert_eq!(Error::conflict("x").kind(), Some(ErrorKind::Conflict));
        assert_eq!(Error::new("X", "", 418).kind(), None);
        assert_eq!(Error::parse("garbage").kind(), None);
    }
}
