//! Domain sentinel errors.
//!
//! Built once on first use and never mutated. Each reuses a named
//! constructor, so it shares that constructor's identity: `is` cannot tell
//! `RESOURCE_NOT_FOUND` from any other 404. Inspect `detail` when the exact
//! condition matters.

use std::sync::LazyLock;

use crate::error::Error;

pub static RESOURCE_NOT_FOUND: LazyLock<Error> =
    LazyLock::new(|| Error::not_found("resource not found"));

pub static RESOURCE_EXISTS: LazyLock<Error> =
    LazyLock::new(|| Error::conflict("resource already exists"));

pub static INVALID_INPUT: LazyLock<Error> = LazyLock::new(|| Error::bad_request("invalid input"));

pub static SYNC_FAILED: LazyLock<Error> =
    LazyLock::new(|| Error::service_unavailable("synchronization failed"));

/// A storage or database operation failed.
pub static PERSISTENCE_FAILURE: LazyLock<Error> =
    LazyLock::new(|| Error::internal_server_error("database operation failed"));

/// A downstream service could not be reached.
pub static DEPENDENCY_UNAVAILABLE: LazyLock<Error> =
    LazyLock::new(|| Error::service_unavailable("external service unavailable"));

/// All sentinels with their exported names.
pub fn sentinels() -> [(&'static str, &'static Error); 6] {
    [
        ("RESOURCE_NOT_FOUND", &*RESOURCE_NOT_FOUND),
        ("RESOURCE_EXISTS", &*RESOURCE_EXISTS),
        ("INVALID_INPUT", &*INVALID_INPUT),
        ("SYNC_FAILED", &*SYNC_FAILED),
        ("PERSISTENCE_FAILURE", &*PERSISTENCE_FAILURE),
        ("DEPENDENCY_UNAVAILABLE", &*DEPENDENCY_UNAVAILABLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_reuse_constructor_identity() {
        assert_eq!(RESOURCE_NOT_FOUND.id, "404");
        assert_eq!(RESOURCE_EXISTS.id, "409");
        assert_eq!(INVALID_INPUT.id, "400");
        assert_eq!(SYNC_FAILED.id, "503");
        assert_eq!(PERSISTENCE_FAILURE.id, "500");
        assert_eq!(DEPENDENCY_UNAVAILABLE.id, "503");
    }

    #[test]
    fn sharing_a_constructor_makes_sentinels_indistinguishable() {
        assert!(SYNC_FAILED.is(&DEPENDENCY_UNAVAILABLE));
        assert_ne!(SYNC_FAILED.detail, DEPENDENCY_UNAVAILABLE.detail);
    }

    #[test]
    fn sentinels_are_initialised_once() {
        let first: *const Error = &*RESOURCE_NOT_FOUND;
        let second: *const Error = sentinels()[0].1;
        assert_eq!(first, second);
        assert_eq!(RESOURCE_NOT_FOUND.detail, "resource not found");
    }

    const _: () = {
        const fn assert_send_sync_clone<T: Send + Sync + Clone>() {}
        assert_send_sync_clone::<Error>();
    };

    #[test]
    fn sentinels_are_shared_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let err: &'static Error = &RESOURCE_NOT_FOUND;
                    (
                        err as *const Error as usize,
                        crate::is_not_found(Some(err)),
                        crate::http_status(Some(err)),
                    )
                })
            })
            .collect();

        let expected = &*RESOURCE_NOT_FOUND as *const Error as usize;
        for handle in handles {
            let (addr, not_found, status) = handle.join().unwrap();
            assert_eq!(addr, expected);
            assert!(not_found);
            assert_eq!(status, 404);
        }
    }
}
