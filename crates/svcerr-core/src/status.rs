//! Status-code table: numeric code to reason phrase.

use http::StatusCode;

/// Returns the reason phrase for `code`, e.g. `"Not Found"` for 404.
///
/// Codes without a registered phrase (including anything outside
/// `100..=999`) yield `""`. The lookup never fails.
pub fn status_text(code: i32) -> &'static str {
    u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}
