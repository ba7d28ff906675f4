//! Error catalog, rendering and inspection endpoints.

use axum::extract::{Json, Path, Query};
use axum::http::Uri;
use svcerr_core::{Error, ErrorKind};
use svcerr_http::ApiError;

use super::types::{CatalogEntry, InspectResponse, RenderParams};

/// List the domain sentinels and one empty-detail error per named kind.
pub async fn catalog() -> Json<Vec<CatalogEntry>> {
    let sentinels = svcerr_core::sentinels()
        .into_iter()
        .map(|(name, err)| CatalogEntry {
            name: name.to_owned(),
            error: err.clone(),
        });
    let kinds = ErrorKind::ALL.into_iter().map(|kind| CatalogEntry {
        name: kind.as_str().to_owned(),
        error: Error::from_kind(kind, ""),
    });
    Json(sentinels.chain(kinds).collect())
}

/// Respond with an error for `code`, identity = the decimal code.
///
/// The status line is the code itself when it is a valid HTTP status.
pub async fn render(Path(raw): Path<String>, Query(params): Query<RenderParams>) -> ApiError {
    let Ok(code) = raw.parse::<i32>() else {
        return Error::bad_request(format_args!("invalid status code: {raw}")).into();
    };
    Error::new(code.to_string(), params.detail.unwrap_or_default(), code).into()
}

/// Decode an error text and report how it classifies.
pub async fn inspect(body: String) -> Json<InspectResponse> {
    let (error, decoded) = match Error::try_parse(&body) {
        Ok(err) => (err, true),
        Err(_) => (Error::parse(&body), false),
    };
    let err = Some::<&svcerr_core::DynError>(&error);
    Json(InspectResponse {
        decoded,
        kind: error.kind().map(ErrorKind::as_str),
        client_error: svcerr_core::is_bad_request(err),
        server_error: svcerr_core::is_server_error(err),
        not_found: svcerr_core::is_not_found(err),
        already_exists: svcerr_core::is_already_exists(err),
        error,
    })
}

/// Fallback for unknown paths, so they answer with a model error too.
pub async fn unrouted(uri: Uri) -> ApiError {
    Error::not_found(format_args!("no route for {}", uri.path())).into()
}
