use crate::routing::{self, Resolution};
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

/// Redirect unprefixed paths to the default locale and attach the resolved
/// `Locale` to prefixed requests as an extension.
pub async fn locale_redirect(mut request: Request, next: Next) -> Response {
    let resolution = routing::resolve(request.uri().path(), request.uri().query());

    match resolution {
        Resolution::Localized(locale) => {
            request.extensions_mut().insert(locale);
            next.run(request).await
        }
        Resolution::Excluded => next.run(request).await,
        Resolution::Redirect(location) => {
            debug!("Redirecting {} -> {}", request.uri(), location);
            Redirect::temporary(&location).into_response()
        }
    }
}
