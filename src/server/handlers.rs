use crate::error::ApiError;
use crate::i18n::{Locale, MetricsReport, Translation};
use crate::pages::{self, Page, PageView};
use crate::server::AppState;
use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.catalog.metrics().report())
}

/// `GET /api/i18n/{locale}/{namespace}`
pub async fn namespace(
    State(state): State<AppState>,
    Path((locale, namespace)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let locale = Locale::from_code_or_default(&locale);
    state
        .catalog
        .namespace(locale, &namespace)
        .map(Json)
        .ok_or(ApiError::NamespaceNotFound(namespace))
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub locale: Locale,
    pub namespace: String,
    pub key: String,
    pub value: Translation,
}

/// `GET /api/i18n/{locale}/{namespace}/{key}?param=value`
pub async fn translate(
    State(state): State<AppState>,
    Path((locale, namespace, key)): Path<(String, String, String)>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Json<TranslateResponse> {
    let locale = Locale::from_code_or_default(&locale);
    let params: Vec<(String, String)> = params.into_iter().collect();
    let value = state.catalog.translate(locale, &namespace, &key, &params);

    Json(TranslateResponse {
        locale,
        namespace,
        key,
        value,
    })
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::PageNotFound(uri.path().to_string())
}

/// `GET /{locale}/{page...}`
pub async fn page(
    State(state): State<AppState>,
    locale: Option<Extension<Locale>>,
    uri: Uri,
) -> Result<Json<PageView>, ApiError> {
    let not_found = || ApiError::PageNotFound(uri.path().to_string());

    // Only requests the locale middleware resolved carry a locale.
    let Extension(locale) = locale.ok_or_else(not_found)?;

    let rest = uri
        .path()
        .trim_start_matches('/')
        .split_once('/')
        .map_or("", |(_, rest)| rest);
    let page = Page::from_path(rest).ok_or_else(not_found)?;

    Ok(Json(pages::build(
        &state.catalog,
        state.billing.as_ref(),
        locale,
        page,
    )))
}
