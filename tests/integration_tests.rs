//! Integration tests for the hosting storefront
//!
//! These tests start the full router on an ephemeral port and drive it over
//! HTTP, so the locale middleware, handlers and catalog are exercised
//! together.

use hosting_storefront::billing::StaticBilling;
use hosting_storefront::i18n::Catalog;
use hosting_storefront::server::{self, AppState};
use reqwest::{redirect::Policy, StatusCode};
use serde_json::Value;
use tempfile::TempDir;

// ==================== Test Helpers ====================

/// Spawn the app with the given catalog and return its base URL.
async fn spawn_app(catalog: Catalog, static_dir: &std::path::Path) -> String {
    let app = server::router(AppState::new(catalog, StaticBilling), static_dir);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });

    format!("http://{}", addr)
}

async fn spawn_bundled() -> (String, TempDir) {
    let static_dir = TempDir::new().expect("temp dir");
    std::fs::write(static_dir.path().join("site.css"), "body{}").expect("write asset");
    let base = spawn_app(Catalog::bundled().expect("bundled"), static_dir.path()).await;
    (base, static_dir)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("client")
}

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Location header")
}

/// Write a `{locale}/{namespace}.json` message tree.
fn write_messages(dir: &TempDir, files: &[(&str, &str, &str)]) {
    for (locale, namespace, json) in files {
        let locale_dir = dir.path().join(locale);
        std::fs::create_dir_all(&locale_dir).expect("create locale dir");
        std::fs::write(locale_dir.join(format!("{}.json", namespace)), json)
            .expect("write messages");
    }
}

// ==================== Locale Redirect Tests ====================

#[tokio::test]
async fn test_root_redirects_to_turkish() {
    let (base, _static) = spawn_bundled().await;
    let response = client().get(format!("{}/", base)).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/tr");
}

#[tokio::test]
async fn test_unprefixed_page_redirects_with_query() {
    let (base, _static) = spawn_bundled().await;
    let response = client()
        .get(format!("{}/domains?q=ornek.com", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/tr/domains?q=ornek.com");
}

#[tokio::test]
async fn test_unsupported_locale_redirects_under_default() {
    let (base, _static) = spawn_bundled().await;
    let response = client()
        .get(format!("{}/de/hosting", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/tr/de/hosting");
}

#[tokio::test]
async fn test_prefixed_paths_are_not_redirected() {
    let (base, _static) = spawn_bundled().await;
    for path in ["/en", "/tr", "/en/hosting", "/tr/dashboard/billing"] {
        let response = client().get(format!("{}{}", base, path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", path);
    }
}

#[tokio::test]
async fn test_static_assets_are_not_redirected() {
    let (base, _static) = spawn_bundled().await;
    let response = client()
        .get(format!("{}/static/site.css", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "body{}");
}

#[tokio::test]
async fn test_file_like_paths_are_not_redirected() {
    let (base, _static) = spawn_bundled().await;
    let response = client()
        .get(format!("{}/favicon.ico", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ==================== Page Tests ====================

#[tokio::test]
async fn test_turkish_page_model() {
    let (base, _static) = spawn_bundled().await;
    let page: Value = client()
        .get(format!("{}/tr/ssl", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(page["locale"], "tr");
    assert_eq!(page["page"], "ssl");
    assert_eq!(page["path"], "/tr/ssl");
    assert_eq!(page["title"], "SSL Sertifikaları");
    assert_eq!(page["alternates"][0]["href"], "/en/ssl");
    assert_eq!(page["content"]["products"]["dv"]["name"], "Alan Adı Doğrulamalı");
}

#[tokio::test]
async fn test_dashboard_page_has_account_data() {
    let (base, _static) = spawn_bundled().await;
    let page: Value = client()
        .get(format!("{}/en/dashboard/domains", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(page["title"], "Domains");
    assert_eq!(page["data"]["domains"][0]["name"], "ornekfirma.com.tr");
}

#[tokio::test]
async fn test_unknown_page_is_404() {
    let (base, _static) = spawn_bundled().await;
    let response = client()
        .get(format!("{}/en/nowhere", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "page not found: /en/nowhere");
}

// ==================== Translation API Tests ====================

#[tokio::test]
async fn test_health() {
    let (base, _static) = spawn_bundled().await;
    let body: Value = client()
        .get(format!("{}/api/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_translate_with_interpolation() {
    let (base, _static) = spawn_bundled().await;
    let body: Value = client()
        .get(format!("{}/api/i18n/tr/dashboard/greeting?name=Deniz", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["locale"], "tr");
    assert_eq!(body["value"], "Hoş geldiniz, Deniz");
}

#[tokio::test]
async fn test_translate_fallback_and_miss() {
    let (base, _static) = spawn_bundled().await;
    let c = client();

    let fallback: Value = c
        .get(format!("{}/api/i18n/tr/dashboard/billing.export_csv", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fallback["value"], "Export as CSV");

    let miss: Value = c
        .get(format!("{}/api/i18n/tr/dashboard/billing.refund", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(miss["value"], "billing.refund");

    let metrics: Value = c
        .get(format!("{}/api/i18n/metrics", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(metrics["fallbacks"], 1);
    assert_eq!(metrics["misses"], 1);
}

#[tokio::test]
async fn test_translate_interpolates_english_fallback() {
    let messages = TempDir::new().unwrap();
    write_messages(
        &messages,
        &[
            ("en", "dashboard", r#"{"renewal":"Renews on {{date}}","pay":"Pay now"}"#),
            ("tr", "dashboard", r#"{"pay":"Şimdi öde"}"#),
        ],
    );
    let catalog = Catalog::load_dir(messages.path()).expect("load messages");
    let static_dir = TempDir::new().unwrap();
    let base = spawn_app(catalog, static_dir.path()).await;

    let body: Value = client()
        .get(format!("{}/api/i18n/tr/dashboard/renewal?date=2025-03-14", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["locale"], "tr");
    assert_eq!(body["value"], "Renews on 2025-03-14");
}

#[tokio::test]
async fn test_translate_structured_value() {
    let (base, _static) = spawn_bundled().await;
    let body: Value = client()
        .get(format!("{}/api/i18n/en/domains/tlds", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["value"].is_array());
    assert_eq!(body["value"][0], ".com");
}

#[tokio::test]
async fn test_api_unsupported_locale_degrades_to_default() {
    let (base, _static) = spawn_bundled().await;
    let body: Value = client()
        .get(format!("{}/api/i18n/xx/common/nav.home", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["locale"], "tr");
    assert_eq!(body["value"], "Ana Sayfa");
}

#[tokio::test]
async fn test_namespace_endpoint() {
    let (base, _static) = spawn_bundled().await;
    let c = client();

    let tree: Value = c
        .get(format!("{}/api/i18n/tr/hosting", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(tree["plans"]["starter"]["name"], "Başlangıç");
    assert_eq!(tree["comparison_note"], "All prices exclude VAT.");

    let missing = c
        .get(format!("{}/api/i18n/tr/careers", base))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

// ==================== Message Directory Tests ====================

#[tokio::test]
async fn test_messages_loaded_from_directory() {
    let messages = TempDir::new().unwrap();
    write_messages(
        &messages,
        &[
            ("en", "home", r#"{"meta":{"title":"Welcome","description":"Hi"}}"#),
            ("tr", "home", r#"{"meta":{"title":"Hoş geldiniz"}}"#),
            ("en", "common", r#"{"nav":{"home":"Home"}}"#),
        ],
    );
    let catalog = Catalog::load_dir(messages.path()).expect("load messages");
    let static_dir = TempDir::new().unwrap();
    let base = spawn_app(catalog, static_dir.path()).await;

    let page: Value = client()
        .get(format!("{}/tr", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(page["title"], "Hoş geldiniz");
    assert_eq!(page["description"], "Hi");
    assert_eq!(page["nav"][0]["label"], "Home");
    // Missing everywhere: the key comes back
    assert_eq!(page["nav"][1]["label"], "nav.hosting");
}

#[test]
fn test_load_dir_requires_english() {
    let messages = TempDir::new().unwrap();
    write_messages(&messages, &[("tr", "home", r#"{"a":"b"}"#)]);

    let err = Catalog::load_dir(messages.path()).unwrap_err();
    assert!(err.to_string().contains("fallback locale 'en'"));
}

#[test]
fn test_load_dir_reports_invalid_json_path() {
    let messages = TempDir::new().unwrap();
    write_messages(&messages, &[("en", "home", "{ broken")]);

    let err = Catalog::load_dir(messages.path()).unwrap_err();
    assert!(err.to_string().contains("home.json"));
}

#[test]
fn test_load_dir_ignores_non_json_files() {
    let messages = TempDir::new().unwrap();
    write_messages(&messages, &[("en", "home", r#"{"a":"b"}"#)]);
    std::fs::write(messages.path().join("en").join("notes.txt"), "x").unwrap();

    let catalog = Catalog::load_dir(messages.path()).unwrap();
    assert_eq!(catalog.namespaces(hosting_storefront::i18n::Locale::En), vec!["home"]);
}
