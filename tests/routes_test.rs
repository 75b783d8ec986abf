use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;
use vernacular_site::adapters::{ImageCdn, StaticDealerDirectory};
use vernacular_site::core::preferences::PreferenceResolver;
use vernacular_site::domain::model::{Language, Theme, UserPreferences};
use vernacular_site::domain::ports::ContentProvider;
use vernacular_site::{router, AppState, ContentStore};

const COOKIE_NAME: &str = "user-preferences";

fn app() -> Router {
    let state = AppState::new(
        Arc::new(ContentStore::embedded().unwrap()),
        Arc::new(StaticDealerDirectory::default()),
        PreferenceResolver::new(COOKIE_NAME, Language::English),
        ImageCdn::new("https://cdn.example.com/media").unwrap(),
    );
    router(state)
}

fn content() -> ContentStore {
    ContentStore::embedded().unwrap()
}

fn cookie_for(prefs: &UserPreferences) -> String {
    let resolver = PreferenceResolver::new(COOKIE_NAME, Language::English);
    format!("{}={}", COOKIE_NAME, resolver.encode(prefs).unwrap())
}

async fn get(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Sends each entry as its own `Cookie` header, bytes untouched.
async fn get_with_cookie_headers(
    app: Router,
    uri: &str,
    cookies: &[&[u8]],
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    for cookie in cookies {
        request
            .headers_mut()
            .append(header::COOKIE, HeaderValue::from_bytes(cookie).unwrap());
    }
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn hindi_cookie() -> String {
    cookie_for(&UserPreferences {
        language: Language::Hindi,
        theme: None,
        currency: None,
    })
}

#[tokio::test]
async fn test_every_page_renders_with_default_preferences() {
    for path in [
        "/",
        "/inverters",
        "/batteries",
        "/dealer-locator",
        "/about-us",
        "/contact-us",
    ] {
        let (status, body) = get(app(), path, None).await;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert!(body.starts_with("<!DOCTYPE html>"), "{}", path);
        assert!(body.contains(r#"lang="en""#), "{}", path);
    }
}

#[tokio::test]
async fn test_no_cookie_uses_default_language_and_theme() {
    let (status, body) = get(app(), "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(&content().get_content("home-hero-title", Language::English)));
    assert!(!body.contains("theme-dark"));
    assert!(!body.contains("theme-light"));
}

#[tokio::test]
async fn test_cookie_switches_language_and_theme() {
    let cookie = cookie_for(&UserPreferences {
        language: Language::Hindi,
        theme: Some(Theme::Dark),
        currency: None,
    });

    let (status, body) = get(app(), "/batteries", Some(&cookie)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"lang="hi""#));
    assert!(body.contains("theme-dark"));
    assert!(body.contains(&content().get_content("bat-hero-title", Language::Hindi)));
}

#[tokio::test]
async fn test_malformed_cookie_fails_the_request() {
    let (status, body) = get(app(), "/", Some("user-preferences=!!not~base64!!")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("preferences could not be read"));
}

#[tokio::test]
async fn test_non_utf8_preference_cookie_fails_the_request() {
    let (status, _) =
        get_with_cookie_headers(app(), "/", &[b"user-preferences=\xff\xfe"]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preference_cookie_survives_non_ascii_neighbour() {
    let header = format!("tracker=café; {}", hindi_cookie());

    let (status, body) = get_with_cookie_headers(app(), "/", &[header.as_bytes()]).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"lang="hi""#));
}

#[tokio::test]
async fn test_preference_cookie_in_second_cookie_header() {
    let cookie = hindi_cookie();
    let (status, body) =
        get_with_cookie_headers(app(), "/", &[b"session=abc", cookie.as_bytes()]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"lang="hi""#));

    let (status, _) =
        get_with_cookie_headers(app(), "/", &[b"session=abc".as_slice(), b"user-preferences=!!bad!!"]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_slide_query_moves_carousel() {
    let (_, body) = get(app(), "/?slide=2", None).await;

    assert!(body.contains(r#"data-index="2""#));
    // next from the last slide wraps to the first
    assert!(body.contains(r#"href="/?slide=0#home-highlights""#));
}

#[tokio::test]
async fn test_category_query_selects_tab() {
    let (_, body) = get(app(), "/inverters?category=high-capacity", None).await;
    let store = content();

    assert!(body.contains(&store.get_content("inv-hkva-5-name", Language::English)));
    assert!(!body.contains(&store.get_content("inv-sine-900-name", Language::English)));
}

#[tokio::test]
async fn test_preference_update_sets_cookie_and_redirects() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/preferences")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("language=hi&theme=dark&redirectTo=%2Fbatteries"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/batteries");

    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    let value = set_cookie
        .split(';')
        .next()
        .unwrap()
        .trim_start_matches("user-preferences=");

    let resolver = PreferenceResolver::new(COOKIE_NAME, Language::English);
    let prefs = resolver.decode(value).unwrap();
    assert_eq!(prefs.language, Language::Hindi);
    assert_eq!(prefs.theme, Some(Theme::Dark));
}

#[tokio::test]
async fn test_preference_update_replaces_broken_cookie() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/preferences")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::COOKIE, "user-preferences=!!broken!!")
                .body(Body::from("language=en&theme=system"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(response.headers().contains_key(header::SET_COOKIE));
}

#[tokio::test]
async fn test_preference_update_rejects_unknown_language() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/preferences")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("language=fr"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_preference_update_without_language_is_bad_request() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/preferences")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("theme=dark"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8(bytes.to_vec())
        .unwrap()
        .starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn test_healthz() {
    let (status, body) = get(app(), "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
