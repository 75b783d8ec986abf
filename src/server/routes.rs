use crate::core::composer::{compose, PageRequest, PageRoute};
use crate::core::dealer_locator::{DealerLocator, DealerLocatorForm, DealerLocatorState};
use crate::domain::model::{Language, Theme, UserPreferences};
use crate::render::layout::{error_page, PREFERENCES_PATH};
use crate::render::Renderer;
use crate::server::state::AppState;
use crate::utils::error::SiteError;
use axum::extract::{Query, Request, State};
use axum::http::header::{ACCEPT, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Datelike;
use serde::Deserialize;
use std::time::Instant;
use tracing::Instrument;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/inverters", get(inverters))
        .route("/batteries", get(batteries))
        .route("/about-us", get(about_us))
        .route("/contact-us", get(contact_us))
        .route(
            PageRoute::DealerLocator.path(),
            get(dealer_locator).post(submit_dealer_locator),
        )
        .route(PREFERENCES_PATH, post(update_preferences))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub slide: Option<usize>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PreferenceUpdate {
    pub language: Option<String>,
    pub theme: Option<String>,
    #[serde(rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

/// Rendered failure response. Built with the state so the error page is localized.
pub struct PageError(Response);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        self.0
    }
}

impl AppState {
    fn renderer(&self, preferences: UserPreferences) -> Renderer<'_> {
        Renderer::new(
            &*self.content,
            &self.cdn,
            preferences,
            chrono::Utc::now().year(),
        )
    }

    fn page_error(&self, err: SiteError) -> PageError {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                err,
                err.category(),
                err.severity()
            );
        } else {
            tracing::warn!("Request rejected: {}", err);
        }

        let markup = error_page(
            &self.renderer(self.resolver.defaults()),
            status.as_u16(),
            &err.user_friendly_message(),
        );
        PageError((status, Html(markup.into_string())).into_response())
    }

    fn resolve_preferences(&self, headers: &HeaderMap) -> Result<UserPreferences, PageError> {
        self.resolver
            .resolve(&cookie_headers(headers))
            .map_err(|e| self.page_error(e))
    }
}

async fn show_page(
    route: PageRoute,
    state: AppState,
    headers: HeaderMap,
    query: PageQuery,
) -> Result<Html<String>, PageError> {
    let preferences = state.resolve_preferences(&headers)?;

    let request = PageRequest {
        slide: query.slide,
        category: query.category,
        ..PageRequest::new(preferences)
    };
    let page = compose(route, &request);
    Ok(Html(state.renderer(preferences).render_page(&page).into_string()))
}

async fn home(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    show_page(PageRoute::Home, state, headers, query).await
}

async fn inverters(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    show_page(PageRoute::Inverters, state, headers, query).await
}

async fn batteries(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    show_page(PageRoute::Batteries, state, headers, query).await
}

async fn about_us(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    show_page(PageRoute::AboutUs, state, headers, query).await
}

async fn contact_us(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    show_page(PageRoute::ContactUs, state, headers, query).await
}

async fn dealer_locator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    show_page(PageRoute::DealerLocator, state, headers, query).await
}

async fn submit_dealer_locator(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DealerLocatorForm>,
) -> Result<Response, PageError> {
    let preferences = state.resolve_preferences(&headers)?;

    let dealer_state = DealerLocator::new(state.dealers.as_ref())
        .submit(&form)
        .await
        .map_err(|e| state.page_error(e))?;

    if wants_json(&headers) {
        if let DealerLocatorState::Resolved(outcome) = &dealer_state {
            return Ok(Json(outcome.clone()).into_response());
        }
    }

    let request = PageRequest {
        dealer_state,
        submitted_location: Some(form.dealer_location.trim().to_string()),
        ..PageRequest::new(preferences)
    };
    let page = compose(PageRoute::DealerLocator, &request);
    Ok(Html(state.renderer(preferences).render_page(&page).into_string()).into_response())
}

async fn update_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(update): Form<PreferenceUpdate>,
) -> Result<Response, PageError> {
    // A broken cookie is replaced here rather than rejected.
    let current = state
        .resolver
        .resolve(&cookie_headers(&headers))
        .unwrap_or_else(|e| {
            tracing::warn!("Overwriting unreadable preference cookie: {}", e);
            state.resolver.defaults()
        });

    let preferences = apply_update(current, &update).map_err(|e| state.page_error(e))?;
    let cookie = state
        .resolver
        .set_cookie_header(&preferences)
        .map_err(|e| state.page_error(e))?;

    let target = safe_redirect(update.redirect_to.as_deref());
    tracing::info!(
        language = %preferences.language,
        theme = ?preferences.theme,
        "Preferences updated"
    );

    let mut response = StatusCode::SEE_OTHER.into_response();
    let headers = response.headers_mut();
    headers.insert(LOCATION, header_value(target, &state)?);
    headers.insert(SET_COOKIE, header_value(&cookie, &state)?);
    Ok(response)
}

async fn healthz() -> &'static str {
    "ok"
}

fn apply_update(
    current: UserPreferences,
    update: &PreferenceUpdate,
) -> Result<UserPreferences, SiteError> {
    let raw_language = update.language.as_deref().unwrap_or_default();
    let language: Language = raw_language
        .parse()
        .map_err(|_| SiteError::InvalidFormValue {
            field: "language".to_string(),
            value: raw_language.to_string(),
        })?;

    let theme = match update.theme.as_deref().map(str::trim) {
        None | Some("") | Some("system") => None,
        Some("light") => Some(Theme::Light),
        Some("dark") => Some(Theme::Dark),
        Some(other) => {
            return Err(SiteError::InvalidFormValue {
                field: "theme".to_string(),
                value: other.to_string(),
            })
        }
    };

    Ok(UserPreferences {
        language,
        theme,
        ..current
    })
}

/// Only same-site absolute paths; anything else goes home.
fn safe_redirect(target: Option<&str>) -> &str {
    match target {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

fn header_value(value: &str, state: &AppState) -> Result<HeaderValue, PageError> {
    HeaderValue::from_str(value).map_err(|e| {
        state.page_error(SiteError::ServerError {
            message: format!("invalid header value: {}", e),
        })
    })
}

/// Raw bytes of every `Cookie` header; HTTP/2 clients may split cookies across several.
fn cookie_headers(headers: &HeaderMap) -> Vec<&[u8]> {
    headers
        .get_all(COOKIE)
        .iter()
        .map(HeaderValue::as_bytes)
        .collect()
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("application/json"))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();
    let span = tracing::info_span!("request", %method, path = %path);

    let response = next.run(request).instrument(span.clone()).await;

    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request handled"
        )
    });
    response
}
