use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Redirect, Response},
};
use serde::Serialize;
use tracing::debug;

use gemgem_common::{Locale, NavigationShell, Page, RoutePath};

use crate::templates::{render_not_found, render_page};
use crate::AppState;

// --- Site pages ---

/// Routing observer: redirect unlocalized paths, otherwise render the page
/// under the locale named by the first segment.
pub async fn site_page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let route = RoutePath::from_parts(uri.path(), uri.query());
    if let Some(target) = state.resolver.needs_redirect(&route) {
        return Redirect::to(&target.to_string()).into_response();
    }

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    // The bare root is the default locale's home page
    let page = if route.is_root() {
        Some(Page::Home)
    } else {
        Page::from_localized(&route)
    };

    let shell = NavigationShell::new(&state.resolver, route, user_agent);
    let store_url = shell.store_url(&state.store_links);
    let content_language = [(
        header::CONTENT_LANGUAGE,
        HeaderValue::from_static(shell.locale().lang_tag()),
    )];

    match page {
        Some(page) => (
            StatusCode::OK,
            content_language,
            Html(render_page(&shell, page, store_url)),
        )
            .into_response(),
        None => {
            debug!(path = %shell.route().path(), "No page for localized path");
            (
                StatusCode::NOT_FOUND,
                content_language,
                Html(render_not_found(&shell, store_url)),
            )
                .into_response()
        }
    }
}

/// Browsers request `/favicon.ico` directly; point them at the default locale's icon.
pub async fn favicon(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::to(state.resolver.default_locale().favicon())
}

// --- API ---

#[derive(Serialize)]
pub struct LocalesResponse {
    pub supported: Vec<Locale>,
    pub default: Locale,
}

pub async fn api_locales(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let locales = state.resolver.locales();
    Json(LocalesResponse {
        supported: locales.supported().to_vec(),
        default: locales.default_locale(),
    })
}
