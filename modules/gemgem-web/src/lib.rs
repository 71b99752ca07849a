use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use gemgem_common::{Config, LocaleResolver, StoreLinks};

pub mod pages;
pub mod templates;

// --- App State ---

pub struct AppState {
    pub resolver: LocaleResolver,
    pub store_links: StoreLinks,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            resolver: config.resolver(),
            store_links: config.store_links.clone(),
            static_dir: config.static_dir.clone(),
        }
    }
}

// --- Router ---

pub fn build_router(state: Arc<AppState>) -> Router {
    let images = ServeDir::new(state.static_dir.join("images"));

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/locales", get(pages::api_locales))
        // Assets are not localized and must never reach the locale redirect
        .nest_service("/images", images)
        .route("/favicon.ico", get(pages::favicon))
        // Every other path goes through the locale resolver
        .route("/", get(pages::site_page))
        .fallback(pages::site_page)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(CompressionLayer::new())
        // Logging layer: method + path only; query strings stay out of the logs
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }),
        )
}
