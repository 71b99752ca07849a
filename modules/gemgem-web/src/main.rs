use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gemgem_common::Config;
use gemgem_web::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("gemgem=info".parse()?))
        .init();

    let config = Config::web_from_env()?;
    let locales: Vec<&str> = config.locales.supported().iter().map(|l| l.code()).collect();
    info!(
        locales = ?locales,
        default = %config.locales.default_locale(),
        strict = config.strict_locales,
        static_dir = %config.static_dir.display(),
        "Locale routing configured"
    );

    let state = Arc::new(AppState::from_config(&config));
    let app = build_router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("GemGem400 site starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
