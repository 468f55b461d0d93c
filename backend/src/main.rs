use anyhow::Context;
use dotenvy::dotenv;
use pamyo_backend::assets::warn_missing_screenshots;
use pamyo_backend::config::HostConfig;
use pamyo_backend::router::build_router;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pamyo_backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = HostConfig::from_env()?;
    config.ensure_dist_dir()?;
    let missing = warn_missing_screenshots(&config.screenshots_dir());
    if missing > 0 {
        tracing::warn!("{} screenshot(s) missing, gallery will show broken images", missing);
    }

    let app = build_router(&config);
    tracing::info!(
        "Starting server on port {} serving {} ({:?})",
        config.port,
        config.dist_dir.display(),
        config.environment
    );
    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
