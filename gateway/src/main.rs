use anyhow::Result;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use world_cup_stats::QueryService;

mod config;
mod routes;

use config::GatewayConfig;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.default_log_filter().into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Derived tables are built once and shared read-only
    let service = QueryService::fifa_world_cup();
    tracing::info!(
        "   Loaded {} finals, {} winning countries",
        service.records().len(),
        service.win_counts().len()
    );

    let mut app = routes::router(AppState::new(service));

    // Extra static assets for the dashboard page (if configured)
    if let Some(ui_dir) = &config.ui_dir {
        if ui_dir.exists() {
            tracing::info!("   Serving assets from {}", ui_dir.display());
            app = app.nest_service("/assets", ServeDir::new(ui_dir));
        } else {
            tracing::warn!("   Asset directory {} not found, skipping", ui_dir.display());
        }
    }

    let app = app
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("World Cup dashboard starting on {}", addr);
    if config.debug {
        tracing::debug!("   Debug logging enabled");
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
