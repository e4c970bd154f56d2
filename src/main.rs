// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use gauge_panel::application::gauge_compositor::GaugeCompositor;
use gauge_panel::application::panel_service::PanelService;
use gauge_panel::infrastructure::config::load_server_settings;
use gauge_panel::infrastructure::gauge_renderer::GaugePropsRenderer;
use gauge_panel::infrastructure::time_series::StatsNormalizer;
use gauge_panel::presentation::app_state::AppState;
use gauge_panel::presentation::handlers::{health_check, render_gauge_panel};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = load_server_settings()?;

    // Initialize tracing, RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Collaborators (infrastructure layer)
    let normalizer = Arc::new(StatsNormalizer::new());
    let renderer = Arc::new(GaugePropsRenderer::new());

    // Services (application layer)
    let panel_service = PanelService::new(GaugeCompositor::new(normalizer), renderer);

    let state = Arc::new(AppState {
        panel_service,
        default_theme: settings.default_theme,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/panels/gauge/render", post(render_gauge_panel))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    tracing::info!("Starting gauge-panel service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
