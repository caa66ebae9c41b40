//! Wiggle My Mouse - keeps the system awake by nudging the mouse cursor
//!
//! This is the main entry point for the wiggle-my-mouse application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use wiggle_my_mouse::{
    api::create_router,
    config::Config,
    services::{EnigoPointer, NoopPointer, PointerDevice},
    state::AppState,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("wiggle_my_mouse={},tower_http=info", config.log_level()))
        .init();

    info!("Starting application v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, interval={}min, distance={}px, delay={}ms",
        config.host, config.port, config.minutes, config.distance, config.delay_ms
    );

    let pointer: Arc<dyn PointerDevice> = if config.dry_run {
        info!("Dry run: pointer moves will only be logged");
        Arc::new(NoopPointer::new())
    } else {
        Arc::new(EnigoPointer::new())
    };

    let state = Arc::new(AppState::new(config.app_options(), pointer)?);

    if config.start {
        state.start()?;
    }

    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control panel running on http://{}", addr);
    info!("Endpoints:");
    info!("  PUT  /slider - Set the interval in minutes ({{\"value\": 0.5}})");
    info!("  POST /start  - Start jiggling");
    info!("  POST /stop   - Stop jiggling");
    info!("  GET  /status - Check panel, timer and jiggle count");
    info!("  GET  /health - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    if let Err(e) = state.shutdown() {
        warn!("Failed to stop timer on shutdown: {}", e);
    }
    info!("Stopping application");
    Ok(())
}
