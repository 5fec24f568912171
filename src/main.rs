use cloud_stream_queue::config::{AppConfig, AppState};
use cloud_stream_queue::middleware::setup_logging;
use cloud_stream_queue::queue::JobQueue;
use cloud_stream_queue::routes::create_router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    setup_logging();

    tracing::info!("Starting application...");

    // Load configuration
    let app_config = AppConfig::from_env()?;

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);

    // Create the job queue. It is in-memory only: jobs live for the lifetime
    // of the process and are gone after a restart.
    let queue = JobQueue::new();
    tracing::info!("Job queue initialized");

    // Create AppState
    let app_state = AppState::new(queue, app_config.clone());

    // Create router
    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Create server address
    let addr = app_config.server_address();
    tracing::info!("Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
