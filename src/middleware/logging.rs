use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Setup logging with console and rolling-file output
pub fn setup_logging() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    std::fs::create_dir_all(&log_dir).ok();

    // File appender with daily rotation
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "queue.log");

    // Console layer
    let console_layer = fmt::layer()
        .with_target(true)
        .compact();

    // File layer, structured for ingestion
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_target(true)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)))
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized with level: {}", log_level);
}
