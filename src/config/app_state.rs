use std::sync::Arc;

use crate::config::AppConfig;
use crate::queue::JobQueue;

/// Application state shared across all handlers and services
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory job queue, shared by every request handler
    pub queue: Arc<JobQueue>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new AppState
    pub fn new(queue: JobQueue, config: AppConfig) -> Self {
        Self {
            queue: Arc::new(queue),
            config: Arc::new(config),
        }
    }
}
