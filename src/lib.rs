pub mod calendar;
pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod policy;
pub mod session;
pub mod startup;
pub mod store;
pub mod workflow;

use std::sync::Arc;

pub use config::AppConfig;
pub use directory::Directory;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;

pub struct AppState {
    pub directory: Arc<Directory>,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}
