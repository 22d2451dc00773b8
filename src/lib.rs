//! Bookshelf Server
//!
//! A small book catalog service: users register and authenticate, post
//! reviews on books, and read average ratings. Exposed as a JSON REST API
//! over a SQLite store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Wire services on top of an opened repository
    pub fn new(config: &AppConfig, repository: Repository) -> Self {
        let services = Services::new(repository.clone(), config.auth.clone());
        Self {
            repository,
            services: Arc::new(services),
        }
    }
}
