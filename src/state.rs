use crate::application::services::PropertyService;
use crate::infrastructure::database::{ConnectionPool, Repository, SqliteRepository};
use crate::presentation::handlers::PropertyHandler;
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Wired application components, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub connection_pool: ConnectionPool,
    pub repository: Arc<SqliteRepository>,
    pub property_service: Arc<PropertyService>,
    pub property_handler: Arc<PropertyHandler>,
}

impl AppState {
    /// Connects to the configured database and registers the property schema.
    pub async fn new(config: AppConfig) -> Result<Self, AppError> {
        config.validate().map_err(AppError::ConfigurationError)?;

        if let Some(parent) = database_file_path(&config.database.url).and_then(|p| {
            p.parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(|dir| dir.to_path_buf())
        }) {
            std::fs::create_dir_all(&parent).map_err(|err| {
                AppError::ConfigurationError(format!(
                    "Failed to create data directory {}: {err}",
                    parent.display()
                ))
            })?;
        }

        let connection_pool = ConnectionPool::from_config(&config.database).await?;
        Self::from_pool(config, connection_pool).await
    }

    pub async fn from_pool(
        config: AppConfig,
        connection_pool: ConnectionPool,
    ) -> Result<Self, AppError> {
        let repository = Arc::new(SqliteRepository::new(connection_pool.clone()));
        repository.initialize().await?;

        let property_service = Arc::new(PropertyService::new(repository.clone()));
        let property_handler = Arc::new(PropertyHandler::new(property_service.clone()));

        info!("application state initialized");

        Ok(Self {
            config: Arc::new(config),
            connection_pool,
            repository,
            property_service,
            property_handler,
        })
    }

    pub async fn shutdown(&self) {
        self.connection_pool.close().await;
    }
}

/// Filesystem path of an SQLite url, or `None` for in-memory databases.
fn database_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}
