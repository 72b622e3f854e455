use crate::application::ports::repositories::PropertyRepository;
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait Repository: PropertyRepository {
    /// Registers the table schema. Call once during startup before any other operation.
    async fn initialize(&self) -> Result<(), AppError>;
    async fn health_check(&self) -> Result<bool, AppError>;
}
