use crate::application::ports::repositories::{PropertyRepository, PropertySummary};
use crate::domain::entities::PropertyRecord;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_SEARCH_LIMIT: usize = 50;
pub const MAX_SEARCH_LIMIT: usize = 500;

pub struct PropertyService {
    repository: Arc<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_property(&self, property: PropertyRecord) -> Result<PropertyRecord, AppError> {
        let stored = self.repository.create_property(&property).await?;
        info!(property_id = ?stored.id, address = %stored.address, "property created");
        Ok(stored)
    }

    pub async fn get_property(&self, id: i64) -> Result<Option<PropertyRecord>, AppError> {
        self.repository.get_property(id).await
    }

    /// Lists every property, or only those recorded by `surveyor_id` when given.
    pub async fn list_properties(
        &self,
        surveyor_id: Option<i64>,
    ) -> Result<Vec<PropertyRecord>, AppError> {
        match surveyor_id {
            Some(surveyor_id) => {
                self.repository
                    .list_properties_by_surveyor(surveyor_id)
                    .await
            }
            None => self.repository.list_properties().await,
        }
    }

    pub async fn update_property(&self, property: &PropertyRecord) -> Result<PropertyRecord, AppError> {
        let stored = self.repository.update_property(property).await?;
        info!(property_id = ?stored.id, "property updated");
        Ok(stored)
    }

    pub async fn delete_property(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete_property(id).await? {
            return Err(AppError::NotFound(format!("Property {id} not found")));
        }
        info!(property_id = id, "property deleted");
        Ok(())
    }

    pub async fn search_properties(
        &self,
        term: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PropertyRecord>, AppError> {
        let limit = limit
            .unwrap_or(DEFAULT_SEARCH_LIMIT)
            .clamp(1, MAX_SEARCH_LIMIT);
        debug!(term, limit, "searching properties");
        self.repository.search_properties(term, limit).await
    }

    pub async fn survey_summary(&self) -> Result<PropertySummary, AppError> {
        self.repository.property_summary().await
    }
}
