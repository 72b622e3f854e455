use crate::domain::entities::PropertyRecord;
use crate::shared::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Aggregate over every stored parcel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    pub property_count: u64,
    pub total_area_sqft: f64,
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Inserts the record and returns it with `id`, `created_at` and `updated_at` assigned.
    async fn create_property(&self, property: &PropertyRecord) -> Result<PropertyRecord, AppError>;
    async fn get_property(&self, id: i64) -> Result<Option<PropertyRecord>, AppError>;
    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, AppError>;
    async fn list_properties_by_surveyor(
        &self,
        surveyor_id: i64,
    ) -> Result<Vec<PropertyRecord>, AppError>;
    /// Persists every mutable column and refreshes `updated_at`. `created_at` is never written.
    async fn update_property(&self, property: &PropertyRecord) -> Result<PropertyRecord, AppError>;
    async fn delete_property(&self, id: i64) -> Result<bool, AppError>;
    /// Substring match on address or owner name, ignoring ASCII case.
    async fn search_properties(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<PropertyRecord>, AppError>;
    async fn property_summary(&self) -> Result<PropertySummary, AppError>;
}
