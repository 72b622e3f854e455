use super::SqliteRepository;
use super::mapper::{PropertyRow, escape_like};
use super::queries::{
    DELETE_PROPERTY, INSERT_PROPERTY, SEARCH_PROPERTIES, SELECT_PROPERTIES,
    SELECT_PROPERTIES_BY_SURVEYOR, SELECT_PROPERTY_BY_ID, SELECT_PROPERTY_SUMMARY,
    UPDATE_PROPERTY,
};
use crate::application::ports::repositories::{PropertyRepository, PropertySummary};
use crate::domain::entities::PropertyRecord;
use crate::shared::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

impl SqliteRepository {
    async fn fetch_property(&self, id: i64) -> Result<PropertyRecord, AppError> {
        self.get_property(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Property {id} not found")))
    }
}

#[async_trait]
impl PropertyRepository for SqliteRepository {
    async fn create_property(&self, property: &PropertyRecord) -> Result<PropertyRecord, AppError> {
        let now = Utc::now().timestamp_millis();

        let result = sqlx::query(INSERT_PROPERTY)
            .bind(&property.address)
            .bind(&property.owner_name)
            .bind(&property.owner_phone)
            .bind(&property.owner_email)
            .bind(&property.boundary)
            .bind(property.area_sqft)
            .bind(property.assessment_value)
            .bind(property.surveyor_id)
            .bind(property.survey_date.map(|ts| ts.timestamp_micros()))
            .bind(&property.notes)
            .bind(now)
            .bind(now)
            .execute(self.pool.get_pool())
            .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(property_id = id, "property inserted");

        self.fetch_property(id).await
    }

    async fn get_property(&self, id: i64) -> Result<Option<PropertyRecord>, AppError> {
        let row = sqlx::query_as::<_, PropertyRow>(SELECT_PROPERTY_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.get_pool())
            .await?;

        row.map(PropertyRow::into_domain).transpose()
    }

    async fn list_properties(&self) -> Result<Vec<PropertyRecord>, AppError> {
        let rows = sqlx::query_as::<_, PropertyRow>(SELECT_PROPERTIES)
            .fetch_all(self.pool.get_pool())
            .await?;

        rows.into_iter().map(PropertyRow::into_domain).collect()
    }

    async fn list_properties_by_surveyor(
        &self,
        surveyor_id: i64,
    ) -> Result<Vec<PropertyRecord>, AppError> {
        let rows = sqlx::query_as::<_, PropertyRow>(SELECT_PROPERTIES_BY_SURVEYOR)
            .bind(surveyor_id)
            .fetch_all(self.pool.get_pool())
            .await?;

        rows.into_iter().map(PropertyRow::into_domain).collect()
    }

    async fn update_property(&self, property: &PropertyRecord) -> Result<PropertyRecord, AppError> {
        let id = property.id.ok_or_else(|| {
            AppError::InvalidInput("Cannot update a property that has no id".to_string())
        })?;

        let result = sqlx::query(UPDATE_PROPERTY)
            .bind(&property.address)
            .bind(&property.owner_name)
            .bind(&property.owner_phone)
            .bind(&property.owner_email)
            .bind(&property.boundary)
            .bind(property.area_sqft)
            .bind(property.assessment_value)
            .bind(property.surveyor_id)
            .bind(property.survey_date.map(|ts| ts.timestamp_micros()))
            .bind(&property.notes)
            .bind(Utc::now().timestamp_millis())
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Property {id} not found")));
        }

        self.fetch_property(id).await
    }

    async fn delete_property(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(DELETE_PROPERTY)
            .bind(id)
            .execute(self.pool.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_properties(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<PropertyRecord>, AppError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(vec![]);
        }

        let rows = sqlx::query_as::<_, PropertyRow>(SEARCH_PROPERTIES)
            .bind(escape_like(term))
            .bind(limit as i64)
            .fetch_all(self.pool.get_pool())
            .await?;

        rows.into_iter().map(PropertyRow::into_domain).collect()
    }

    async fn property_summary(&self) -> Result<PropertySummary, AppError> {
        let row = sqlx::query(SELECT_PROPERTY_SUMMARY)
            .fetch_one(self.pool.get_pool())
            .await?;

        let property_count: i64 = row.try_get("property_count")?;
        let total_area_sqft: f64 = row.try_get("total_area_sqft")?;

        Ok(PropertySummary {
            property_count: property_count.max(0) as u64,
            total_area_sqft,
        })
    }
}
