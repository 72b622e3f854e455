use crate::{
    application::{ports::repositories::PropertySummary, services::PropertyService},
    presentation::dto::{
        Validate,
        property_dto::{
            CreatePropertyRequest, PropertyListResponse, PropertyResponse,
            SearchPropertiesRequest, UpdatePropertyRequest,
        },
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct PropertyHandler {
    property_service: Arc<PropertyService>,
}

impl PropertyHandler {
    pub fn new(property_service: Arc<PropertyService>) -> Self {
        Self { property_service }
    }

    pub async fn create_property(
        &self,
        request: CreatePropertyRequest,
    ) -> Result<PropertyResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let record = request.into_record()?;
        let stored = self.property_service.create_property(record).await?;
        stored.to_view()
    }

    pub async fn get_property(&self, id: i64) -> Result<Option<PropertyResponse>, AppError> {
        let property = self.property_service.get_property(id).await?;
        property.map(|p| p.to_view()).transpose()
    }

    pub async fn list_properties(
        &self,
        surveyor_id: Option<i64>,
    ) -> Result<PropertyListResponse, AppError> {
        let properties = self.property_service.list_properties(surveyor_id).await?;
        Ok(PropertyListResponse {
            properties: properties
                .iter()
                .map(|p| p.to_view())
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub async fn update_property(
        &self,
        request: UpdatePropertyRequest,
    ) -> Result<PropertyResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let id = request.id;
        let mut property = self
            .property_service
            .get_property(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Property {id} not found")))?;

        request.apply_to(&mut property)?;
        let stored = self.property_service.update_property(&property).await?;
        stored.to_view()
    }

    pub async fn delete_property(&self, id: i64) -> Result<(), AppError> {
        self.property_service.delete_property(id).await
    }

    pub async fn search_properties(
        &self,
        request: SearchPropertiesRequest,
    ) -> Result<PropertyListResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let properties = self
            .property_service
            .search_properties(&request.query, request.limit)
            .await?;
        Ok(PropertyListResponse {
            properties: properties
                .iter()
                .map(|p| p.to_view())
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub async fn survey_summary(&self) -> Result<PropertySummary, AppError> {
        self.property_service.survey_summary().await
    }
}
