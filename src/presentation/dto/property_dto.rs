use super::Validate;
use crate::domain::entities::{Coordinate, PropertyRecord, PropertyView};
use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAX_ADDRESS_LEN: usize = 200;
pub const MAX_OWNER_NAME_LEN: usize = 100;
pub const MAX_OWNER_PHONE_LEN: usize = 20;
pub const MAX_OWNER_EMAIL_LEN: usize = 120;

// Response DTO
pub type PropertyResponse = PropertyView;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PropertyListResponse {
    pub properties: Vec<PropertyResponse>,
}

// Request DTOs
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyRequest {
    pub address: String,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
    pub boundary: Option<Vec<Coordinate>>,
    pub area_sqft: Option<f64>,
    pub assessment_value: Option<f64>,
    pub surveyor_id: Option<i64>,
    pub survey_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl CreatePropertyRequest {
    pub fn into_record(self) -> Result<PropertyRecord, AppError> {
        let mut record = PropertyRecord::new(self.address.trim());
        record.owner_name = self.owner_name;
        record.owner_phone = self.owner_phone;
        record.owner_email = self.owner_email;
        record.area_sqft = self.area_sqft;
        record.assessment_value = self.assessment_value;
        record.surveyor_id = self.surveyor_id;
        record.survey_date = self.survey_date;
        record.notes = self.notes;
        if let Some(boundary) = self.boundary {
            record.set_boundary(&boundary)?;
        }
        Ok(record)
    }
}

impl Validate for CreatePropertyRequest {
    fn validate(&self) -> Result<(), String> {
        if self.address.trim().is_empty() {
            return Err("Address is required".to_string());
        }
        validate_lengths(
            Some(&self.address),
            self.owner_name.as_deref(),
            self.owner_phone.as_deref(),
            self.owner_email.as_deref(),
        )
    }
}

/// Partial update: fields left out of the request keep their stored value.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyRequest {
    pub id: i64,
    pub address: Option<String>,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
    pub boundary: Option<Vec<Coordinate>>,
    pub area_sqft: Option<f64>,
    pub assessment_value: Option<f64>,
    pub surveyor_id: Option<i64>,
    pub survey_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl UpdatePropertyRequest {
    pub fn apply_to(self, record: &mut PropertyRecord) -> Result<(), AppError> {
        if let Some(address) = self.address {
            record.address = address.trim().to_string();
        }
        if self.owner_name.is_some() {
            record.owner_name = self.owner_name;
        }
        if self.owner_phone.is_some() {
            record.owner_phone = self.owner_phone;
        }
        if self.owner_email.is_some() {
            record.owner_email = self.owner_email;
        }
        if let Some(boundary) = self.boundary {
            record.set_boundary(&boundary)?;
        }
        if self.area_sqft.is_some() {
            record.area_sqft = self.area_sqft;
        }
        if self.assessment_value.is_some() {
            record.assessment_value = self.assessment_value;
        }
        if self.surveyor_id.is_some() {
            record.surveyor_id = self.surveyor_id;
        }
        if self.survey_date.is_some() {
            record.survey_date = self.survey_date;
        }
        if self.notes.is_some() {
            record.notes = self.notes;
        }
        Ok(())
    }
}

impl Validate for UpdatePropertyRequest {
    fn validate(&self) -> Result<(), String> {
        if self.id <= 0 {
            return Err("A valid property id is required".to_string());
        }
        if let Some(address) = &self.address {
            if address.trim().is_empty() {
                return Err("Address cannot be blank".to_string());
            }
        }
        validate_lengths(
            self.address.as_deref(),
            self.owner_name.as_deref(),
            self.owner_phone.as_deref(),
            self.owner_email.as_deref(),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchPropertiesRequest {
    pub query: String,
    pub limit: Option<usize>,
}

impl Validate for SearchPropertiesRequest {
    fn validate(&self) -> Result<(), String> {
        if self.query.trim().is_empty() {
            return Err("Search query is required".to_string());
        }
        Ok(())
    }
}

fn validate_lengths(
    address: Option<&str>,
    owner_name: Option<&str>,
    owner_phone: Option<&str>,
    owner_email: Option<&str>,
) -> Result<(), String> {
    let checks = [
        ("Address", address, MAX_ADDRESS_LEN),
        ("Owner name", owner_name, MAX_OWNER_NAME_LEN),
        ("Owner phone", owner_phone, MAX_OWNER_PHONE_LEN),
        ("Owner email", owner_email, MAX_OWNER_EMAIL_LEN),
    ];
    for (label, value, max) in checks {
        if let Some(value) = value {
            if value.chars().count() > max {
                return Err(format!("{label} is too long (max {max} characters)"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_parses_camel_case_body() {
        let request: CreatePropertyRequest = serde_json::from_value(serde_json::json!({
            "address": "123 Main St",
            "ownerName": "Jordan Reyes",
            "boundary": [{"lat": 40.0, "lng": -75.0}, {"lat": 40.1, "lng": -75.0}],
            "areaSqft": 1200.5,
            "surveyDate": "2024-05-17T09:00:00Z"
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        let record = request.into_record().unwrap();
        assert_eq!(record.owner_name.as_deref(), Some("Jordan Reyes"));
        assert_eq!(record.boundary().unwrap().map(|b| b.len()), Some(2));
        assert_eq!(record.area_sqft, Some(1200.5));
        assert!(record.survey_date.is_some());
        assert!(record.owner_phone.is_none());
    }

    #[test]
    fn blank_address_rejected() {
        let request = CreatePropertyRequest {
            address: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(request.validate(), Err("Address is required".to_string()));
    }

    #[test]
    fn overlong_phone_rejected() {
        let request = CreatePropertyRequest {
            address: "1 Long Rd".to_string(),
            owner_phone: Some("5".repeat(MAX_OWNER_PHONE_LEN + 1)),
            ..Default::default()
        };
        assert!(request.validate().unwrap_err().contains("Owner phone"));
    }

    #[test]
    fn update_request_only_touches_provided_fields() {
        let mut record = PropertyRecord::new("123 Main St");
        record.owner_name = Some("Jordan Reyes".to_string());
        record.notes = Some("corner lot".to_string());

        let request = UpdatePropertyRequest {
            id: 1,
            notes: Some("corner lot, new fence".to_string()),
            boundary: Some(vec![]),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
        request.apply_to(&mut record).unwrap();

        assert_eq!(record.address, "123 Main St");
        assert_eq!(record.owner_name.as_deref(), Some("Jordan Reyes"));
        assert_eq!(record.notes.as_deref(), Some("corner lot, new fence"));
        assert_eq!(record.boundary.as_deref(), Some("[]"));
    }

    #[test]
    fn update_request_needs_positive_id() {
        let request = UpdatePropertyRequest::default();
        assert!(request.validate().is_err());
    }
}
