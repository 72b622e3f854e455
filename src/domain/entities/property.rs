use crate::shared::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One vertex of a parcel boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A surveyed property parcel, one row of the `properties` table.
///
/// `id`, `created_at` and `updated_at` are owned by the persistence layer: they
/// stay `None` until the record has been inserted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PropertyRecord {
    pub id: Option<i64>,
    pub address: String,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
    /// JSON text of the boundary polygon. Prefer `set_boundary` over writing this directly.
    pub boundary: Option<String>,
    pub area_sqft: Option<f64>,
    pub assessment_value: Option<f64>,
    pub surveyor_id: Option<i64>,
    /// Persisted with microsecond precision.
    pub survey_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Flat transport shape of a [`PropertyRecord`]. Every key is always emitted,
/// absent values serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    pub id: Option<i64>,
    pub address: String,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub owner_email: Option<String>,
    pub boundary: Option<Vec<Coordinate>>,
    pub area_sqft: Option<f64>,
    pub assessment_value: Option<f64>,
    pub surveyor_id: Option<i64>,
    pub survey_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl PropertyRecord {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Stores the coordinates as JSON text. An empty slice encodes to `"[]"`.
    ///
    /// JSON has no NaN or infinity, so a non-finite coordinate is an encoding
    /// error and leaves the stored boundary unchanged.
    pub fn set_boundary(&mut self, coordinates: &[Coordinate]) -> Result<(), AppError> {
        if let Some(index) = coordinates
            .iter()
            .position(|c| !c.lat.is_finite() || !c.lng.is_finite())
        {
            return Err(AppError::SerializationError(format!(
                "Boundary coordinate {index} is not a finite number"
            )));
        }
        self.boundary = Some(serde_json::to_string(coordinates)?);
        Ok(())
    }

    /// Decodes the stored boundary. Unset or empty text yields `None`.
    pub fn boundary(&self) -> Result<Option<Vec<Coordinate>>, AppError> {
        match self.boundary.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => serde_json::from_str(text).map(Some).map_err(|err| {
                AppError::DeserializationError(format!("Invalid boundary JSON: {err}"))
            }),
        }
    }

    pub fn to_view(&self) -> Result<PropertyView, AppError> {
        Ok(PropertyView {
            id: self.id,
            address: self.address.clone(),
            owner_name: self.owner_name.clone(),
            owner_phone: self.owner_phone.clone(),
            owner_email: self.owner_email.clone(),
            boundary: self.boundary()?,
            area_sqft: self.area_sqft,
            assessment_value: self.assessment_value,
            surveyor_id: self.surveyor_id,
            survey_date: self.survey_date.map(|ts| ts.to_rfc3339()),
            notes: self.notes.clone(),
            created_at: self.created_at.map(|ts| ts.to_rfc3339()),
            updated_at: self.updated_at.map(|ts| ts.to_rfc3339()),
        })
    }

    pub fn to_dict(&self) -> Result<serde_json::Map<String, serde_json::Value>, AppError> {
        match serde_json::to_value(self.to_view()?)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(AppError::SerializationError(format!(
                "Property view serialized to a non-object: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for PropertyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Property {}>", self.address)
    }
}
