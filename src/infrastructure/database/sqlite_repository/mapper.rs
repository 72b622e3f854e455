use crate::domain::entities::PropertyRecord;
use crate::shared::error::AppError;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(super) struct PropertyRow {
    id: i64,
    address: String,
    owner_name: Option<String>,
    owner_phone: Option<String>,
    owner_email: Option<String>,
    boundary: Option<String>,
    area_sqft: Option<f64>,
    assessment_value: Option<f64>,
    surveyor_id: Option<i64>,
    survey_date: Option<i64>,
    notes: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl PropertyRow {
    pub(super) fn into_domain(self) -> Result<PropertyRecord, AppError> {
        Ok(PropertyRecord {
            id: Some(self.id),
            address: self.address,
            owner_name: self.owner_name,
            owner_phone: self.owner_phone,
            owner_email: self.owner_email,
            boundary: self.boundary,
            area_sqft: self.area_sqft,
            assessment_value: self.assessment_value,
            surveyor_id: self.surveyor_id,
            survey_date: self.survey_date.map(micros_to_datetime).transpose()?,
            notes: self.notes,
            created_at: Some(millis_to_datetime(self.created_at)?),
            updated_at: Some(millis_to_datetime(self.updated_at)?),
        })
    }
}

pub(super) fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, AppError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| AppError::DeserializationError(format!("Invalid timestamp: {millis}")))
}

pub(super) fn micros_to_datetime(micros: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| AppError::DeserializationError(format!("Invalid timestamp: {micros}")))
}

/// Escapes LIKE wildcards so a search term matches literally.
pub(super) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_protects_wildcards() {
        assert_eq!(escape_like("100%_lot\\7"), "100\\%\\_lot\\\\7");
        assert_eq!(escape_like("Main St"), "Main St");
    }

    #[test]
    fn millis_round_trip() {
        let ts = millis_to_datetime(1_717_243_200_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_717_243_200_123);
    }

    #[test]
    fn micros_keep_sub_millisecond_digits() {
        let ts = micros_to_datetime(1_715_936_400_123_456).unwrap();
        assert_eq!(ts.timestamp_micros(), 1_715_936_400_123_456);
        assert_eq!(ts.timestamp_subsec_micros(), 123_456);
    }
}
