use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl AppError {
    /// Stable machine-readable code for transport envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::DeserializationError(_) => "DESERIALIZATION_ERROR",
        }
    }

    /// Message safe to show to a caller. Storage internals are not echoed back.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "A storage error occurred".to_string(),
            AppError::NotFound(msg)
            | AppError::InvalidInput(msg)
            | AppError::ConfigurationError(msg)
            | AppError::SerializationError(msg)
            | AppError::DeserializationError(msg) => msg.clone(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_hide_details_from_callers() {
        let err = AppError::Database("UNIQUE constraint failed: properties.id".to_string());
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert_eq!(err.user_message(), "A storage error occurred");
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn not_found_message_passes_through() {
        let err = AppError::NotFound("Property 7 not found".to_string());
        assert_eq!(err.code(), "NOT_FOUND");
        assert_eq!(err.user_message(), "Property 7 not found");
    }
}
