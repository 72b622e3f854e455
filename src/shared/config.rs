use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/parcel_survey.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            logging: LoggingConfig {
                level: "parcel_survey=debug,info".to_string(),
                json: false,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so overrides can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup("PARCEL_SURVEY_DATABASE_URL") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.database.url = v.to_string();
            }
        }
        if let Some(value) = lookup("PARCEL_SURVEY_DB_MAX_CONNECTIONS").and_then(|v| parse_u32(&v))
        {
            cfg.database.max_connections = value;
        }
        if let Some(value) =
            lookup("PARCEL_SURVEY_DB_CONNECTION_TIMEOUT").and_then(|v| parse_u64(&v))
        {
            cfg.database.connection_timeout = value;
        }

        if let Some(v) = lookup("PARCEL_SURVEY_LOG_LEVEL") {
            let v = v.trim();
            if !v.is_empty() {
                cfg.logging.level = v.to_string();
            }
        }
        if let Some(v) = lookup("PARCEL_SURVEY_JSON_LOGS") {
            cfg.logging.json = parse_bool(&v, cfg.logging.json);
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.database.connection_timeout == 0 {
            return Err("Database connection_timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.database.max_connections, 5);
        assert!(!cfg.logging.json);
    }

    #[test]
    fn env_overrides_apply() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PARCEL_SURVEY_DATABASE_URL", "sqlite::memory:"),
            ("PARCEL_SURVEY_DB_MAX_CONNECTIONS", "2"),
            ("PARCEL_SURVEY_LOG_LEVEL", "warn"),
            ("PARCEL_SURVEY_JSON_LOGS", "yes"),
        ]));

        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.database.max_connections, 2);
        assert_eq!(cfg.logging.level, "warn");
        assert!(cfg.logging.json);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PARCEL_SURVEY_DB_MAX_CONNECTIONS", "lots"),
            ("PARCEL_SURVEY_JSON_LOGS", "maybe"),
            ("PARCEL_SURVEY_DATABASE_URL", "   "),
        ]));

        let defaults = AppConfig::default();
        assert_eq!(cfg.database.max_connections, defaults.database.max_connections);
        assert_eq!(cfg.database.url, defaults.database.url);
        assert!(!cfg.logging.json);
    }

    #[test]
    fn zero_connections_rejected() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PARCEL_SURVEY_DB_MAX_CONNECTIONS", "0")]));
        assert!(cfg.validate().is_err());
    }
}
