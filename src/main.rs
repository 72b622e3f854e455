use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use parcel_survey::domain::entities::Coordinate;
use parcel_survey::presentation::dto::ApiResponse;
use parcel_survey::presentation::dto::property_dto::{
    CreatePropertyRequest, SearchPropertiesRequest,
};
use parcel_survey::shared::{AppConfig, init_logging};
use parcel_survey::AppState;
use serde::Serialize;
use tracing::info;

#[derive(Parser)]
#[command(name = "parcel-survey")]
#[command(about = "Manage surveyed property parcels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database url
    #[arg(long, env = "PARCEL_SURVEY_DATABASE_URL")]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PARCEL_SURVEY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "PARCEL_SURVEY_JSON_LOGS")]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the property schema and exit
    Migrate,
    /// Record a new surveyed property
    Add {
        #[arg(long)]
        address: String,
        #[arg(long)]
        owner_name: Option<String>,
        #[arg(long)]
        owner_phone: Option<String>,
        #[arg(long)]
        owner_email: Option<String>,
        /// Boundary as JSON, e.g. '[{"lat":40.0,"lng":-75.0}]'
        #[arg(long)]
        boundary: Option<String>,
        #[arg(long)]
        area_sqft: Option<f64>,
        #[arg(long)]
        assessment_value: Option<f64>,
        #[arg(long)]
        surveyor_id: Option<i64>,
        /// RFC 3339 timestamp
        #[arg(long)]
        survey_date: Option<DateTime<Utc>>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Show one property
    Show { id: i64 },
    /// List properties, newest first
    List {
        #[arg(long)]
        surveyor: Option<i64>,
    },
    /// Search by address or owner name
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete a property
    Delete { id: i64 },
    /// Count properties and total surveyed area
    Summary,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(url) = cli.database_url {
        config.database.url = url;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json_logs;

    init_logging(&config.logging.level, config.logging.json)?;
    info!("Starting parcel-survey v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config)
        .await
        .context("failed to initialize application state")?;
    let handler = state.property_handler.clone();

    match cli.command {
        Commands::Migrate => {
            info!("schema is up to date");
        }
        Commands::Add {
            address,
            owner_name,
            owner_phone,
            owner_email,
            boundary,
            area_sqft,
            assessment_value,
            surveyor_id,
            survey_date,
            notes,
        } => {
            let boundary = boundary
                .map(|raw| serde_json::from_str::<Vec<Coordinate>>(&raw))
                .transpose()
                .context("boundary must be a JSON array of {lat, lng} objects")?;
            let request = CreatePropertyRequest {
                address,
                owner_name,
                owner_phone,
                owner_email,
                boundary,
                area_sqft,
                assessment_value,
                surveyor_id,
                survey_date,
                notes,
            };
            print_response(ApiResponse::from_result(handler.create_property(request).await))?;
        }
        Commands::Show { id } => {
            let result = handler.get_property(id).await.and_then(|found| {
                found.ok_or_else(|| {
                    parcel_survey::shared::AppError::NotFound(format!("Property {id} not found"))
                })
            });
            print_response(ApiResponse::from_result(result))?;
        }
        Commands::List { surveyor } => {
            print_response(ApiResponse::from_result(handler.list_properties(surveyor).await))?;
        }
        Commands::Search { query, limit } => {
            let request = SearchPropertiesRequest { query, limit };
            print_response(ApiResponse::from_result(handler.search_properties(request).await))?;
        }
        Commands::Delete { id } => {
            print_response(ApiResponse::from_result(handler.delete_property(id).await))?;
        }
        Commands::Summary => {
            print_response(ApiResponse::from_result(handler.survey_summary().await))?;
        }
    }

    state.shutdown().await;
    Ok(())
}

fn print_response<T: Serialize>(response: ApiResponse<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
