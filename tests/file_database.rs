use parcel_survey::AppState;
use parcel_survey::infrastructure::database::Repository;
use parcel_survey::presentation::dto::property_dto::CreatePropertyRequest;
use parcel_survey::shared::AppConfig;

#[tokio::test]
async fn records_survive_reopening_the_database() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("nested").join("parcels.db");

    let mut config = AppConfig::default();
    config.database.url = format!("sqlite://{}", db_path.display());

    let state = AppState::new(config.clone()).await.expect("open database");
    let created = state
        .property_handler
        .create_property(CreatePropertyRequest {
            address: "8 Orchard Ln".to_string(),
            owner_email: Some("owner@example.com".to_string()),
            ..Default::default()
        })
        .await
        .expect("create property");
    state.shutdown().await;

    // Initializing again must be a no-op for the already registered schema.
    let reopened = AppState::new(config).await.expect("reopen database");
    let fetched = reopened
        .property_handler
        .get_property(created.id.expect("id"))
        .await
        .expect("get property")
        .expect("property persisted");

    assert_eq!(fetched, created);
    assert!(reopened.repository.health_check().await.expect("health check"));
    reopened.shutdown().await;
}
