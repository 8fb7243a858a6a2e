// src/bin/api_server.rs

use techgear_api::infra::telemetry;
use techgear_api::transport;
use techgear_api::{Config, DatabaseService};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let config = Config::from_env()?;

    // --- Service Initialization ---
    tracing::info!("initializing DatabaseService");
    let db_service = DatabaseService::connect(&config.database_url).await?;
    match db_service.missing_tables().await {
        Ok(missing) if !missing.is_empty() => {
            tracing::warn!(?missing, "database is missing expected tables");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "could not inspect database schema"),
    }
    if let Ok(triggers) = db_service.join_row_triggers().await {
        if !triggers.is_empty() {
            tracing::warn!(
                ?triggers,
                "products has insert triggers writing products_categories; \
                 products created with a category will get an extra join row"
            );
        }
    }

    let app_state = transport::http::AppState::new(db_service);
    let db_for_shutdown = app_state.db_service.clone();

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running at http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutdown signal received");
        })
        .await?;

    db_for_shutdown.close().await;
    tracing::info!("graceful shutdown complete");
    Ok(())
}
