//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{AlQuranCloudSource, QuranComSource},
    config::Config,
    error::ApiError,
    web::{rest::ApiDoc, router, state::AppState},
};
use axum::http::Method;
use axum::Router;
use mushaf_core::{JuzVerseSource, MushafResolver};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Source Adapters & the Resolver ---
    let http_client = reqwest::Client::new();
    let alquran = Arc::new(AlQuranCloudSource::new(
        http_client.clone(),
        config.alquran_cloud_url.clone(),
    ));
    let quran_com = Arc::new(QuranComSource::new(
        http_client.clone(),
        config.quran_com_url.clone(),
    ));

    // Fallback priority: alquran.cloud, then quran.com, then the mirror
    // when one is configured.
    let mut juz_sources: Vec<Arc<dyn JuzVerseSource>> = vec![alquran.clone(), quran_com];
    if let Some(mirror_url) = config.mirror_url.clone() {
        info!("Mushaf mirror enabled at {}", mirror_url);
        juz_sources.push(Arc::new(AlQuranCloudSource::mirror(
            http_client,
            mirror_url,
        )));
    }

    let resolver = Arc::new(MushafResolver::new(
        alquran,
        juz_sources,
        config.source_timeout,
    ));

    // --- 3. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        resolver,
        config: config.clone(),
    });

    // Verse content is public read-only data, so the CORS policy is open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    // --- 4. Create the Web Router ---
    let api_router = router(app_state).layer(cors);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
