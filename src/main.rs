use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use movie_taste_decider::controllers::{
    favorites::FavoritesController, movie::MovieController, taste::TasteController,
};
use movie_taste_decider::domain::taste::TasteEngine;
use movie_taste_decider::infrastructure::config::{Config, LogFormat};
use movie_taste_decider::infrastructure::http::{create_router, start_http_server};
use movie_taste_decider::infrastructure::repositories::{FavoritesStore, OmdbMovieCatalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Movie Taste Decider on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories
    let favorites_store = Arc::new(FavoritesStore::new(config.profile_dir.clone()));
    tracing::info!(
        path = %favorites_store.file_path().display(),
        "Favorites store ready"
    );

    let movie_catalog = Arc::new(OmdbMovieCatalog::new(
        config.omdb_api_key.clone(),
        config.omdb_base_url.clone(),
    ));
    tracing::info!(base_url = %config.omdb_base_url, "OMDb catalog client initialized");

    // 2. Instantiate the engine, the single owner of the favorites store
    let taste_engine = Arc::new(TasteEngine::new(movie_catalog, favorites_store));

    // 3. Instantiate controllers
    let movie_controller = Arc::new(MovieController::new(taste_engine.clone()));
    let favorites_controller = Arc::new(FavoritesController::new(taste_engine.clone()));
    let taste_controller = Arc::new(TasteController::new(taste_engine));

    let config = Arc::new(config);
    let app = create_router(movie_controller, favorites_controller, taste_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "movie_taste_decider=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "movie_taste_decider=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
