pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    favorites::FavoritesController, health, movie::MovieController, taste::TasteController,
};
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn create_router(
    movie_controller: Arc<MovieController>,
    favorites_controller: Arc<FavoritesController>,
    taste_controller: Arc<TasteController>,
) -> Router {
    // Catalog routes
    let movie_routes = Router::new()
        .route("/api/movies", get(MovieController::search_movies))
        .route("/api/movies/:movieId", get(MovieController::get_movie))
        .with_state(movie_controller);

    // Favorites routes
    let favorites_routes = Router::new()
        .route(
            "/api/favorites",
            get(FavoritesController::list_favorites).delete(FavoritesController::clear_favorites),
        )
        .route(
            "/api/favorites/:movieId",
            post(FavoritesController::add_favorite).delete(FavoritesController::remove_favorite),
        )
        .with_state(favorites_controller);

    // Taste route
    let taste_routes = Router::new()
        .route("/api/taste", get(TasteController::determine_taste))
        .with_state(taste_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(movie_routes)
        .merge(favorites_routes)
        .merge(taste_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Start the HTTP server and serve `app` until the process stops
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
