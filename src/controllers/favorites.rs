use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::{
        favorites::Favorite,
        taste::{TasteEngine, TasteEngineApi},
    },
    error::AppResult,
};

pub struct FavoritesController {
    taste_engine: Arc<TasteEngine>,
}

impl FavoritesController {
    pub fn new(taste_engine: Arc<TasteEngine>) -> Self {
        Self { taste_engine }
    }

    /// GET /api/favorites - List favorites in the order they were added
    pub async fn list_favorites(
        State(controller): State<Arc<FavoritesController>>,
    ) -> AppResult<Json<Vec<Favorite>>> {
        let favorites = controller.taste_engine.list_favorites().await?;
        Ok(Json(favorites))
    }

    /// POST /api/favorites/{movieId} - Add a movie in the background
    ///
    /// Always 202: the outcome of the add is only visible in the logs.
    pub async fn add_favorite(
        State(controller): State<Arc<FavoritesController>>,
        Path(movie_id): Path<String>,
    ) -> StatusCode {
        // Dropping the handle detaches the task
        let _ = controller.taste_engine.add_to_favorites(&movie_id);
        StatusCode::ACCEPTED
    }

    /// DELETE /api/favorites/{movieId} - Remove one favorite
    pub async fn remove_favorite(
        State(controller): State<Arc<FavoritesController>>,
        Path(movie_id): Path<String>,
    ) -> AppResult<StatusCode> {
        controller
            .taste_engine
            .remove_from_favorites(&movie_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// DELETE /api/favorites - Remove every favorite
    pub async fn clear_favorites(
        State(controller): State<Arc<FavoritesController>>,
    ) -> AppResult<StatusCode> {
        controller.taste_engine.clear_favorites().await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
