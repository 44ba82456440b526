use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::{
        movie::{DetailedMovie, SimpleMovie},
        taste::{TasteEngine, TasteEngineApi},
    },
    error::{AppError, AppResult},
};

/// Query for GET /api/movies
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

pub struct MovieController {
    taste_engine: Arc<TasteEngine>,
}

impl MovieController {
    pub fn new(taste_engine: Arc<TasteEngine>) -> Self {
        Self { taste_engine }
    }

    /// GET /api/movies?name= - Search the catalog by title
    pub async fn search_movies(
        State(controller): State<Arc<MovieController>>,
        Query(query): Query<SearchQuery>,
    ) -> AppResult<Json<Vec<SimpleMovie>>> {
        let name = query.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("name cannot be empty".to_string()));
        }

        let movies = controller.taste_engine.search_for_movie(name).await?;
        Ok(Json(movies))
    }

    /// GET /api/movies/{movieId} - Full catalog record
    pub async fn get_movie(
        State(controller): State<Arc<MovieController>>,
        Path(movie_id): Path<String>,
    ) -> AppResult<Json<DetailedMovie>> {
        let movie = controller
            .taste_engine
            .get_details_for_movie(&movie_id)
            .await?;
        Ok(Json(movie))
    }
}
