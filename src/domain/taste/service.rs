use super::error::TasteDeciderError;
use super::model::TasteResult;
use super::scoring::{self, MAX_SCORE, MIN_SCORE};
use crate::domain::favorites::{Favorite, FavoritesError, FavoritesRepository};
use crate::domain::movie::{CatalogError, DetailedMovie, SimpleMovie};
use crate::infrastructure::repositories::MovieCatalog;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub struct TasteEngine {
    catalog: Arc<dyn MovieCatalog>,
    favorites: Arc<dyn FavoritesRepository>,
    // Every favorites call goes through this lock; the repository itself
    // does no locking.
    favorites_lock: Arc<Mutex<()>>,
}

impl TasteEngine {
    pub fn new(catalog: Arc<dyn MovieCatalog>, favorites: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            catalog,
            favorites,
            favorites_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
pub trait TasteEngineApi: Send + Sync {
    async fn search_for_movie(&self, name: &str) -> Result<Vec<SimpleMovie>, CatalogError>;

    async fn get_details_for_movie(&self, id: &str) -> Result<DetailedMovie, CatalogError>;

    /// Fetch the movie from the catalog and save it as a favorite.
    ///
    /// Runs in the background. Failures are logged and otherwise dropped, so
    /// the returned handle only tells the caller that the attempt finished.
    fn add_to_favorites(&self, id: &str) -> JoinHandle<()>;

    async fn remove_from_favorites(&self, id: &str) -> Result<(), FavoritesError>;

    async fn list_favorites(&self) -> Result<Vec<Favorite>, TasteDeciderError>;

    async fn clear_favorites(&self) -> Result<(), TasteDeciderError>;

    async fn determine_taste(&self) -> Result<TasteResult, TasteDeciderError>;
}

#[async_trait]
impl TasteEngineApi for TasteEngine {
    async fn search_for_movie(&self, name: &str) -> Result<Vec<SimpleMovie>, CatalogError> {
        tracing::info!(name = %name, "Searching catalog");
        let movies = self.catalog.search_by_name(name).await?;
        tracing::debug!(name = %name, results = movies.len(), "Catalog search finished");
        Ok(movies)
    }

    async fn get_details_for_movie(&self, id: &str) -> Result<DetailedMovie, CatalogError> {
        self.catalog.get_by_id(id).await
    }

    fn add_to_favorites(&self, id: &str) -> JoinHandle<()> {
        let catalog = self.catalog.clone();
        let favorites = self.favorites.clone();
        let favorites_lock = self.favorites_lock.clone();
        let movie_id = id.to_string();

        tokio::spawn(async move {
            let details = match catalog.get_by_id(&movie_id).await {
                Ok(details) => details,
                Err(e) => {
                    tracing::error!(
                        movie_id = %movie_id,
                        error = %e,
                        "Could not add to favorites"
                    );
                    return;
                }
            };

            let Some(favorite) = to_favorite(details) else {
                tracing::warn!(
                    movie_id = %movie_id,
                    "Movie has no usable rating, not adding to favorites"
                );
                return;
            };

            let _guard = favorites_lock.lock().await;
            match favorites.save(favorite) {
                Ok(()) => tracing::info!(movie_id = %movie_id, "Movie added to favorites"),
                Err(e) => tracing::error!(
                    movie_id = %movie_id,
                    error = %e,
                    cause = %e.cause(),
                    "Could not add to favorites"
                ),
            }
        })
    }

    async fn remove_from_favorites(&self, id: &str) -> Result<(), FavoritesError> {
        let _guard = self.favorites_lock.lock().await;
        self.favorites.remove(id)
    }

    async fn list_favorites(&self) -> Result<Vec<Favorite>, TasteDeciderError> {
        let _guard = self.favorites_lock.lock().await;
        Ok(self.favorites.get_all()?)
    }

    async fn clear_favorites(&self) -> Result<(), TasteDeciderError> {
        let _guard = self.favorites_lock.lock().await;
        self.favorites.clear()?;
        tracing::info!("Favorites cleared");
        Ok(())
    }

    async fn determine_taste(&self) -> Result<TasteResult, TasteDeciderError> {
        let favorites = {
            let _guard = self.favorites_lock.lock().await;
            self.favorites.get_all()?
        };

        let result = scoring::determine_taste(&favorites);
        tracing::info!(
            favorites = favorites.len(),
            average_score = ?result.average_score,
            taste_category = %result.taste_category,
            "Taste determined"
        );
        Ok(result)
    }
}

/// Project catalog details onto a favorite, if the rating is a valid score
fn to_favorite(details: DetailedMovie) -> Option<Favorite> {
    let score = details
        .rating_value
        .filter(|score| (MIN_SCORE..=MAX_SCORE).contains(score))?;
    Some(Favorite::new(details.id, details.title, score))
}
