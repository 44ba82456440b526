pub mod error;
pub mod model;

pub use error::{FavoritesError, StorageError};
pub use model::Favorite;

/// Durable, deduplicated storage of a user's favorites.
///
/// Implementations do no locking of their own: callers must not overlap
/// calls against the same backing storage.
pub trait FavoritesRepository: Send + Sync {
    /// Append `favorite` unless an entry with the same id already exists
    fn save(&self, favorite: Favorite) -> Result<(), FavoritesError>;

    /// Drop every entry with the given id. Absent ids are not an error.
    fn remove(&self, id: &str) -> Result<(), FavoritesError>;

    /// All favorites in insertion order
    fn get_all(&self) -> Result<Vec<Favorite>, FavoritesError>;

    fn clear(&self) -> Result<(), FavoritesError>;
}
