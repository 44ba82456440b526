use crate::domain::favorites::{Favorite, FavoritesError, FavoritesRepository, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const FAVORITES_FILE_NAME: &str = "favorites.json";
const DEFAULT_PROFILE_DIR_NAME: &str = ".movie-taste-decider";

/// `$HOME/.movie-taste-decider`, or a relative directory when there is no home
pub fn default_profile_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_PROFILE_DIR_NAME)
}

/// Favorites kept as a single JSON array in `<profile_dir>/favorites.json`.
///
/// Every mutation rewrites the whole file. There is no locking: two stores
/// pointed at the same directory will overwrite each other.
pub struct FavoritesStore {
    file_path: PathBuf,
}

impl FavoritesStore {
    /// Bind to `profile_dir`, or to [`default_profile_dir`] when `None`.
    /// Nothing is created on disk until the first write.
    pub fn new(profile_dir: Option<PathBuf>) -> Self {
        let profile_dir = profile_dir.unwrap_or_else(default_profile_dir);
        Self {
            file_path: profile_dir.join(FAVORITES_FILE_NAME),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn ensure_file_exists(&self) -> Result<(), StorageError> {
        if self.file_path.exists() {
            return Ok(());
        }

        self.create_parent_dir()?;
        fs::write(&self.file_path, "")?;
        tracing::debug!(path = %self.file_path.display(), "Created favorites file");
        Ok(())
    }

    fn create_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn read_favorites(&self) -> Result<Vec<Favorite>, StorageError> {
        let serialized = match fs::read_to_string(&self.file_path) {
            Ok(serialized) => serialized,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if serialized.is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&serialized)?)
    }

    fn write_favorites(&self, favorites: &[Favorite]) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(favorites)?;
        self.create_parent_dir()?;
        fs::write(&self.file_path, serialized)?;
        tracing::debug!(
            path = %self.file_path.display(),
            count = favorites.len(),
            "Favorites written"
        );
        Ok(())
    }
}

impl FavoritesRepository for FavoritesStore {
    fn save(&self, favorite: Favorite) -> Result<(), FavoritesError> {
        self.ensure_file_exists().map_err(FavoritesError::Save)?;

        let mut favorites = self.read_favorites().map_err(FavoritesError::Save)?;
        if favorites.iter().any(|existing| existing.id == favorite.id) {
            tracing::debug!(movie_id = %favorite.id, "Already a favorite, skipping");
            return Ok(());
        }

        favorites.push(favorite);
        self.write_favorites(&favorites).map_err(FavoritesError::Save)
    }

    fn remove(&self, id: &str) -> Result<(), FavoritesError> {
        let favorites = self.read_favorites().map_err(FavoritesError::Remove)?;
        let count_before = favorites.len();

        let remaining: Vec<Favorite> = favorites.into_iter().filter(|fav| fav.id != id).collect();
        if remaining.len() == count_before {
            return Ok(());
        }

        self.write_favorites(&remaining)
            .map_err(FavoritesError::Remove)
    }

    fn get_all(&self) -> Result<Vec<Favorite>, FavoritesError> {
        self.read_favorites().map_err(FavoritesError::Read)
    }

    fn clear(&self) -> Result<(), FavoritesError> {
        self.write_favorites(&[]).map_err(FavoritesError::Clear)
    }
}
