use crate::error::AppError;

/// Low-level failure behind a [`FavoritesError`]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("Could not save favorites")]
    Save(#[source] StorageError),
    #[error("Could not remove from favorites")]
    Remove(#[source] StorageError),
    #[error("Could not read favorites")]
    Read(#[source] StorageError),
    #[error("Could not clear favorites")]
    Clear(#[source] StorageError),
}

impl FavoritesError {
    pub fn cause(&self) -> &StorageError {
        match self {
            Self::Save(cause) | Self::Remove(cause) | Self::Read(cause) | Self::Clear(cause) => {
                cause
            }
        }
    }
}

impl From<FavoritesError> for AppError {
    fn from(err: FavoritesError) -> Self {
        AppError::Internal(format!("{}: {}", err, err.cause()))
    }
}
