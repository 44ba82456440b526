use crate::domain::favorites::FavoritesError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TasteDeciderError {
    #[error("The taste could not be determined")]
    Favorites(#[from] FavoritesError),
}

impl From<TasteDeciderError> for AppError {
    fn from(err: TasteDeciderError) -> Self {
        match &err {
            TasteDeciderError::Favorites(source) => {
                AppError::Internal(format!("{}: {}: {}", err, source, source.cause()))
            }
        }
    }
}
