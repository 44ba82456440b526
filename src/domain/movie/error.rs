use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(String),
    #[error("There was a problem with the OMDB API")]
    Api,
    #[error("movie not found: {0}")]
    NotFound(String),
    #[error("could not parse catalog response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Parse(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::ExternalService(other.to_string()),
        }
    }
}
