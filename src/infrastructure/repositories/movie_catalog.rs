use crate::domain::movie::{CatalogError, DetailedMovie, SimpleMovie};
use async_trait::async_trait;

/// Read-only access to an external movie database.
/// Abstracts the underlying provider (OMDb today).
///
/// Implementations own the transport and the translation of the provider's
/// response format into the domain movie types.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search movies whose title matches `name`
    ///
    /// An empty result is not an error.
    async fn search_by_name(&self, name: &str) -> Result<Vec<SimpleMovie>, CatalogError>;

    /// Fetch the full record for a catalog id
    ///
    /// # Errors
    /// Returns [`CatalogError::NotFound`] when the provider knows no such id,
    /// other variants when the provider is unreachable or answers garbage.
    async fn get_by_id(&self, id: &str) -> Result<DetailedMovie, CatalogError>;
}
