pub mod favorites_repository;
pub mod movie_catalog;
pub mod omdb_movie_catalog;

pub use favorites_repository::{default_profile_dir, FavoritesStore};
pub use movie_catalog::MovieCatalog;
pub use omdb_movie_catalog::{OmdbMovieCatalog, OMDB_DEFAULT_BASE_URL};
