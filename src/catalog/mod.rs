pub mod provider;
pub mod tmdb;
pub mod types;

pub use provider::{CatalogError, CatalogQuery, MovieCatalog};
pub use tmdb::TmdbCatalog;
pub use types::Movie;
