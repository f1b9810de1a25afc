// Catalog processing pipeline

pub mod processing;

pub use processing::cache::{find_cached_planet, planet_cache_key};
pub use processing::enrich::{enrich_many, enrich_one, FilmIndex};
