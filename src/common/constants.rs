/// Remote endpoint constants used when no configuration overrides them.
/// Both addresses end in a slash so that `base + id + "/"` is a canonical planet URL.

// Collection endpoints
pub const PLANETS_API_ADDRESS: &str = "https://swapi.co/api/planets/";
pub const FILMS_API_ADDRESS: &str = "https://swapi.co/api/films/";

/// Title substituted for a film reference that is missing from the film index
pub const NOT_FOUND_TITLE: &str = "Not found title";

// Configuration defaults
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const USER_AGENT: &str = concat!("planet_catalog/", env!("CARGO_PKG_VERSION"));

// Environment overrides
pub const PLANETS_URL_ENV: &str = "PLANET_CATALOG_PLANETS_URL";
pub const FILMS_URL_ENV: &str = "PLANET_CATALOG_FILMS_URL";
pub const TIMEOUT_SECONDS_ENV: &str = "PLANET_CATALOG_TIMEOUT_SECONDS";
