use crate::domain::EnrichedPlanet;

/// Canonical URL of planet `id` under `base`, the key the planet cache is searched by
pub fn planet_cache_key(base: &str, id: &str) -> String {
    format!("{}{}/", base, id)
}

/// First cached planet whose URL equals `key`, in cache insertion order
pub fn find_cached_planet<'a>(cache: &'a [EnrichedPlanet], key: &str) -> Option<&'a EnrichedPlanet> {
    cache.iter().find(|planet| planet.url == key)
}
