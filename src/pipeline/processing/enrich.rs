use std::collections::HashMap;

use tracing::debug;

use crate::common::constants::NOT_FOUND_TITLE;
use crate::domain::{EnrichedPlanet, Film, FilmTitle, FilmUrl, Page, PlanetPage, RawPlanet, RawPlanetPage};
use crate::observability::metrics;

/// Film URL to title lookup table used while enriching planets.
///
/// Built from a snapshot of the store's film list and handed to each
/// enrichment call; it never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct FilmIndex {
    titles: HashMap<String, String>,
}

impl FilmIndex {
    /// Build the index from a film list. When a URL appears more than once
    /// the first occurrence wins.
    pub fn from_films(films: &[Film]) -> Self {
        let mut titles = HashMap::with_capacity(films.len());
        for film in films {
            titles
                .entry(film.url.clone())
                .or_insert_with(|| film.title.clone());
        }
        Self { titles }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Title stored for `film_url`, or `NOT_FOUND_TITLE`
    pub fn resolve_title(&self, film_url: &str) -> &str {
        self.titles
            .get(film_url)
            .map(String::as_str)
            .unwrap_or(NOT_FOUND_TITLE)
    }

    fn resolve(&self, film_url: &FilmUrl) -> FilmTitle {
        match self.titles.get(film_url.as_str()) {
            Some(title) => FilmTitle(title.clone()),
            None => {
                debug!("No film title for {}", film_url);
                metrics::enrich::unresolved_reference();
                FilmTitle::from(NOT_FOUND_TITLE)
            }
        }
    }
}

/// Replace every film URL on `planet` with its title, preserving order.
///
/// Consumes the raw planet, so an enriched planet can never be fed back in.
pub fn enrich_one(index: &FilmIndex, planet: RawPlanet) -> EnrichedPlanet {
    let films = planet.films.iter().map(|url| index.resolve(url)).collect();
    metrics::enrich::planet_enriched();
    EnrichedPlanet {
        url: planet.url,
        films,
        extra: planet.extra,
    }
}

/// Enrich every planet in a page, leaving pagination fields untouched
pub fn enrich_many(index: &FilmIndex, page: RawPlanetPage) -> PlanetPage {
    let results = page
        .results
        .into_iter()
        .map(|planet| enrich_one(index, planet))
        .collect();
    Page {
        results,
        extra: page.extra,
    }
}
