use std::sync::{Mutex, RwLock};

use serde::Serialize;
use tracing::debug;

use crate::app::actions::CatalogAction;
use crate::app::ports::CatalogStorePort;
use crate::common::error::FailureReport;
use crate::domain::{EnrichedPlanet, Film, PlanetPage};
use crate::observability::metrics;
use crate::pipeline::find_cached_planet;

/// State held by the in-memory store
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogState {
    pub loading: bool,
    pub error: Option<FailureReport>,
    pub current_planet: Option<EnrichedPlanet>,
    pub planet_cache: Vec<EnrichedPlanet>,
    pub planet_page: Option<PlanetPage>,
    pub films: Vec<Film>,
}

impl CatalogState {
    /// Reduce one action into the state
    pub fn apply(&mut self, action: &CatalogAction) {
        match action {
            CatalogAction::FetchPlanetsBegin => {
                self.loading = true;
                self.error = None;
            }
            CatalogAction::FetchPlanetSuccess(planet) => {
                self.remember(planet);
                self.current_planet = Some(planet.clone());
                self.loading = false;
            }
            CatalogAction::FetchPlanetsFailure(report) => {
                self.error = Some(report.clone());
                self.loading = false;
            }
            CatalogAction::FetchMultiplePlanetsSuccess(page) => {
                for planet in &page.results {
                    self.remember(planet);
                }
                self.planet_page = Some(page.clone());
                self.loading = false;
            }
            CatalogAction::FetchFilms { films } => {
                self.films = films.clone();
            }
            CatalogAction::RetrievePlanetFromCache(planet) => {
                self.current_planet = Some(planet.clone());
                self.loading = false;
            }
        }
    }

    // Append-only; a planet already cached under the same URL is kept as is.
    fn remember(&mut self, planet: &EnrichedPlanet) {
        if find_cached_planet(&self.planet_cache, &planet.url).is_none() {
            self.planet_cache.push(planet.clone());
        }
    }
}

/// In-memory store for the CLI and tests
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<CatalogState>,
    dispatched: Mutex<Vec<CatalogAction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing state, e.g. a warm planet cache
    pub fn with_state(state: CatalogState) -> Self {
        Self {
            state: RwLock::new(state),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    pub fn state(&self) -> CatalogState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Every action dispatched so far, oldest first
    pub fn dispatched(&self) -> Vec<CatalogAction> {
        self.dispatched.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Kinds of the dispatched actions, oldest first
    pub fn dispatched_kinds(&self) -> Vec<&'static str> {
        self.dispatched().iter().map(CatalogAction::kind).collect()
    }
}

impl CatalogStorePort for InMemoryStore {
    fn dispatch(&self, action: CatalogAction) {
        debug!("Dispatching {}", action.kind());
        metrics::dispatch::action_dispatched(action.kind());

        self.state
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .apply(&action);
        self.dispatched
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(action);
    }

    fn planet_cache(&self) -> Vec<EnrichedPlanet> {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .planet_cache
            .clone()
    }

    fn films(&self) -> Vec<Film> {
        self.state.read().unwrap_or_else(|e| e.into_inner()).films.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilmTitle;
    use serde_json::Map;

    fn planet(url: &str) -> EnrichedPlanet {
        EnrichedPlanet {
            url: url.to_string(),
            films: vec![FilmTitle::from("A New Hope")],
            extra: Map::new(),
        }
    }

    #[test]
    fn test_begin_then_failure() {
        let store = InMemoryStore::new();
        store.dispatch(CatalogAction::FetchPlanetsBegin);
        assert!(store.state().loading);

        store.dispatch(CatalogAction::FetchPlanetsFailure(FailureReport {
            message: "boom".to_string(),
            status: None,
        }));
        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.error.map(|e| e.message).as_deref(), Some("boom"));
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let store = InMemoryStore::new();
        store.dispatch(CatalogAction::FetchPlanetsFailure(FailureReport {
            message: "boom".to_string(),
            status: None,
        }));
        store.dispatch(CatalogAction::FetchPlanetsBegin);
        assert!(store.state().error.is_none());
    }

    #[test]
    fn test_single_success_sets_current_and_caches_once() {
        let store = InMemoryStore::new();
        store.dispatch(CatalogAction::FetchPlanetSuccess(planet("planets/1/")));
        store.dispatch(CatalogAction::FetchPlanetSuccess(planet("planets/1/")));

        let state = store.state();
        assert_eq!(state.current_planet.map(|p| p.url).as_deref(), Some("planets/1/"));
        assert_eq!(state.planet_cache.len(), 1);
    }

    #[test]
    fn test_page_success_appends_to_cache_in_order() {
        let store = InMemoryStore::with_state(CatalogState {
            planet_cache: vec![planet("planets/2/")],
            ..Default::default()
        });
        let page = PlanetPage {
            results: vec![planet("planets/1/"), planet("planets/2/"), planet("planets/3/")],
            extra: Map::new(),
        };
        store.dispatch(CatalogAction::FetchMultiplePlanetsSuccess(page));

        let urls: Vec<String> = store.planet_cache().into_iter().map(|p| p.url).collect();
        assert_eq!(urls, vec!["planets/2/", "planets/1/", "planets/3/"]);
        assert!(store.state().planet_page.is_some());
    }

    #[test]
    fn test_films_are_replaced_not_merged() {
        let store = InMemoryStore::new();
        let film = |url: &str| Film {
            url: url.to_string(),
            title: url.to_string(),
            extra: Map::new(),
        };
        store.dispatch(CatalogAction::FetchFilms { films: vec![film("films/1/"), film("films/2/")] });
        store.dispatch(CatalogAction::FetchFilms { films: vec![film("films/3/")] });

        let films = store.films();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].url, "films/3/");
    }

    #[test]
    fn test_retrieve_from_cache_does_not_grow_cache() {
        let store = InMemoryStore::with_state(CatalogState {
            planet_cache: vec![planet("planets/3/")],
            loading: true,
            ..Default::default()
        });
        store.dispatch(CatalogAction::RetrievePlanetFromCache(planet("planets/3/")));

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.planet_cache.len(), 1);
        assert_eq!(store.dispatched_kinds(), vec!["RETRIEVE_PLANET_FROM_CACHE"]);
    }
}
