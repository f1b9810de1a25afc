use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::app::actions::CatalogAction;
use crate::app::ports::{CatalogStorePort, HttpClientPort};
use crate::common::error::{CatalogError, FailureReport, Result};
use crate::config::ApiConfig;
use crate::domain::{EnrichedPlanet, FilmPage, RawPlanet, RawPlanetPage};
use crate::observability::metrics;
use crate::pipeline::{enrich_many, enrich_one, find_cached_planet, planet_cache_key, FilmIndex};

/// Drives film and planet fetches and reports their progress to the store.
///
/// Every public operation that fails dispatches exactly one
/// `FetchPlanetsFailure` and also returns the error to the caller.
pub struct CatalogUseCase {
    http: Box<dyn HttpClientPort>,
    store: Arc<dyn CatalogStorePort>,
    planets_url: String,
    films_url: String,
}

impl CatalogUseCase {
    pub fn new(http: Box<dyn HttpClientPort>, store: Arc<dyn CatalogStorePort>, api: &ApiConfig) -> Self {
        Self {
            http,
            store,
            planets_url: api.planets_url.clone(),
            films_url: api.films_url.clone(),
        }
    }

    /// Load films, then the first planet page. Stops at the first failure.
    #[instrument(skip(self))]
    pub async fn load_initial_data(&self) -> Result<()> {
        self.store.dispatch(CatalogAction::FetchPlanetsBegin);
        let outcome = async {
            self.fetch_films().await?;
            self.fetch_initial_planets().await
        }
        .await;
        self.report(outcome)
    }

    /// Fetch the first planet page, enrich it and dispatch it
    #[instrument(skip(self))]
    pub async fn load_initial_planets(&self) -> Result<()> {
        let outcome = self.fetch_initial_planets().await;
        self.report(outcome)
    }

    /// Fetch the film catalog and dispatch the raw film list
    #[instrument(skip(self))]
    pub async fn load_films(&self) -> Result<()> {
        let outcome = self.fetch_films().await;
        self.report(outcome)
    }

    /// Serve planet `id` from the planet cache, or fetch it when absent
    #[instrument(skip(self))]
    pub async fn resolve_or_fetch_planet(&self, id: &str) -> Result<()> {
        let key = planet_cache_key(&self.planets_url, id);
        let cache = self.store.planet_cache();

        if let Some(planet) = find_cached_planet(&cache, &key) {
            debug!("Planet {} served from cache", key);
            metrics::cache::hit();
            self.store.dispatch(CatalogAction::FetchPlanetsBegin);
            self.store
                .dispatch(CatalogAction::RetrievePlanetFromCache(planet.clone()));
            return Ok(());
        }

        metrics::cache::miss();
        self.fetch_planet(id).await
    }

    /// Snapshot the store's current film list into a lookup table
    pub fn refresh_film_index(&self) -> FilmIndex {
        FilmIndex::from_films(&self.store.films())
    }

    async fn fetch_planet(&self, id: &str) -> Result<()> {
        let index = self.refresh_film_index();
        self.store.dispatch(CatalogAction::FetchPlanetsBegin);

        let outcome = self.fetch_enriched_planet(&index, id).await;
        let planet = self.report(outcome)?;
        info!("Fetched planet {}", planet.url);
        self.store.dispatch(CatalogAction::FetchPlanetSuccess(planet));
        Ok(())
    }

    async fn fetch_enriched_planet(&self, index: &FilmIndex, id: &str) -> Result<EnrichedPlanet> {
        let url = format!("{}{}", self.planets_url, id);
        let planet: RawPlanet = self.get_json(&url).await?;
        Ok(enrich_one(index, planet))
    }

    async fn fetch_initial_planets(&self) -> Result<()> {
        let index = self.refresh_film_index();
        let page: RawPlanetPage = self.get_json(&self.planets_url).await?;
        let page = enrich_many(&index, page);
        info!("Fetched {} planets", page.results.len());
        self.store
            .dispatch(CatalogAction::FetchMultiplePlanetsSuccess(page));
        Ok(())
    }

    async fn fetch_films(&self) -> Result<()> {
        let page: FilmPage = self.get_json(&self.films_url).await?;
        info!("Fetched {} films", page.results.len());
        self.store
            .dispatch(CatalogAction::FetchFilms { films: page.results });
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).await?;
        if !response.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(serde_json::from_slice(&response.bytes)?)
    }

    fn report<T>(&self, outcome: Result<T>) -> Result<T> {
        if let Err(e) = &outcome {
            error!("Catalog fetch failed: {}", e);
            self.store
                .dispatch(CatalogAction::FetchPlanetsFailure(FailureReport::from(e)));
        }
        outcome
    }
}
