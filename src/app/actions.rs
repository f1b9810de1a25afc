use serde::{Deserialize, Serialize};

use crate::common::error::FailureReport;
use crate::domain::{EnrichedPlanet, Film, PlanetPage};

/// Lifecycle actions dispatched to the catalog store.
///
/// Serialized as `{ "type": "FETCH_...", "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogAction {
    FetchPlanetsBegin,
    FetchPlanetSuccess(EnrichedPlanet),
    FetchPlanetsFailure(FailureReport),
    FetchMultiplePlanetsSuccess(PlanetPage),
    FetchFilms { films: Vec<Film> },
    RetrievePlanetFromCache(EnrichedPlanet),
}

impl CatalogAction {
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogAction::FetchPlanetsBegin => "FETCH_PLANETS_BEGIN",
            CatalogAction::FetchPlanetSuccess(_) => "FETCH_PLANET_SUCCESS",
            CatalogAction::FetchPlanetsFailure(_) => "FETCH_PLANETS_FAILURE",
            CatalogAction::FetchMultiplePlanetsSuccess(_) => "FETCH_MULTIPLE_PLANETS_SUCCESS",
            CatalogAction::FetchFilms { .. } => "FETCH_FILMS",
            CatalogAction::RetrievePlanetFromCache(_) => "RETRIEVE_PLANET_FROM_CACHE",
        }
    }
}
