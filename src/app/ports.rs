use async_trait::async_trait;

use crate::app::actions::CatalogAction;
use crate::common::error::Result;
use crate::domain::{EnrichedPlanet, Film};

#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Store that receives dispatched actions and exposes the state the use case reads back
pub trait CatalogStorePort: Send + Sync {
    fn dispatch(&self, action: CatalogAction);

    /// Previously fetched planets in insertion order
    fn planet_cache(&self) -> Vec<EnrichedPlanet>;

    /// Current film catalog
    fn films(&self) -> Vec<Film>;
}
