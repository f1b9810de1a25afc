//! Catalog data shapes shared across layers.
//!
//! Fields the crate does not interpret are captured in `extra` and written
//! back unchanged, so a planet or film round-trips with everything the API
//! sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A film URL as found on a planet before enrichment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmUrl(pub String);

/// A film title that replaced a `FilmUrl` during enrichment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmTitle(pub String);

macro_rules! string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }
    };
}

string_newtype!(FilmUrl);
string_newtype!(FilmTitle);

/// Reference entity used to resolve film URLs to titles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub url: String,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A planet whose `films` are either URLs (`RawPlanet`) or titles (`EnrichedPlanet`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet<F> {
    pub url: String,
    pub films: Vec<F>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type RawPlanet = Planet<FilmUrl>;
pub type EnrichedPlanet = Planet<FilmTitle>;

impl<F> Planet<F> {
    /// Display name, when the API supplied one
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// One page of a paginated collection endpoint.
///
/// Pagination metadata (`count`, `next`, `previous`) stays in `extra` as sent;
/// the accessors below read it without reshaping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Page<T> {
    pub fn count(&self) -> Option<u64> {
        self.extra.get("count").and_then(Value::as_u64)
    }

    pub fn next(&self) -> Option<&str> {
        self.extra.get("next").and_then(Value::as_str)
    }

    pub fn previous(&self) -> Option<&str> {
        self.extra.get("previous").and_then(Value::as_str)
    }
}

pub type FilmPage = Page<Film>;
pub type RawPlanetPage = Page<RawPlanet>;
pub type PlanetPage = Page<EnrichedPlanet>;
