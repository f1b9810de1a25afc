//! Planet catalog client: fetches planets and films from a SWAPI-style API,
//! replaces each planet's film URLs with film titles, and serves repeat
//! planet lookups from the store's planet cache.

pub mod common;
pub mod config;
pub mod domain;
pub mod observability;
pub mod pipeline;

// Application use cases and the ports they depend on
pub mod app;
pub mod infra;
