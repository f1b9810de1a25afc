//! Metrics for the planet catalog client
//!
//! Recording goes through the `metrics` facade; without an installed
//! recorder every call is a no-op.

use std::fmt;

/// Enum representing all metric names used in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // HTTP metrics
    HttpRequestsSuccess,
    HttpRequestsError,
    HttpRequestDuration,
    HttpPayloadBytes,

    // Cache metrics
    CacheHits,
    CacheMisses,

    // Enrichment metrics
    PlanetsEnriched,
    UnresolvedFilmReferences,

    // Dispatch metrics
    ActionsDispatched,
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::HttpRequestsSuccess => "planet_catalog_http_requests_success_total",
            MetricName::HttpRequestsError => "planet_catalog_http_requests_error_total",
            MetricName::HttpRequestDuration => "planet_catalog_http_request_duration_seconds",
            MetricName::HttpPayloadBytes => "planet_catalog_http_payload_bytes",

            MetricName::CacheHits => "planet_catalog_cache_hits_total",
            MetricName::CacheMisses => "planet_catalog_cache_misses_total",

            MetricName::PlanetsEnriched => "planet_catalog_planets_enriched_total",
            MetricName::UnresolvedFilmReferences => "planet_catalog_unresolved_film_references_total",

            MetricName::ActionsDispatched => "planet_catalog_actions_dispatched_total",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        [
            MetricName::HttpRequestsSuccess,
            MetricName::HttpRequestsError,
            MetricName::HttpRequestDuration,
            MetricName::HttpPayloadBytes,
            MetricName::CacheHits,
            MetricName::CacheMisses,
            MetricName::PlanetsEnriched,
            MetricName::UnresolvedFilmReferences,
            MetricName::ActionsDispatched,
        ]
        .into_iter()
    }

    /// Help text registered with the recorder
    pub fn description(&self) -> &'static str {
        match self {
            MetricName::HttpRequestsSuccess => "HTTP requests answered with a 2xx status",
            MetricName::HttpRequestsError => "HTTP requests that failed or returned a non-2xx status",
            MetricName::HttpRequestDuration => "HTTP request latency",
            MetricName::HttpPayloadBytes => "HTTP response body size",
            MetricName::CacheHits => "Planet lookups served from the planet cache",
            MetricName::CacheMisses => "Planet lookups that required a fetch",
            MetricName::PlanetsEnriched => "Planets whose film URLs were replaced with titles",
            MetricName::UnresolvedFilmReferences => "Film URLs with no matching film title",
            MetricName::ActionsDispatched => "Actions dispatched to the catalog store",
        }
    }

    fn is_histogram(&self) -> bool {
        matches!(self, MetricName::HttpRequestDuration | MetricName::HttpPayloadBytes)
    }
}

/// Register descriptions for every metric with the installed recorder
pub fn describe_all() {
    for metric in MetricName::all_metrics() {
        if metric.is_histogram() {
            ::metrics::describe_histogram!(metric.as_str(), metric.description());
        } else {
            ::metrics::describe_counter!(metric.as_str(), metric.description());
        }
    }
}

// ============================================================================
// HTTP Metrics
// ============================================================================

pub mod http {
    use super::MetricName;

    pub fn request_success() {
        ::metrics::counter!(MetricName::HttpRequestsSuccess.as_str()).increment(1);
    }

    pub fn request_error() {
        ::metrics::counter!(MetricName::HttpRequestsError.as_str()).increment(1);
    }

    pub fn request_duration(secs: f64) {
        ::metrics::histogram!(MetricName::HttpRequestDuration.as_str()).record(secs);
    }

    pub fn payload_bytes(bytes: usize) {
        ::metrics::histogram!(MetricName::HttpPayloadBytes.as_str()).record(bytes as f64);
    }
}

// ============================================================================
// Cache Metrics
// ============================================================================

pub mod cache {
    use super::MetricName;

    pub fn hit() {
        ::metrics::counter!(MetricName::CacheHits.as_str()).increment(1);
    }

    pub fn miss() {
        ::metrics::counter!(MetricName::CacheMisses.as_str()).increment(1);
    }
}

// ============================================================================
// Enrichment Metrics
// ============================================================================

pub mod enrich {
    use super::MetricName;

    pub fn planet_enriched() {
        ::metrics::counter!(MetricName::PlanetsEnriched.as_str()).increment(1);
    }

    pub fn unresolved_reference() {
        ::metrics::counter!(MetricName::UnresolvedFilmReferences.as_str()).increment(1);
    }
}

// ============================================================================
// Dispatch Metrics
// ============================================================================

pub mod dispatch {
    use super::MetricName;

    pub fn action_dispatched(kind: &'static str) {
        ::metrics::counter!(MetricName::ActionsDispatched.as_str(), "type" => kind).increment(1);
    }
}
