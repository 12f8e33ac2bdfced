//! Offline Shell Cache Policy
//!
//! The page shell is served cache-first with a network fallback; upstream
//! data services are never cached (every lookup re-fetches and
//! re-derives). This module is the policy only; the browser-side worker
//! that applies it is a thin consumer of these rules.

/// Versioned cache bucket; bump to invalidate previously cached shells.
pub const CACHE_NAME: &str = "ecological-garden-v1";

/// Where failed navigations land when the network is unavailable.
pub const NAVIGATION_FALLBACK: &str = "/index.html";

/// Assets pre-cached at install time.
pub const APP_SHELL: &[&str] = &[
    "/",
    "/index.html",
    "/grow.html",
    "/about.html",
    "/contact.html",
    "/app.js",
    "/curated-plants.json",
    "/manifest.json",
    "https://fonts.googleapis.com/css2?family=Abril+Fatface&family=IBM+Plex+Mono:wght@300;400;500;700&display=swap",
    "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css",
    "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js",
];

/// Cross-origin hosts that still belong to the shell (fonts, map library).
const SHELL_CDN_HOSTS: &[&str] = &["fonts.googleapis.com", "unpkg.com"];

/// Live data sources that must never be served from cache: map tiles,
/// geocoding, the EVC polygon service, lead capture, and our own lookup
/// API.
const LIVE_ONLY_FRAGMENTS: &[&str] = &[
    "openstreetmap.org",
    "nominatim",
    "opendata.maps.vic.gov.au",
    "google.com/forms",
    "/api/",
];

/// How the worker should treat one fetched URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// Serve from cache when present, hit the network otherwise, and
    /// store the network response.
    CacheFirst,
    /// Always hit the network and never cache the response.
    NetworkOnly,
    /// Not ours to handle; let the browser fetch it untouched.
    Ignore,
}

/// Classify a request URL against the page origin.
pub fn classify(url: &str, origin: &str) -> FetchDecision {
    let is_shell_cdn = SHELL_CDN_HOSTS.iter().any(|host| url.contains(host));
    if !url.starts_with(origin) && !is_shell_cdn {
        return FetchDecision::Ignore;
    }
    if LIVE_ONLY_FRAGMENTS.iter().any(|fragment| url.contains(fragment)) {
        return FetchDecision::NetworkOnly;
    }
    FetchDecision::CacheFirst
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://gardenerandson.com.au";

    #[test]
    fn test_same_origin_shell_is_cache_first() {
        assert_eq!(classify("https://gardenerandson.com.au/grow.html", ORIGIN), FetchDecision::CacheFirst);
        assert_eq!(
            classify("https://gardenerandson.com.au/curated-plants.json", ORIGIN),
            FetchDecision::CacheFirst
        );
    }

    #[test]
    fn test_shell_cdns_are_cache_first() {
        assert_eq!(
            classify("https://unpkg.com/leaflet@1.9.4/dist/leaflet.js", ORIGIN),
            FetchDecision::CacheFirst
        );
        assert_eq!(
            classify("https://fonts.googleapis.com/css2?family=Abril+Fatface", ORIGIN),
            FetchDecision::CacheFirst
        );
    }

    #[test]
    fn test_own_lookup_api_is_never_cached() {
        assert_eq!(
            classify("https://gardenerandson.com.au/api/lookup?lat=-37.8&lon=144.9", ORIGIN),
            FetchDecision::NetworkOnly
        );
    }

    #[test]
    fn test_unrelated_cross_origin_is_ignored() {
        assert_eq!(
            classify("https://nominatim.openstreetmap.org/search?q=carlton", ORIGIN),
            FetchDecision::Ignore
        );
        assert_eq!(classify("https://example.com/logo.png", ORIGIN), FetchDecision::Ignore);
    }
}
