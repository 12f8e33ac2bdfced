//! Address Geocoding Client
//!
//! Nominatim forward search, autocomplete suggestions, and reverse
//! lookup. The storefront only serves Victoria, so forward results are
//! gated on the state and suggestions are filtered to Victorian
//! residential addresses.

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::features::QueryPoint;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim asks API clients to identify themselves.
const USER_AGENT: &str = concat!("evc_garden/", env!("CARGO_PKG_VERSION"));

/// Over-fetch suggestions, then filter down to this many.
const SUGGESTION_FETCH_LIMIT: usize = 10;
const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("address not found")]
    AddressNotFound,

    #[error("we currently only serve Victoria")]
    OutsideVictoria,

    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

/// One geocoder result.
#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    pub address: Option<AddressDetails>,
    /// Venue name; set for shops and landmarks, absent for plain
    /// residential addresses.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressDetails {
    pub state: Option<String>,
    pub house_number: Option<String>,
    pub amenity: Option<String>,
    pub shop: Option<String>,
    pub office: Option<String>,
    pub tourism: Option<String>,
}

impl Place {
    pub fn is_victorian(&self) -> bool {
        let state = self.address.as_ref().and_then(|a| a.state.as_deref());
        matches!(state, Some("Victoria") | Some("VIC"))
            || self.display_name.contains("Victoria")
            || self.display_name.contains("VIC")
    }

    /// A street address rather than a business or landmark.
    pub fn is_residential(&self) -> bool {
        let Some(addr) = &self.address else {
            return false;
        };
        addr.house_number.is_some()
            && addr.amenity.is_none()
            && addr.shop.is_none()
            && addr.office.is_none()
            && addr.tourism.is_none()
            && self.name.as_deref().map_or(true, str::is_empty)
    }

    pub fn point(&self) -> Result<QueryPoint> {
        let lat = self
            .lat
            .parse()
            .with_context(|| format!("invalid latitude in geocoder result: {}", self.lat))?;
        let lon = self
            .lon
            .parse()
            .with_context(|| format!("invalid longitude in geocoder result: {}", self.lon))?;
        Ok(QueryPoint::new(lat, lon))
    }
}

pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build geocoder HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Forward-geocode an address, gated to Victoria.
    pub async fn geocode(&self, address: &str) -> Result<Place, GeocodeError> {
        let results = self
            .search(&[("format", "json"), ("q", address), ("addressdetails", "1")])
            .await?;

        let place = results
            .into_iter()
            .next()
            .ok_or(GeocodeError::AddressNotFound)?;

        if !place.is_victorian() {
            return Err(GeocodeError::OutsideVictoria);
        }

        Ok(place)
    }

    /// Autocomplete suggestions: biased to Victoria, filtered to
    /// residential addresses, capped at five.
    pub async fn suggest(&self, input: &str) -> Result<Vec<Place>> {
        let biased = format!("{}, Victoria, Australia", input);
        let limit = SUGGESTION_FETCH_LIMIT.to_string();
        let results = self
            .search(&[
                ("format", "json"),
                ("q", biased.as_str()),
                ("countrycodes", "au"),
                ("limit", limit.as_str()),
                ("addressdetails", "1"),
            ])
            .await?;

        Ok(results
            .into_iter()
            .filter(|p| p.is_victorian() && p.is_residential())
            .take(SUGGESTION_LIMIT)
            .collect())
    }

    /// Human-readable address for a point; falls back to bare
    /// coordinates when the geocoder has nothing.
    pub async fn reverse(&self, point: &QueryPoint) -> Result<String> {
        #[derive(Deserialize)]
        struct Reverse {
            display_name: Option<String>,
        }

        let url = format!("{}/reverse", self.base_url);
        let lat = point.lat.to_string();
        let lon = point.lon.to_string();
        let result: Reverse = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("lat", lat.as_str()), ("lon", lon.as_str())])
            .send()
            .await
            .context("reverse geocode request failed")?
            .error_for_status()
            .context("reverse geocoder returned an error status")?
            .json()
            .await
            .context("malformed reverse geocoder response")?;

        Ok(result
            .display_name
            .unwrap_or_else(|| format!("{}, {}", point.lat, point.lon)))
    }

    async fn search(&self, query: &[(&str, &str)]) -> Result<Vec<Place>> {
        let url = format!("{}/search", self.base_url);
        self.http
            .get(&url)
            .query(query)
            .send()
            .await
            .context("geocoder request failed")?
            .error_for_status()
            .context("geocoder returned an error status")?
            .json()
            .await
            .context("malformed geocoder response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: &str) -> Place {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_victorian_by_state_field() {
        let p = place(
            r#"{"lat": "-37.8", "lon": "144.9", "display_name": "1 Example St, Carlton",
                "address": {"state": "Victoria", "house_number": "1"}}"#,
        );
        assert!(p.is_victorian());
        assert!(p.is_residential());
    }

    #[test]
    fn test_victorian_by_display_name() {
        let p = place(
            r#"{"lat": "-37.8", "lon": "144.9", "display_name": "1 Example St, VIC 3053"}"#,
        );
        assert!(p.is_victorian());
    }

    #[test]
    fn test_interstate_rejected() {
        let p = place(
            r#"{"lat": "-33.8", "lon": "151.2", "display_name": "1 Example St, Sydney",
                "address": {"state": "New South Wales", "house_number": "1"}}"#,
        );
        assert!(!p.is_victorian());
    }

    #[test]
    fn test_businesses_are_not_residential() {
        let p = place(
            r#"{"lat": "-37.8", "lon": "144.9", "display_name": "Cafe, Carlton, Victoria",
                "address": {"state": "Victoria", "house_number": "1", "amenity": "cafe"},
                "name": "Cafe"}"#,
        );
        assert!(!p.is_residential());
    }

    #[test]
    fn test_no_house_number_is_not_residential() {
        let p = place(
            r#"{"lat": "-37.8", "lon": "144.9", "display_name": "Example St, Carlton, Victoria",
                "address": {"state": "Victoria"}}"#,
        );
        assert!(!p.is_residential());
    }

    #[test]
    fn test_point_parses_coordinates() {
        let p = place(
            r#"{"lat": "-37.8136", "lon": "144.9631", "display_name": "Melbourne, Victoria"}"#,
        );
        let point = p.point().unwrap();
        assert_eq!(point, QueryPoint::new(-37.8136, 144.9631));
    }
}
