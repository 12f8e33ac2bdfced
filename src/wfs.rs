//! EVC Polygon Service Client
//!
//! Fetches candidate vegetation-class features from the Victorian
//! open-data WFS for a bounding box around the query point. No retries:
//! upstream failures surface to the caller.

use anyhow::{Context, Result};

use crate::features::{BoundingBox, EvcFeature, EvcFeatureCollection, QueryPoint, BBOX_DELTA_DEGREES};

pub const DEFAULT_WFS_URL: &str = "https://opendata.maps.vic.gov.au/geoserver/wfs";

/// WFS layer holding the 2005 EVC / bioregional conservation status polygons.
pub const EVC_LAYER: &str = "open-data-platform:nv2005_evcbcs";

pub struct WfsClient {
    http: reqwest::Client,
    base_url: String,
}

impl WfsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Candidate features for the bounding box around `point`. An empty
    /// list is a valid answer (no mapped vegetation nearby).
    pub async fn fetch_candidates(&self, point: &QueryPoint) -> Result<Vec<EvcFeature>> {
        let bbox = BoundingBox::around(point, BBOX_DELTA_DEGREES);
        let url = format!(
            "{}?service=WFS&version=1.0.0&request=GetFeature&typeName={}&bbox={},EPSG:4326&outputFormat=application/json",
            self.base_url,
            EVC_LAYER,
            bbox.wfs_param()
        );

        let body = self
            .http
            .get(&url)
            .send()
            .await
            .context("EVC service request failed")?
            .error_for_status()
            .context("EVC service returned an error status")?
            .text()
            .await
            .context("failed to read EVC service response")?;

        // GeoServer reports failures as an XML/HTML page with a 200 status
        if body.trim_start().starts_with('<') {
            anyhow::bail!("EVC service returned an error page");
        }

        let collection: EvcFeatureCollection =
            serde_json::from_str(&body).context("malformed EVC feature collection")?;

        tracing::debug!(
            lat = point.lat,
            lon = point.lon,
            candidates = collection.features.len(),
            "fetched EVC candidates"
        );

        Ok(collection.features)
    }
}
