//! EVC Candidate Features
//!
//! Wire types for the Victorian open-data WFS GetFeature response
//! (GeoJSON feature collection, layer `nv2005_evcbcs`), plus the query
//! point and bounding-box helpers used to build the request.
//!
//! Candidates are ephemeral: a list is fetched per lookup, handed to the
//! resolver, and dropped.

use geo::{LineString, Point, Polygon};
use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};

/// Half-width of the query bounding box, in degrees.
pub const BBOX_DELTA_DEGREES: f64 = 0.02;

/// A (latitude, longitude) query position. Immutable once captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryPoint {
    pub lat: f64,
    pub lon: f64,
}

impl QueryPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Geometry-space point (x = longitude, y = latitude).
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Axis-aligned bounding box in EPSG:4326 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Box of `delta_degrees` half-width centred on the query point.
    pub fn around(point: &QueryPoint, delta_degrees: f64) -> Self {
        Self {
            min_lon: point.lon - delta_degrees,
            min_lat: point.lat - delta_degrees,
            max_lon: point.lon + delta_degrees,
            max_lat: point.lat + delta_degrees,
        }
    }

    /// WFS `bbox` parameter order: minlon,minlat,maxlon,maxlat.
    pub fn wfs_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

/// Top-level GetFeature response. An empty `features` list is a valid
/// response (no mapped vegetation near the point), not malformed input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvcFeatureCollection {
    #[serde(default)]
    pub features: Vec<EvcFeature>,
}

/// One polygon/feature returned by the geospatial query.
#[derive(Debug, Clone, Deserialize)]
pub struct EvcFeature {
    #[serde(default)]
    pub geometry: Option<FeatureGeometry>,
    #[serde(default)]
    pub properties: EvcProperties,
}

impl EvcFeature {
    /// A candidate missing its code or name cannot produce a resolved
    /// record; the resolver skips it.
    pub fn is_well_formed(&self) -> bool {
        self.properties.code.is_some() && self.properties.name.is_some()
    }

    /// Containment-testable geometry, if this feature carries one.
    pub fn polygon(&self) -> Option<Polygon<f64>> {
        match &self.geometry {
            Some(FeatureGeometry::Polygon { coordinates }) if !coordinates.is_empty() => {
                let mut rings = coordinates.iter().map(|ring| {
                    LineString::from(
                        ring.iter().map(|c| (c[0], c[1])).collect::<Vec<(f64, f64)>>(),
                    )
                });
                let exterior = rings.next()?;
                Some(Polygon::new(exterior, rings.collect()))
            }
            _ => None,
        }
    }
}

/// GeoJSON geometry. Only polygons participate in containment testing;
/// every other type is retained solely for positional fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureGeometry {
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
    #[serde(other)]
    Other,
}

/// Properties bag from the WFS layer. All fields are optional because the
/// upstream schema is not under our control.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvcProperties {
    /// Raw display name, possibly slash- or `Aggregate`-suffixed.
    #[serde(rename = "x_evcname")]
    pub name: Option<String>,

    /// Raw classification code. The layer is inconsistent about encoding
    /// this as a JSON string or number, so accept both.
    #[serde(rename = "evc", default, deserialize_with = "code_as_string")]
    pub code: Option<String>,

    /// Bioregional conservation status text.
    #[serde(rename = "evc_bcs_desc")]
    pub status: Option<String>,

    pub bioregion: Option<String>,
}

fn code_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(Some(i.to_string()))
            } else if let Some(f) = n.as_f64() {
                // GeoServer sometimes serializes integral codes as floats
                if f.fract() == 0.0 {
                    Ok(Some(format!("{}", f as i64)))
                } else {
                    Ok(Some(f.to_string()))
                }
            } else {
                Err(D::Error::custom("unrepresentable EVC code number"))
            }
        }
        Some(other) => Err(D::Error::custom(format!(
            "EVC code must be a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::Contains;

    #[test]
    fn test_bbox_around_point() {
        let point = QueryPoint::new(-37.8136, 144.9631);
        let bbox = BoundingBox::around(&point, BBOX_DELTA_DEGREES);
        assert_relative_eq!(bbox.min_lon, 144.9431, epsilon = 1e-9);
        assert_relative_eq!(bbox.min_lat, -37.8336, epsilon = 1e-9);
        assert_relative_eq!(bbox.max_lon, 144.9831, epsilon = 1e-9);
        assert_relative_eq!(bbox.max_lat, -37.7936, epsilon = 1e-9);
    }

    #[test]
    fn test_bbox_param_order() {
        let bbox = BoundingBox {
            min_lon: 1.0,
            min_lat: 2.0,
            max_lon: 3.0,
            max_lat: 4.0,
        };
        assert_eq!(bbox.wfs_param(), "1,2,3,4");
    }

    #[test]
    fn test_parse_polygon_feature() {
        let json = r#"{
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[144.0, -38.0], [146.0, -38.0], [146.0, -36.0], [144.0, -36.0], [144.0, -38.0]]]
            },
            "properties": {
                "x_evcname": "Plains Grassy Woodland",
                "evc": "55",
                "evc_bcs_desc": "Endangered",
                "bioregion": "Victorian Volcanic Plain"
            }
        }"#;
        let feature: EvcFeature = serde_json::from_str(json).unwrap();
        assert!(feature.is_well_formed());
        let polygon = feature.polygon().unwrap();
        assert!(polygon.contains(&QueryPoint::new(-37.0, 145.0).to_point()));
        assert!(!polygon.contains(&QueryPoint::new(-39.0, 145.0).to_point()));
    }

    #[test]
    fn test_non_polygon_geometry_has_no_containment() {
        let json = r#"{
            "geometry": { "type": "Point", "coordinates": [144.0, -38.0] },
            "properties": { "x_evcname": "Swamp Scrub", "evc": "53" }
        }"#;
        let feature: EvcFeature = serde_json::from_str(json).unwrap();
        assert!(feature.is_well_formed());
        assert!(feature.polygon().is_none());
    }

    #[test]
    fn test_numeric_code_is_normalized_to_string() {
        let json = r#"{
            "geometry": null,
            "properties": { "x_evcname": "Damp Forest", "evc": 29 }
        }"#;
        let feature: EvcFeature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.properties.code.as_deref(), Some("29"));

        let json = r#"{
            "geometry": null,
            "properties": { "x_evcname": "Damp Forest", "evc": 29.0 }
        }"#;
        let feature: EvcFeature = serde_json::from_str(json).unwrap();
        assert_eq!(feature.properties.code.as_deref(), Some("29"));
    }

    #[test]
    fn test_missing_properties_mark_candidate_malformed() {
        let json = r#"{
            "geometry": { "type": "Point", "coordinates": [144.0, -38.0] },
            "properties": { "bioregion": "Gippsland Plain" }
        }"#;
        let feature: EvcFeature = serde_json::from_str(json).unwrap();
        assert!(!feature.is_well_formed());
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let collection: EvcFeatureCollection =
            serde_json::from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(collection.features.is_empty());
    }
}
