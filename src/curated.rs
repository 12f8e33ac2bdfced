//! Curated Plant Content
//!
//! Serde model of the hand-maintained `curated-plants.json` dataset: a
//! mapping from canonical EVC code to an optional description and an
//! ordered list of plant layers. Loaded once at startup, read-only after.

use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One layer group: an ordered list of plant names under a layer label
/// ("Canopy", "Shrub", "Groundcover", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantLayer {
    pub layer: String,
    pub plants: Vec<String>,
}

/// Curated entry for a single EVC code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CuratedEvc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<PlantLayer>,
}

/// The full curated dataset, keyed by canonical (post-remap) EVC code.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CuratedDataset {
    #[serde(default)]
    pub evcs: FxHashMap<String, CuratedEvc>,
}

impl CuratedDataset {
    /// Load the dataset from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read curated dataset: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse curated dataset: {}", path.display()))
    }

    /// Parse the dataset from a JSON string.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed curated dataset JSON")
    }

    /// Entry for a canonical EVC code. Absence is an expected outcome
    /// ("not yet curated"), not an error.
    pub fn get(&self, code: &str) -> Option<&CuratedEvc> {
        self.evcs.get(code)
    }

    pub fn len(&self) -> usize {
        self.evcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evcs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "evcs": {
            "160": {
                "description": "Open eucalypt woodland over native grasses.",
                "recommendations": [
                    { "layer": "Canopy", "plants": ["Eucalyptus camaldulensis"] },
                    { "layer": "Groundcover", "plants": ["Themeda triandra", "Kangaroo Grass"] }
                ]
            },
            "53": {}
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let dataset = CuratedDataset::parse(SAMPLE).unwrap();
        assert_eq!(dataset.len(), 2);

        let entry = dataset.get("160").unwrap();
        assert_eq!(entry.recommendations.len(), 2);
        assert_eq!(entry.recommendations[0].layer, "Canopy");
        assert_eq!(entry.recommendations[0].plants, ["Eucalyptus camaldulensis"]);
    }

    #[test]
    fn test_entry_fields_default_when_missing() {
        let dataset = CuratedDataset::parse(SAMPLE).unwrap();
        let sparse = dataset.get("53").unwrap();
        assert!(sparse.description.is_none());
        assert!(sparse.recommendations.is_empty());
    }

    #[test]
    fn test_unknown_code_is_none() {
        let dataset = CuratedDataset::parse(SAMPLE).unwrap();
        assert!(dataset.get("999").is_none());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(CuratedDataset::parse("{ not json").is_err());
    }
}
