//! Content Merge
//!
//! Combines curated plant content (keyed by canonical EVC code) and the
//! kit table (keyed by normalized EVC name) into one presentable result.
//! Pure: no I/O, no side effects, and deterministic for a fixed dataset
//! snapshot. Missing content on either side is an expected placeholder
//! outcome, never an error.

use serde::Serialize;

use crate::curated::{CuratedDataset, PlantLayer};
use crate::kits::{kit_for, KitDescriptor};

/// Plant recommendations half of the presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlantListing {
    Curated {
        description: Option<String>,
        layers: Vec<PlantLayer>,
    },
    /// No curated entry for this code yet.
    NotYetCurated,
}

/// Garden-kit half of the presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KitOffer {
    Available { kit: &'static KitDescriptor },
    /// No kit curated for this vegetation class yet.
    ComingSoon,
}

/// The merged result handed to the (out-of-scope) rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub evc_code: String,
    pub evc_name: String,
    pub plants: PlantListing,
    pub kit: KitOffer,
}

/// Merge curated content and kit data for a resolved classification.
/// `code` and `name` must already be normalized (see the resolver).
pub fn build_presentation(dataset: &CuratedDataset, code: &str, name: &str) -> Presentation {
    let plants = match dataset.get(code) {
        Some(entry) => PlantListing::Curated {
            description: entry.description.clone(),
            layers: entry.recommendations.clone(),
        },
        None => PlantListing::NotYetCurated,
    };

    let kit = match kit_for(name) {
        Some(kit) => KitOffer::Available { kit },
        None => KitOffer::ComingSoon,
    };

    Presentation {
        evc_code: code.to_string(),
        evc_name: name.to_string(),
        plants,
        kit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curated::CuratedDataset;

    fn dataset() -> CuratedDataset {
        CuratedDataset::parse(
            r#"{
                "evcs": {
                    "160": {
                        "description": "River Red Gum woodland.",
                        "recommendations": [
                            { "layer": "Canopy", "plants": ["Eucalyptus camaldulensis"] }
                        ]
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_full_merge_with_kit_and_plants() {
        let presentation = build_presentation(&dataset(), "160", "Plains Grassy Woodland");

        match &presentation.plants {
            PlantListing::Curated { layers, description } => {
                assert_eq!(description.as_deref(), Some("River Red Gum woodland."));
                assert_eq!(layers.len(), 1);
                assert_eq!(layers[0].layer, "Canopy");
                assert_eq!(layers[0].plants, ["Eucalyptus camaldulensis"]);
            }
            PlantListing::NotYetCurated => panic!("expected curated content"),
        }

        match &presentation.kit {
            KitOffer::Available { kit } => assert_eq!(kit.slug, "plains-grassy-woodland"),
            KitOffer::ComingSoon => panic!("expected a kit"),
        }
    }

    #[test]
    fn test_uncurated_code_yields_placeholder() {
        let presentation = build_presentation(&dataset(), "999", "Plains Grassy Woodland");
        assert_eq!(presentation.plants, PlantListing::NotYetCurated);
        // Kit lookup is independent of the curated dataset
        assert!(matches!(presentation.kit, KitOffer::Available { .. }));
    }

    #[test]
    fn test_unknown_kit_name_yields_placeholder() {
        let presentation = build_presentation(&dataset(), "160", "Montane Riparian Thicket");
        assert_eq!(presentation.kit, KitOffer::ComingSoon);
        assert!(matches!(presentation.plants, PlantListing::Curated { .. }));
    }

    #[test]
    fn test_merge_is_deterministic() {
        let dataset = dataset();
        let first = build_presentation(&dataset, "160", "Plains Grassy Woodland");
        let second = build_presentation(&dataset, "160", "Plains Grassy Woodland");
        assert_eq!(first, second);
    }
}
