//! Garden Kit Table
//!
//! Fixed table of purchasable planting-kit descriptors, keyed by the
//! post-normalization EVC name. This is data, not logic: adding or editing
//! a kit never touches the resolver or the content merge.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Bump when the table contents change.
pub const KIT_TABLE_VERSION: u32 = 1;

/// A purchasable garden kit tied to one vegetation class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitDescriptor {
    /// Image asset file under `images/evcs/`.
    pub image: &'static str,
    pub description: &'static str,
    /// Structural proportions per square metre (10 plants total).
    pub canopy: u8,
    pub shrub: u8,
    pub groundcover: u8,
    pub special_feature: &'static str,
    /// Stable identifier used in checkout references.
    pub slug: &'static str,
}

/// Kit descriptor for a normalized EVC name; exact match only.
pub fn kit_for(evc_name: &str) -> Option<&'static KitDescriptor> {
    kit_table().get(evc_name)
}

/// Number of vegetation classes with a kit.
pub fn kit_count() -> usize {
    kit_table().len()
}

fn kit_table() -> &'static FxHashMap<&'static str, KitDescriptor> {
    static TABLE: OnceLock<FxHashMap<&'static str, KitDescriptor>> = OnceLock::new();
    TABLE.get_or_init(|| {
        KITS.iter()
            .map(|(name, kit)| (*name, kit.clone()))
            .collect()
    })
}

const KITS: &[(&str, KitDescriptor)] = &[
    (
        "Coast Banksia Woodland",
        KitDescriptor {
            image: "coast-banksia-woodland.jpg",
            description: "Coastal banksia-dominated woodland with heath understory. Perfect for sandy coastal soils.",
            canopy: 1,
            shrub: 4,
            groundcover: 5,
            special_feature: "Wind and salt resistant",
            slug: "coast-banksia-woodland",
        },
    ),
    (
        "Damp Sands Herb-rich Woodland",
        KitDescriptor {
            image: "damp-sands-herb-rich-woodland.jpg",
            description: "Diverse woodland on seasonally damp sandy soils. Rich herbaceous groundlayer with high biodiversity.",
            canopy: 1,
            shrub: 3,
            groundcover: 6,
            special_feature: "Seasonal wetland species",
            slug: "damp-sands-herb-rich-woodland",
        },
    ),
    (
        "Sand Heathland",
        KitDescriptor {
            image: "sand-heathland.jpg",
            description: "Low heathland on coastal and inland sand deposits. Vibrant flowering display year-round.",
            canopy: 1,
            shrub: 5,
            groundcover: 4,
            special_feature: "Sandy soil specialists",
            slug: "sand-heathland",
        },
    ),
    (
        "Wet Heathland",
        KitDescriptor {
            image: "wet-heathland.jpg",
            description: "Heath communities on poorly-drained soils. Spectacular seasonal flowering display.",
            canopy: 0,
            shrub: 6,
            groundcover: 4,
            special_feature: "Wetland heath specialists",
            slug: "wet-heathland",
        },
    ),
    (
        "Estuarine Wetland",
        KitDescriptor {
            image: "estuarine-wetland.jpg",
            description: "Brackish wetland where tidal estuaries meet floodplains. Vital habitat for migratory birds.",
            canopy: 1,
            shrub: 2,
            groundcover: 7,
            special_feature: "Salt and flood-tolerant species",
            slug: "estuarine-wetland",
        },
    ),
    (
        "Lowland Forest",
        KitDescriptor {
            image: "lowland-forest.jpg",
            description: "Tall forest on flat to gently undulating terrain. Rich, productive ecosystems.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Tall canopy shade providers",
            slug: "lowland-forest",
        },
    ),
    (
        "Riparian Forest",
        KitDescriptor {
            image: "riparian-forest.jpg",
            description: "Waterway vegetation with deep-rooted trees. Stabilizes banks and filters runoff.",
            canopy: 4,
            shrub: 3,
            groundcover: 3,
            special_feature: "Moisture-loving species",
            slug: "riparian-forest",
        },
    ),
    (
        "Heathy Dry Forest",
        KitDescriptor {
            image: "heathy-dry-forest.jpg",
            description: "Forest with dense heath understory. Thrives on nutrient-poor, well-drained soils.",
            canopy: 4,
            shrub: 3,
            groundcover: 3,
            special_feature: "Year-round flowering heaths",
            slug: "heathy-dry-forest",
        },
    ),
    (
        "Shrubby Dry Forest",
        KitDescriptor {
            image: "shrubby-dry-forest.jpg",
            description: "Forest with prominent shrub layer. Thrives on drier, less fertile sites.",
            canopy: 3,
            shrub: 4,
            groundcover: 3,
            special_feature: "Drought-adapted shrub layer",
            slug: "shrubby-dry-forest",
        },
    ),
    (
        "Grassy Dry Forest",
        KitDescriptor {
            image: "grassy-dry-forest.jpg",
            description: "Open forest structure with colorful wildflowers. Thrives in well-drained soils.",
            canopy: 4,
            shrub: 2,
            groundcover: 4,
            special_feature: "Low-maintenance once established",
            slug: "grassy-dry-forest",
        },
    ),
    (
        "Herb-rich Foothill Forest",
        KitDescriptor {
            image: "herb-rich-foothill-forest.jpg",
            description: "Diverse forest with rich herbaceous layer. Found on fertile foothill soils.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Diverse herb and wildflower mix",
            slug: "herb-rich-foothill-forest",
        },
    ),
    (
        "Damp Forest",
        KitDescriptor {
            image: "damp-forest.jpg",
            description: "Cool, moist forest with tree ferns and moisture-loving plants. Perfect for sheltered gullies and shaded areas with reliable moisture.",
            canopy: 4,
            shrub: 3,
            groundcover: 3,
            special_feature: "Tree fern specialists",
            slug: "damp-forest",
        },
    ),
    (
        "Valley Grassy Forest",
        KitDescriptor {
            image: "valley-grassy-forest.jpg",
            description: "Tall eucalypt forest with rich fern and herb layer. Ideal for shaded valley slopes.",
            canopy: 4,
            shrub: 2,
            groundcover: 4,
            special_feature: "Shade-tolerant species mix",
            slug: "valley-grassy-forest",
        },
    ),
    (
        "Heathy Woodland",
        KitDescriptor {
            image: "heathy-woodland.jpg",
            description: "Low open woodland with dense heath understory. Perfect for sandy soils.",
            canopy: 2,
            shrub: 4,
            groundcover: 4,
            special_feature: "Year-round flowering species",
            slug: "heathy-woodland",
        },
    ),
    (
        "Swamp Scrub",
        KitDescriptor {
            image: "swamp-scrub.jpg",
            description: "Dense shrubby vegetation in seasonally inundated areas. Creates important wetland habitat.",
            canopy: 1,
            shrub: 6,
            groundcover: 3,
            special_feature: "Wetland and swamp specialists",
            slug: "swamp-scrub",
        },
    ),
    (
        "Plains Grassy Woodland",
        KitDescriptor {
            image: "plains-grassy-woodland.jpg",
            description: "Iconic River Red Gums with diverse grassland understory. Perfect for a Melbourne indigenous garden.",
            canopy: 3,
            shrub: 2,
            groundcover: 5,
            special_feature: "Drought-tolerant species mix",
            slug: "plains-grassy-woodland",
        },
    ),
    (
        "Floodplain Riparian Woodland",
        KitDescriptor {
            image: "floodplain-riparian-woodland.jpg",
            description: "Riverine woodlands adapted to periodic flooding. Important for water quality and flood mitigation.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Flood-tolerant species",
            slug: "floodplain-riparian-woodland",
        },
    ),
    (
        "Creekline Grassy Woodland",
        KitDescriptor {
            image: "creekline-grassy-woodland.jpg",
            description: "Riparian woodland with grassy groundlayer along minor creeks. Protects waterways and provides wildlife corridors.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Creek edge specialists",
            slug: "creekline-grassy-woodland",
        },
    ),
    (
        "Swampy Riparian Woodland",
        KitDescriptor {
            image: "swampy-riparian-woodland.jpg",
            description: "Waterlogged riparian areas with specialised vegetation. Natural water filtration system.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Waterlogged soil tolerant",
            slug: "swampy-riparian-woodland",
        },
    ),
    (
        "Swampy Riparian Complex",
        KitDescriptor {
            image: "swampy-riparian-complex.jpg",
            description: "Wetland-riparian ecosystem along drainage lines with fluctuating water levels. Natural water filtration system.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Waterlogged soil tolerant",
            slug: "swampy-riparian-complex",
        },
    ),
    (
        "Valley Heathy Forest",
        KitDescriptor {
            image: "valley-heathy-forest.jpg",
            description: "Forest with heathy understory in sheltered valleys. Rich in flowering shrubs.",
            canopy: 3,
            shrub: 4,
            groundcover: 3,
            special_feature: "Valley-adapted heath mix",
            slug: "valley-heathy-forest",
        },
    ),
    (
        "Creekline Herb-rich Woodland",
        KitDescriptor {
            image: "creekline-herb-rich-woodland.jpg",
            description: "Diverse woodland along ephemeral creeks with rich herbaceous layer. High biodiversity in moist microhabitats.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Moisture-loving herb specialists",
            slug: "creekline-herb-rich-woodland",
        },
    ),
    (
        "Floodplain Wetland",
        KitDescriptor {
            image: "floodplain-wetland.jpg",
            description: "Wetland vegetation adapted to seasonal waterlogging. Dominated by moisture-loving sedges, rushes, and wetland herbs. Natural water filtration system.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Wetland and waterway specialists",
            slug: "floodplain-wetland",
        },
    ),
    (
        "Grassy Woodland",
        KitDescriptor {
            image: "grassy-woodland.jpg",
            description: "Open woodland with diverse native grasses. Perfect for larger suburban blocks.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Low-maintenance grassland mix",
            slug: "grassy-woodland",
        },
    ),
    (
        "Riparian Woodland",
        KitDescriptor {
            image: "riparian-woodland.jpg",
            description: "Open woodland along permanent and ephemeral waterways. Critical wildlife habitat.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Creek and river specialists",
            slug: "riparian-woodland",
        },
    ),
    (
        "Stream Bank Shrubland",
        KitDescriptor {
            image: "stream-bank-shrubland.jpg",
            description: "Shrub-dominated communities along small streams. Essential for streambank stability.",
            canopy: 2,
            shrub: 5,
            groundcover: 3,
            special_feature: "Erosion-controlling shrubs",
            slug: "stream-bank-shrubland",
        },
    ),
    (
        "Coastal Alkaline Scrub",
        KitDescriptor {
            image: "coastal-alkaline-scrub.jpg",
            description: "Scrubland on limestone and calcarenite soils behind coastal dunes. Dominated by Coast Banksia and Coast Tea-tree with lime-loving understory species adapted to alkaline conditions.",
            canopy: 3,
            shrub: 3,
            groundcover: 4,
            special_feature: "Alkaline soil specialists",
            slug: "coastal-alkaline-scrub",
        },
    ),
    (
        "Brackish Grassland",
        KitDescriptor {
            image: "brackish-grassland.jpg",
            description: "Salt-tolerant grassland communities near coastal areas. Important habitat for migratory birds.",
            canopy: 0,
            shrub: 2,
            groundcover: 8,
            special_feature: "Salt-tolerant species mix",
            slug: "brackish-grassland",
        },
    ),
    (
        "Swampy Woodland",
        KitDescriptor {
            image: "swampy-woodland.jpg",
            description: "Waterlogged woodland on poorly drained soils. Dominated by Swamp Gum with sedges, grasses, and moisture-loving herbs. Natural water filtration system.",
            canopy: 3,
            shrub: 2,
            groundcover: 5,
            special_feature: "Wetland habitat specialists",
            slug: "swampy-woodland",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kit_lookup() {
        let kit = kit_for("Plains Grassy Woodland").unwrap();
        assert_eq!(kit.canopy, 3);
        assert_eq!(kit.shrub, 2);
        assert_eq!(kit.groundcover, 5);
        assert_eq!(kit.slug, "plains-grassy-woodland");
    }

    #[test]
    fn test_unknown_name_has_no_kit() {
        assert!(kit_for("Montane Riparian Thicket").is_none());
        // Exact match only; raw mosaic names must be normalized first
        assert!(kit_for("Lowland Forest/Swamp Scrub Mosaic").is_none());
    }

    #[test]
    fn test_table_size_and_unique_keys() {
        assert_eq!(KITS.len(), 29);
        assert_eq!(kit_count(), 29);
    }

    #[test]
    fn test_every_kit_sums_to_ten_plants() {
        for (name, kit) in KITS {
            let total = kit.canopy + kit.shrub + kit.groundcover;
            assert_eq!(total, 10, "kit for {} has {} plants", name, total);
        }
    }
}
