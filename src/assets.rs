//! Asset File Naming
//!
//! Deterministic derivation of plant-photo and product-image file names
//! from display names. Whether a file actually exists stays with the
//! caller; these functions only pick the name to probe.

/// Photo file for a plant list entry, under `images/plants/`.
///
/// Entries are written `Botanical name (Common name)`; the common name
/// wins when present.
pub fn plant_image_file(plant: &str) -> String {
    let name = common_name(plant).unwrap_or(plant);
    format!("{}.jpg", hyphenated(name))
}

/// Product image file for a vegetation class (tee and kit artwork).
pub fn product_image_file(evc_name: &str) -> String {
    format!("{}.jpg", hyphenated(evc_name).replace('&', "and"))
}

fn common_name(plant: &str) -> Option<&str> {
    let open = plant.find('(')?;
    let rest = &plant[open + 1..];
    let close = rest.find(')')?;
    let inner = rest[..close].trim();
    (!inner.is_empty()).then_some(inner)
}

fn hyphenated(name: &str) -> String {
    let lowered = name.to_lowercase();
    let joined = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    joined.replace(['\'', '\u{2018}', '\u{2019}'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_name_preferred() {
        assert_eq!(
            plant_image_file("Themeda triandra (Kangaroo Grass)"),
            "kangaroo-grass.jpg"
        );
    }

    #[test]
    fn test_botanical_name_when_no_parens() {
        assert_eq!(
            plant_image_file("Eucalyptus camaldulensis"),
            "eucalyptus-camaldulensis.jpg"
        );
    }

    #[test]
    fn test_apostrophes_dropped() {
        assert_eq!(
            plant_image_file("Dichondra repens (Kidney\u{2019}s Weed)"),
            "kidneys-weed.jpg"
        );
    }

    #[test]
    fn test_product_image_for_evc_name() {
        assert_eq!(
            product_image_file("Herb-rich Foothill Forest"),
            "herb-rich-foothill-forest.jpg"
        );
    }

    #[test]
    fn test_ampersand_becomes_and() {
        assert_eq!(product_image_file("Box & Ironbark"), "box-and-ironbark.jpg");
    }
}
