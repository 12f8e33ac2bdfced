//! Checkout References
//!
//! Builds the `client_reference_id` strings and payment-link URLs for the
//! two purchasable products (garden kit, tee). The payment provider does
//! the actual transaction; the reference id is how an order is traced back
//! to a vegetation class after the fact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment link for garden kits ($89 per square metre).
pub const KIT_CHECKOUT_URL: &str = "https://buy.stripe.com/3cI9AT2Y94Srb7f6xN5Vu01";

/// Payment link for tees ($55).
pub const TEE_CHECKOUT_URL: &str = "https://buy.stripe.com/bJe4gzcyJbgP1wF8FV5Vu04";

/// Tee sizes offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeeSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl TeeSize {
    pub const ALL: [TeeSize; 6] = [
        TeeSize::Xs,
        TeeSize::S,
        TeeSize::M,
        TeeSize::L,
        TeeSize::Xl,
        TeeSize::Xxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TeeSize::Xs => "XS",
            TeeSize::S => "S",
            TeeSize::M => "M",
            TeeSize::L => "L",
            TeeSize::Xl => "XL",
            TeeSize::Xxl => "XXL",
        }
    }

    pub fn parse(input: &str) -> Option<TeeSize> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(input.trim()))
    }
}

/// Reference id for a garden-kit order.
pub fn kit_reference_id(evc_name: &str, evc_code: &str, date: NaiveDate) -> String {
    format!(
        "KIT_{}_EVC-{}_DATE-{}",
        name_slug(evc_name),
        evc_code,
        date.format("%Y-%m-%d")
    )
}

/// Reference id for a tee order; the size travels in the reference.
pub fn tee_reference_id(evc_name: &str, size: TeeSize, evc_code: &str, date: NaiveDate) -> String {
    format!(
        "TEE_{}_SIZE-{}_EVC-{}_DATE-{}",
        name_slug(evc_name),
        size.as_str(),
        evc_code,
        date.format("%Y-%m-%d")
    )
}

/// Payment-link URL carrying the reference id.
pub fn checkout_url(base: &str, reference_id: &str) -> String {
    format!(
        "{}?client_reference_id={}",
        base,
        urlencoding::encode(reference_id)
    )
}

/// Lowercased, hyphen-separated form of an EVC name for reference ids.
/// Only word characters, whitespace, and hyphens survive.
fn name_slug(evc_name: &str) -> String {
    let cleaned: String = evc_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_name_slug() {
        assert_eq!(name_slug("Plains Grassy Woodland"), "plains-grassy-woodland");
        assert_eq!(name_slug("Herb-rich Foothill Forest"), "herb-rich-foothill-forest");
        assert_eq!(name_slug("Coast Banksia (dune) Woodland"), "coast-banksia-dune-woodland");
    }

    #[test]
    fn test_kit_reference_id() {
        assert_eq!(
            kit_reference_id("Plains Grassy Woodland", "55", date()),
            "KIT_plains-grassy-woodland_EVC-55_DATE-2026-08-30"
        );
    }

    #[test]
    fn test_tee_reference_id() {
        assert_eq!(
            tee_reference_id("Damp Forest", TeeSize::M, "29", date()),
            "TEE_damp-forest_SIZE-M_EVC-29_DATE-2026-08-30"
        );
    }

    #[test]
    fn test_checkout_url_encodes_reference() {
        let url = checkout_url(KIT_CHECKOUT_URL, "KIT_a b_EVC-1");
        assert_eq!(
            url,
            "https://buy.stripe.com/3cI9AT2Y94Srb7f6xN5Vu01?client_reference_id=KIT_a%20b_EVC-1"
        );
    }

    #[test]
    fn test_tee_size_parse() {
        assert_eq!(TeeSize::parse("xl"), Some(TeeSize::Xl));
        assert_eq!(TeeSize::parse(" XS "), Some(TeeSize::Xs));
        assert_eq!(TeeSize::parse("XXXL"), None);
    }
}
