//! EVC Resolution
//!
//! Picks the single vegetation-class record that applies to a query point
//! out of the candidate features returned for its bounding box, then
//! normalizes the classification code and display name.
//!
//! Selection rule: first well-formed candidate whose polygon contains the
//! point; otherwise the first well-formed candidate in list order. The
//! positional fallback covers points that sit in gaps or on boundaries of
//! the mapped polygons, where nearby mapping is still the best answer.
//!
//! Pure and synchronous: fetching the candidates is the caller's problem.

use geo::Contains;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::{EvcFeature, QueryPoint};

/// Legacy/mosaic codes redirected to their canonical successor. The
/// curated dataset is keyed by the successor codes only.
const LEGACY_CODE_REMAP: &[(&str, &str)] = &[("921", "2"), ("904", "2"), ("1", "160")];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// No usable candidate: the list was empty, or every candidate was
    /// missing its code or name.
    #[error("no vegetation data for this location")]
    NoCandidates,
}

/// The chosen candidate after code and name normalization. Downstream
/// consumers (display, content merge) only ever see this record, never a
/// raw candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEvc {
    pub code: String,
    pub name: String,
    pub status: Option<String>,
    pub bioregion: Option<String>,
}

/// Resolve a query point against its candidate features.
pub fn resolve(point: &QueryPoint, candidates: &[EvcFeature]) -> Result<ResolvedEvc, ResolveError> {
    let pt = point.to_point();

    let chosen = candidates
        .iter()
        .filter(|c| c.is_well_formed())
        .find(|c| c.polygon().is_some_and(|polygon| polygon.contains(&pt)))
        .or_else(|| candidates.iter().find(|c| c.is_well_formed()))
        .ok_or(ResolveError::NoCandidates)?;

    let props = &chosen.properties;
    let code = props.code.as_deref().unwrap_or_default();
    let name = props.name.as_deref().unwrap_or_default();

    Ok(ResolvedEvc {
        code: normalize_code(code).to_string(),
        name: normalize_name(name),
        status: props.status.clone(),
        bioregion: props.bioregion.clone(),
    })
}

/// Remap legacy/mosaic classification codes; anything not in the table
/// passes through unchanged. Idempotent.
pub fn normalize_code(code: &str) -> &str {
    LEGACY_CODE_REMAP
        .iter()
        .find(|(legacy, _)| *legacy == code)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(code)
}

/// Normalize a raw display name for presentation and kit lookup:
/// mosaic/complex names (`A/B Mosaic`) collapse to their primary
/// community, and a trailing `Aggregate` qualifier is stripped.
pub fn normalize_name(raw: &str) -> String {
    let primary = raw.split('/').next().unwrap_or(raw).trim();
    strip_aggregate_suffix(primary).to_string()
}

fn strip_aggregate_suffix(name: &str) -> &str {
    const SUFFIX: &str = "aggregate";
    let bytes = name.as_bytes();
    if bytes.len() > SUFFIX.len()
        && bytes[bytes.len() - SUFFIX.len()..].eq_ignore_ascii_case(SUFFIX.as_bytes())
    {
        // The suffix must stand alone as a word
        let head = &name[..name.len() - SUFFIX.len()];
        if head.ends_with(char::is_whitespace) {
            return head.trim_end();
        }
    }
    name
}
