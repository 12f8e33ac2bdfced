//! EVC Garden Matcher
//!
//! Given a coordinate (or a geocoded address), determines the Ecological
//! Vegetation Class (EVC) covering that point and merges curated plant
//! recommendations with purchasable garden-kit and apparel data for it.
//!
//! Core pipeline, one direction, no persistence between lookups:
//! - `features`: candidate polygon records fetched for a bounding box
//! - `resolver`: point-in-polygon selection + code/name normalization
//! - `curated` + `kits`: the two read-only content tables
//! - `presentation`: the pure merge handed to the rendering layer
//!
//! The `api` feature adds the Axum HTTP server and the upstream clients
//! (WFS polygon service, Nominatim geocoder, lead-capture log).

pub mod assets;
pub mod curated;
pub mod features;
pub mod kits;
pub mod orders;
pub mod presentation;
pub mod resolver;
pub mod shell_cache;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod geocode;
#[cfg(feature = "api")]
pub mod lookup_log;
#[cfg(feature = "api")]
pub mod wfs;

// Re-export commonly used types
pub use curated::{CuratedDataset, CuratedEvc, PlantLayer};
pub use features::{BoundingBox, EvcFeature, EvcFeatureCollection, QueryPoint};
pub use kits::{kit_for, KitDescriptor};
pub use presentation::{build_presentation, KitOffer, PlantListing, Presentation};
pub use resolver::{normalize_code, normalize_name, resolve, ResolveError, ResolvedEvc};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
