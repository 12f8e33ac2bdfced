// Axum API server for the storefront lookup flow:
// coordinate/address -> candidate polygons -> resolved EVC -> merged
// presentation (plants + kit + checkout links).

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::curated::CuratedDataset;
use crate::features::QueryPoint;
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::lookup_log::LookupLog;
use crate::orders::{
    checkout_url, kit_reference_id, tee_reference_id, TeeSize, KIT_CHECKOUT_URL, TEE_CHECKOUT_URL,
};
use crate::presentation::{build_presentation, KitOffer};
use crate::resolver::resolve;
use crate::wfs::WfsClient;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub curated: Arc<CuratedDataset>,
    pub wfs: Arc<WfsClient>,
    pub geocoder: Arc<GeocodeClient>,
    /// Absent when lead capture is disabled.
    pub lookup_log: Option<Arc<LookupLog>>,
}

impl AppState {
    pub fn new(
        curated_path: &str,
        wfs_url: &str,
        nominatim_url: &str,
        lookup_log_url: Option<&str>,
    ) -> anyhow::Result<Self> {
        tracing::info!("Loading curated plant dataset...");
        let curated = CuratedDataset::load(curated_path)?;
        tracing::info!("Curated content for {} vegetation classes", curated.len());

        Ok(Self {
            curated: Arc::new(curated),
            wfs: Arc::new(WfsClient::new(wfs_url)),
            geocoder: Arc::new(GeocodeClient::new(nominatim_url)?),
            lookup_log: lookup_log_url.map(|url| Arc::new(LookupLog::new(url))),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Lookup endpoints (JSON API)
        .route("/api/lookup", get(lookup_by_point))
        .route("/api/lookup/address", get(lookup_by_address))
        .route("/api/suggest", get(suggest_addresses))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Deserialize)]
struct PointParams {
    lat: f64,
    lon: f64,
}

async fn lookup_by_point(
    State(state): State<AppState>,
    Query(params): Query<PointParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let point = QueryPoint::new(params.lat, params.lon);
    let response = perform_lookup(&state, point, None).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct AddressParams {
    q: String,
}

async fn lookup_by_address(
    State(state): State<AppState>,
    Query(params): Query<AddressParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let address = params.q.trim();
    if address.is_empty() {
        return Err(AppError::BadRequest("address must not be empty".into()));
    }

    let place = state.geocoder.geocode(address).await.map_err(|e| match e {
        GeocodeError::AddressNotFound => AppError::NotFound(e.to_string()),
        GeocodeError::OutsideVictoria => AppError::BadRequest(e.to_string()),
        GeocodeError::Upstream(e) => AppError::Upstream(e.to_string()),
    })?;

    let point = place.point().map_err(|e| AppError::Upstream(e.to_string()))?;
    let response = perform_lookup(&state, point, Some(place.display_name)).await?;
    Ok(Json(response))
}

async fn suggest_addresses(
    State(state): State<AppState>,
    Query(params): Query<AddressParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let input = params.q.trim();
    // Too short to be worth a geocoder round trip
    if input.len() < 3 {
        return Ok(Json(serde_json::json!({ "suggestions": [] })));
    }

    let places = state
        .geocoder
        .suggest(input)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let suggestions: Vec<serde_json::Value> = places
        .iter()
        .map(|p| {
            serde_json::json!({
                "display_name": p.display_name,
                "lat": p.lat,
                "lon": p.lon,
            })
        })
        .collect();

    Ok(Json(serde_json::json!({ "suggestions": suggestions })))
}

/// Shared lookup path: fetch candidates, resolve, merge, attach checkout
/// links, and record the lead without blocking the response. Everything is
/// recomputed per call; no result caching.
async fn perform_lookup(
    state: &AppState,
    point: QueryPoint,
    searched_address: Option<String>,
) -> Result<serde_json::Value, AppError> {
    let candidates = state
        .wfs
        .fetch_candidates(&point)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let resolved = resolve(&point, &candidates).map_err(|e| AppError::NotFound(e.to_string()))?;
    let presentation = build_presentation(&state.curated, &resolved.code, &resolved.name);

    // Geolocation lookups arrive without an address; reverse-geocode for
    // display and lead capture, falling back to bare coordinates.
    let address = match searched_address {
        Some(address) => address,
        None => state
            .geocoder
            .reverse(&point)
            .await
            .unwrap_or_else(|_| format!("{}, {}", point.lat, point.lon)),
    };

    let today = chrono::Utc::now().date_naive();
    let kit_checkout = match &presentation.kit {
        KitOffer::Available { .. } => Some(checkout_url(
            KIT_CHECKOUT_URL,
            &kit_reference_id(&resolved.name, &resolved.code, today),
        )),
        KitOffer::ComingSoon => None,
    };
    let tee_checkout: serde_json::Value = TeeSize::ALL
        .iter()
        .map(|size| {
            (
                size.as_str().to_string(),
                serde_json::Value::String(checkout_url(
                    TEE_CHECKOUT_URL,
                    &tee_reference_id(&resolved.name, *size, &resolved.code, today),
                )),
            )
        })
        .collect::<serde_json::Map<String, serde_json::Value>>()
        .into();

    if let Some(log) = state.lookup_log.clone() {
        let address = address.clone();
        let code = resolved.code.clone();
        let name = resolved.name.clone();
        tokio::spawn(async move {
            log.record(&address, &point, &code, &name).await;
        });
    }

    Ok(serde_json::json!({
        "point": point,
        "address": address,
        "evc": resolved,
        "presentation": presentation,
        "checkout": {
            "kit": kit_checkout,
            "tee": tee_checkout,
        },
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
