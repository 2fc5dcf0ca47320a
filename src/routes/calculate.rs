use crate::constants::PLACEHOLDER_DISTANCE_KM;
use crate::error::{AppError, Result};
use crate::models::{CalculationRequest, CalculationResult, DistanceKm};
use crate::AppState;
use axum::{extract::State, Form, Json};
use std::sync::Arc;

/// POST /calculate
/// Estimate the carbon footprint of a trip from the submitted form fields.
pub async fn calculate_footprint(
    State(state): State<Arc<AppState>>,
    Form(request): Form<CalculationRequest>,
) -> Result<Json<CalculationResult>> {
    request.validate().map_err(AppError::MissingInput)?;

    // Real distance lookup is delegated to an external distance-matrix
    // collaborator; until then every trip uses the placeholder.
    let distance = DistanceKm(PLACEHOLDER_DISTANCE_KM);
    let carbon_footprint = state.estimator.estimate(&request.mode, distance);

    tracing::info!(
        start = %request.start,
        end = %request.end,
        mode = %request.mode,
        distance_km = distance.as_km(),
        "Footprint request: {} -> {} by {}, {:.2} kg CO2",
        request.start,
        request.end,
        request.mode,
        carbon_footprint.as_kg()
    );

    Ok(Json(CalculationResult {
        start: request.start,
        end: request.end,
        mode: request.mode,
        distance,
        carbon_footprint,
    }))
}
