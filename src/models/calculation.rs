use crate::models::{DistanceKm, EmissionsKg};
use serde::{Deserialize, Serialize};

/// Form fields for a footprint calculation.
///
/// Absent fields deserialize as empty strings so that `validate()` reports
/// them, rather than the form extractor rejecting the request before the
/// handler sees it.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub mode: String,
}

impl CalculationRequest {
    // Only absence counts as missing; whitespace-only content passes.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("start", &self.start),
            ("end", &self.end),
            ("mode", &self.mode),
        ] {
            if value.is_empty() {
                return Err(format!("Missing required input: {}", field));
            }
        }
        Ok(())
    }
}

/// Echoes the submitted trip plus the estimated footprint. Transient, never
/// stored; display-side rounding is left to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResult {
    pub start: String,
    pub end: String,
    pub mode: String,
    pub distance: DistanceKm,
    pub carbon_footprint: EmissionsKg,
}
