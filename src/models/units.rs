use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// Distance in kilometers.
/// Prevents mixing up units and provides type safety.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceKm(pub f64);

impl DistanceKm {
    /// Get the raw kilometers value
    pub fn as_km(self) -> f64 {
        self.0
    }
}

/// Emission rate in kilograms of CO2 per kilometer traveled.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EmissionFactor(pub f64);

impl EmissionFactor {
    pub fn as_kg_per_km(self) -> f64 {
        self.0
    }
}

/// Total emissions in kilograms of CO2.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct EmissionsKg(pub f64);

impl EmissionsKg {
    pub fn as_kg(self) -> f64 {
        self.0
    }
}

impl Mul<EmissionFactor> for DistanceKm {
    type Output = EmissionsKg;

    fn mul(self, factor: EmissionFactor) -> EmissionsKg {
        EmissionsKg(self.0 * factor.0)
    }
}
