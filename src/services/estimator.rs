use crate::constants::*;
use crate::models::{DistanceKm, EmissionFactor, EmissionsKg, TransportMode};
use std::collections::HashMap;

/// Immutable mode -> emission rate mapping.
///
/// Built once at startup and shared read-only across all request handlers;
/// every recognized mode has exactly one rate.
#[derive(Debug, Clone)]
pub struct EmissionFactorTable {
    factors: HashMap<TransportMode, EmissionFactor>,
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        let factors = HashMap::from([
            (TransportMode::Car, EmissionFactor(EMISSION_RATE_CAR)),
            (TransportMode::Bus, EmissionFactor(EMISSION_RATE_BUS)),
            (TransportMode::Train, EmissionFactor(EMISSION_RATE_TRAIN)),
            (TransportMode::Bicycle, EmissionFactor(EMISSION_RATE_BICYCLE)),
            (TransportMode::Walking, EmissionFactor(EMISSION_RATE_WALKING)),
        ]);
        EmissionFactorTable { factors }
    }
}

impl EmissionFactorTable {
    /// Rate for a raw mode string. A string that parses to no known mode
    /// falls back to the zero rate instead of erroring.
    pub fn factor_for(&self, mode: &str) -> EmissionFactor {
        mode.parse::<TransportMode>()
            .ok()
            .and_then(|m| self.factors.get(&m).copied())
            .unwrap_or(EmissionFactor(EMISSION_RATE_UNKNOWN))
    }

    /// Number of recognized modes.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

/// Pure footprint estimator over a fixed factor table. Holds no per-request
/// state, so any number of requests may share it without coordination.
#[derive(Debug, Clone, Default)]
pub struct CarbonEstimator {
    table: EmissionFactorTable,
}

impl CarbonEstimator {
    pub fn new(table: EmissionFactorTable) -> Self {
        CarbonEstimator { table }
    }

    /// Emissions for traveling `distance` by `mode`: distance * rate.
    /// Cannot fail; unknown modes degrade to zero emissions. No rounding is
    /// applied here.
    pub fn estimate(&self, mode: &str, distance: DistanceKm) -> EmissionsKg {
        distance * self.table.factor_for(mode)
    }

    pub fn mode_count(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_matches_table_rate_for_every_mode() {
        let estimator = CarbonEstimator::default();
        for mode in TransportMode::ALL {
            let name = mode.to_string();
            let expected = 100.0 * estimator.table.factor_for(&name).as_kg_per_km();
            let got = estimator.estimate(&name, DistanceKm(100.0));
            assert_eq!(got.as_kg(), expected, "mode {}", name);
        }
    }

    #[test]
    fn test_estimate_car_over_placeholder_distance() {
        let estimator = CarbonEstimator::default();
        let footprint = estimator.estimate("car", DistanceKm(PLACEHOLDER_DISTANCE_KM));
        assert_eq!(footprint.as_kg(), 12.0);
    }

    #[test]
    fn test_estimate_non_emitting_modes() {
        let estimator = CarbonEstimator::default();
        assert_eq!(estimator.estimate("bicycle", DistanceKm(100.0)).as_kg(), 0.0);
        assert_eq!(estimator.estimate("walking", DistanceKm(100.0)).as_kg(), 0.0);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_zero() {
        let estimator = CarbonEstimator::default();
        assert_eq!(estimator.estimate("scooter", DistanceKm(100.0)).as_kg(), 0.0);
        assert_eq!(estimator.estimate("", DistanceKm(42.0)).as_kg(), 0.0);
    }

    #[test]
    fn test_mode_lookup_is_case_sensitive() {
        // The table keys on the exact lowercase identifiers; any other
        // casing takes the fallback rate.
        let estimator = CarbonEstimator::default();
        assert_eq!(estimator.estimate("CAR", DistanceKm(100.0)).as_kg(), 0.0);
        assert_eq!(estimator.estimate("Bus", DistanceKm(100.0)).as_kg(), 0.0);
    }

    #[test]
    fn test_zero_distance_is_zero_for_every_mode() {
        let estimator = CarbonEstimator::default();
        for mode in TransportMode::ALL {
            let footprint = estimator.estimate(&mode.to_string(), DistanceKm(0.0));
            assert_eq!(footprint.as_kg(), 0.0);
        }
    }

    #[test]
    fn test_estimate_is_idempotent() {
        let estimator = CarbonEstimator::default();
        let first = estimator.estimate("bus", DistanceKm(100.0));
        let second = estimator.estimate("bus", DistanceKm(100.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_table_covers_all_modes() {
        let table = EmissionFactorTable::default();
        assert_eq!(table.len(), TransportMode::ALL.len());
        assert!(!table.is_empty());
    }
}
