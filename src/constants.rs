//! Stable application-wide constants.
//!
//! Values here are emission rates, structural defaults, and fallbacks for
//! env-var-based configuration. They should rarely change.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Trip distance ---

/// Stand-in distance (km) used for every trip until a real distance-matrix
/// collaborator replaces it.
pub const PLACEHOLDER_DISTANCE_KM: f64 = 100.0;

// --- Emission rates (kg CO2 per km traveled) ---

/// Average passenger car.
pub const EMISSION_RATE_CAR: f64 = 0.120;
/// Public bus, per passenger.
pub const EMISSION_RATE_BUS: f64 = 0.068;
/// Rail, per passenger.
pub const EMISSION_RATE_TRAIN: f64 = 0.045;
pub const EMISSION_RATE_BICYCLE: f64 = 0.0;
pub const EMISSION_RATE_WALKING: f64 = 0.0;

/// Rate applied when the submitted mode is not in the factor table.
/// Unlisted modes yield zero emissions rather than an error.
pub const EMISSION_RATE_UNKNOWN: f64 = 0.0;
