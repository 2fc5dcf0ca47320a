pub mod calculation;
pub mod transport;
pub mod units;

pub use calculation::{CalculationRequest, CalculationResult};
pub use transport::TransportMode;
pub use units::{DistanceKm, EmissionFactor, EmissionsKg};
