pub mod estimator;

pub use estimator::{CarbonEstimator, EmissionFactorTable};
