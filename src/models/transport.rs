use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transport modes with a known emission rate.
///
/// Incoming form submissions carry the mode as a raw string; parsing failure
/// is not a request error, it routes the request to the fallback rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Bicycle,
    Walking,
}

impl TransportMode {
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Bicycle,
        TransportMode::Walking,
    ];
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Car => write!(f, "car"),
            TransportMode::Bus => write!(f, "bus"),
            TransportMode::Train => write!(f, "train"),
            TransportMode::Bicycle => write!(f, "bicycle"),
            TransportMode::Walking => write!(f, "walking"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    // Factor lookup keys on the exact lowercase identifier; any other
    // casing is an unrecognized mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(TransportMode::Car),
            "bus" => Ok(TransportMode::Bus),
            "train" => Ok(TransportMode::Train),
            "bicycle" => Ok(TransportMode::Bicycle),
            "walking" => Ok(TransportMode::Walking),
            _ => Err(format!("Unknown transport mode: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_mode_display() {
        assert_eq!(TransportMode::Car.to_string(), "car");
        assert_eq!(TransportMode::Walking.to_string(), "walking");
    }

    #[test]
    fn test_transport_mode_from_str() {
        assert_eq!("car".parse::<TransportMode>().unwrap(), TransportMode::Car);
        assert_eq!(
            "bicycle".parse::<TransportMode>().unwrap(),
            TransportMode::Bicycle
        );
        assert!("scooter".parse::<TransportMode>().is_err());
        assert!("".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_transport_mode_from_str_is_case_sensitive() {
        assert!("CAR".parse::<TransportMode>().is_err());
        assert!("Car".parse::<TransportMode>().is_err());
        assert!("Walking".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for mode in TransportMode::ALL {
            assert_eq!(mode.to_string().parse::<TransportMode>().unwrap(), mode);
        }
    }
}
