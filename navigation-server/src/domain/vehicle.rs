//! Vehicle profile types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Drivetrain of a vehicle.
///
/// Names that don't match a known variant deserialize to `Unknown`, which
/// the fuel policy treats like petrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineType::Petrol => "petrol",
            EngineType::Diesel => "diesel",
            EngineType::Hybrid => "hybrid",
            EngineType::Electric => "electric",
            EngineType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A user's vehicle as seen by the cost estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    pub engine_type: EngineType,

    /// Displacement in litres (e.g. 1.6).
    pub engine_size: f64,

    /// Baseline consumption in litres per 100 km.
    pub average_consumption: f64,
}

impl Vehicle {
    /// Create a vehicle without brand or model information.
    pub fn new(engine_type: EngineType, engine_size: f64, average_consumption: f64) -> Self {
        Self {
            brand: None,
            model: None,
            engine_type,
            engine_size,
            average_consumption,
        }
    }
}
