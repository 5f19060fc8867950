//! Charging stop candidates and the advice built from them.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Marker colour the planner attaches to a recommended stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopColor {
    Green,
    Blue,
    Red,
}

/// A named stop location.
///
/// Candidates arrive without a colour; the planner sets one on the copies it
/// recommends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub lat: f64,
    pub long: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<StopColor>,
}

impl Stop {
    /// Create an uncoloured stop.
    pub fn new(name: impl Into<String>, lat: f64, long: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            long,
            color: None,
        }
    }

    /// The stop's position.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            long: self.long,
        }
    }

    /// Copy of this stop tagged with `color`.
    pub fn with_color(&self, color: StopColor) -> Self {
        Self {
            color: Some(color),
            ..self.clone()
        }
    }
}

/// One recommendation slot for a checkpoint.
///
/// Holds at most one stop; empty when nothing was found within the widest
/// tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    /// Variant number within its checkpoint, starting at 1.
    #[serde(rename = "advice")]
    pub number: usize,

    /// Distance from the start (km) this advice was searched around.
    pub target_km: f64,

    pub stops: Vec<Stop>,
}

/// Input for a stop recommendation query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Declared route length in kilometres.
    pub distance: i64,
    pub start_point: Coordinate,
    pub arrival_point: Coordinate,
    pub stops: Vec<Stop>,
}
