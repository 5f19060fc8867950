//! Trip cost estimates.

use serde::{Deserialize, Serialize};

/// Estimated consumption and cost for a trip driven at one speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInfo {
    /// Cruising speed in km/h.
    pub speed: f64,

    /// Fuel used over the whole trip in litres, rounded to 2 decimals.
    pub average_consumption: f64,

    /// Trip distance in kilometres.
    pub distance: f64,

    /// Fuel cost, rounded to 2 decimals.
    pub total_price: f64,
}
