//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::TripPlanningEngine;
use crate::profiles::VehicleDirectory;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Planning engine and its policy tables
    pub engine: Arc<TripPlanningEngine>,

    /// Vehicle profiles for trip-cost queries
    pub vehicles: Arc<dyn VehicleDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: TripPlanningEngine, vehicles: impl VehicleDirectory + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
            vehicles: Arc::new(vehicles),
        }
    }
}
