//! Request-level entry point for trip planning.

use tracing::debug;

use crate::domain::{Advice, Coordinate, InvalidCoordinate, RecommendRequest, TripInfo, Vehicle};
use crate::profiles::{ProfileError, VehicleDirectory};

use super::config::PlannerConfig;
use super::cost::CostEstimator;
use super::placement::StopPlacementPlanner;

/// Error from a planning request.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// A point in the request is outside the valid coordinate ranges
    #[error("invalid {field}: {source}")]
    InvalidCoordinate {
        field: String,
        #[source]
        source: InvalidCoordinate,
    },

    /// Trip distance is negative or not a number
    #[error("invalid distance: {0}")]
    InvalidDistance(f64),

    /// Route is longer than the placement limit
    #[error("route of {distance} km exceeds the {max} km limit")]
    RouteTooLong { distance: i64, max: i64 },

    /// Vehicle profile can't be costed
    #[error("invalid vehicle: {0}")]
    InvalidVehicle(String),

    /// Vehicle lookup failed
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

fn check_point(field: impl FnOnce() -> String, point: Coordinate) -> Result<(), PlanError> {
    point
        .validate()
        .map_err(|source| PlanError::InvalidCoordinate {
            field: field(),
            source,
        })
}

/// Trip planning façade.
///
/// Holds only configuration, so one engine can serve concurrent requests.
/// All distances are kilometres.
#[derive(Debug, Clone, Default)]
pub struct TripPlanningEngine {
    config: PlannerConfig,
}

impl TripPlanningEngine {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Cost curve for `vehicle` over `distance_km`.
    pub fn trip_cost(
        &self,
        vehicle: &Vehicle,
        distance_km: f64,
    ) -> Result<Vec<TripInfo>, PlanError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(PlanError::InvalidDistance(distance_km));
        }
        if !vehicle.average_consumption.is_finite() || vehicle.average_consumption < 0.0 {
            return Err(PlanError::InvalidVehicle(format!(
                "average consumption {} must be a non-negative number",
                vehicle.average_consumption
            )));
        }

        debug!(engine = %vehicle.engine_type, distance_km, "estimating trip cost");
        Ok(CostEstimator::new(&self.config.cost).estimate_trip(vehicle, distance_km))
    }

    /// Cost curve for the vehicle registered to `owner`.
    ///
    /// Lookup failures are returned unchanged as [`PlanError::Profile`].
    pub fn trip_cost_for(
        &self,
        directory: &dyn VehicleDirectory,
        owner: &str,
        distance_km: f64,
    ) -> Result<Vec<TripInfo>, PlanError> {
        let vehicle = directory.vehicle_for(owner)?;
        self.trip_cost(&vehicle, distance_km)
    }

    /// Stop recommendations along a route.
    ///
    /// Every point in the request must be a valid coordinate, and the
    /// declared distance must not exceed `max_route_km`.
    pub fn recommend(&self, req: &RecommendRequest) -> Result<Vec<Advice>, PlanError> {
        let max = self.config.placement.max_route_km;
        if req.distance > max {
            return Err(PlanError::RouteTooLong {
                distance: req.distance,
                max,
            });
        }
        check_point(|| "start_point".to_string(), req.start_point)?;
        check_point(|| "arrival_point".to_string(), req.arrival_point)?;
        for stop in &req.stops {
            check_point(|| format!("stop {:?}", stop.name), stop.coordinate())?;
        }

        Ok(StopPlacementPlanner::new(&self.config.placement).recommend(req))
    }
}
