//! Trip planning engine.
//!
//! Two independent queries share one façade:
//! - trip cost: fuel consumption and price at each speed of a fixed ladder
//! - stop recommendation: charging stops near evenly spaced checkpoints
//!
//! Everything here is synchronous and side-effect free apart from logging.

mod config;
mod cost;
mod engine;
mod placement;

pub use config::{
    ColorPolicy, ColorTier, ConfigError, CostConfig, EngineRates, PlacementConfig, PlannerConfig,
    SpeedModel,
};
pub use cost::CostEstimator;
pub use engine::{PlanError, TripPlanningEngine};
pub use placement::StopPlacementPlanner;
