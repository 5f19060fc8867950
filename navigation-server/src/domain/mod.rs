//! Domain types for the trip planner.
//!
//! These are plain per-request value types. Coordinates are the only type
//! with a range invariant, and it is checked by the engine rather than at
//! deserialization so that the error can name the offending field.

mod coordinate;
mod stop;
mod trip;
mod vehicle;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use stop::{Advice, RecommendRequest, Stop, StopColor};
pub use trip::TripInfo;
pub use vehicle::{EngineType, Vehicle};
