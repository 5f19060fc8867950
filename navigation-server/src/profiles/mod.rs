//! Vehicle profile lookup.
//!
//! The trip-cost query needs the caller's vehicle. Profiles belong to the
//! user service, so the planner only sees them through [`VehicleDirectory`],
//! keyed by an owner identity the caller passes explicitly.

mod directory;
mod error;

pub use directory::{InMemoryVehicleDirectory, VehicleProfile};
pub use error::ProfileError;

use crate::domain::Vehicle;

/// Resolves the vehicle registered to an owner.
///
/// This abstraction allows the engine to be tested without the user store.
pub trait VehicleDirectory: Send + Sync {
    /// Look up the vehicle for `owner` (an email address).
    fn vehicle_for(&self, owner: &str) -> Result<Vehicle, ProfileError>;
}
