//! In-memory vehicle directory.
//!
//! Loads user vehicle profiles from a JSON file and serves them by owner
//! email. Stands in for the user service's profile store.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::Vehicle;

use super::VehicleDirectory;
use super::error::ProfileError;

/// A user's vehicle as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub email: String,
    pub vehicle: Vehicle,
}

/// Emails compare case-insensitively and ignore surrounding whitespace.
fn normalize(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Vehicle profiles held in memory, keyed by normalized email.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleDirectory {
    vehicles: HashMap<String, Vehicle>,
}

impl InMemoryVehicleDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from profiles, rejecting duplicate owners.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = VehicleProfile>,
    ) -> Result<Self, ProfileError> {
        let mut directory = Self::new();
        for profile in profiles {
            let key = normalize(&profile.email);
            if directory.vehicles.contains_key(&key) {
                return Err(ProfileError::Duplicate(key));
            }
            directory.vehicles.insert(key, profile.vehicle);
        }
        Ok(directory)
    }

    /// Load profiles from a JSON array of `{"email", "vehicle"}` records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let profiles: Vec<VehicleProfile> = serde_json::from_str(&json)?;
        let directory = Self::from_profiles(profiles)?;

        info!(path = %path.display(), count = directory.len(), "loaded vehicle profiles");
        Ok(directory)
    }

    /// Register or replace the vehicle for `email`.
    pub fn insert(&mut self, email: &str, vehicle: Vehicle) {
        self.vehicles.insert(normalize(email), vehicle);
    }

    /// Number of registered owners.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns true if no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl VehicleDirectory for InMemoryVehicleDirectory {
    fn vehicle_for(&self, owner: &str) -> Result<Vehicle, ProfileError> {
        self.vehicles
            .get(&normalize(owner))
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(owner.to_string()))
    }
}
