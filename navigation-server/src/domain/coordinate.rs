//! Geographic coordinate type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a coordinate falls outside the WGS84 ranges.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {long}): {reason}")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub long: f64,
    reason: &'static str,
}

/// A latitude/longitude pair in degrees.
///
/// Coordinates arrive from JSON without validation, so the fields are
/// public and `validate` is called at the engine boundary. Use
/// [`Coordinate::new`] when building one in code.
///
/// # Examples
///
/// ```
/// use navigation_server::domain::Coordinate;
///
/// let istanbul = Coordinate::new(41.0082, 28.9784).unwrap();
/// assert_eq!(istanbul.lat, 41.0082);
///
/// // Latitude beyond the poles is rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    /// Create a validated coordinate.
    pub fn new(lat: f64, long: f64) -> Result<Self, InvalidCoordinate> {
        let coordinate = Self { lat, long };
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Check the coordinate is finite and within range.
    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        let reason = if !self.lat.is_finite() || !self.long.is_finite() {
            Some("must be finite")
        } else if !(-90.0..=90.0).contains(&self.lat) {
            Some("latitude must be within [-90, 90]")
        } else if !(-180.0..=180.0).contains(&self.long) {
            Some("longitude must be within [-180, 180]")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidCoordinate {
                lat: self.lat,
                long: self.long,
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.long)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.long)
    }
}
