//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Advice, TripInfo};

/// Query string for a trip-cost request.
#[derive(Debug, Deserialize)]
pub struct TripQuery {
    /// Trip distance in kilometres
    pub distance: f64,
}

/// Envelope for every JSON response.
///
/// `data` is `null` on failure.
#[derive(Debug, Serialize)]
pub struct BaseResponse<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> BaseResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
        }
    }
}

/// Payload of a trip-cost response.
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub trip_info: Vec<TripInfo>,
}

/// Payload of a recommendation response.
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Advice>,
}
