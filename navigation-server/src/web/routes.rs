//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, warn};

use crate::domain::RecommendRequest;
use crate::planner::PlanError;
use crate::profiles::ProfileError;

use super::dto::*;
use super::state::AppState;

/// Header carrying the caller's email, set by the authenticating gateway.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip", get(trip_cost))
        .route("/recommend", post(recommend))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fuel cost curve for the caller's vehicle.
async fn trip_cost(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TripQuery>, QueryRejection>,
) -> Result<Json<BaseResponse<TripResponse>>, AppError> {
    let Query(query) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;

    let owner = headers
        .get(USER_EMAIL_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: format!("missing {USER_EMAIL_HEADER} header"),
        })?;

    let trip_info = state
        .engine
        .trip_cost_for(state.vehicles.as_ref(), owner, query.distance)?;

    Ok(Json(BaseResponse::success(TripResponse { trip_info })))
}

/// Charging stop recommendations along a route.
async fn recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<BaseResponse<RecommendResponse>>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: RecommendRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid recommend request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let recommendations = state.engine.recommend(&req)?;

    Ok(Json(BaseResponse::success(RecommendResponse {
        recommendations,
    })))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        let message = e.to_string();
        match e {
            PlanError::Profile(ProfileError::NotFound(_)) => AppError::NotFound { message },
            PlanError::Profile(_) => AppError::Internal { message },
            PlanError::InvalidCoordinate { .. }
            | PlanError::InvalidDistance(_)
            | PlanError::RouteTooLong { .. }
            | PlanError::InvalidVehicle(_) => AppError::BadRequest { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(BaseResponse::<()>::failure(message));
        (status, body).into_response()
    }
}
