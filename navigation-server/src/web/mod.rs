//! Web layer for the navigation planner.
//!
//! Provides JSON endpoints for trip-cost and stop recommendation queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, USER_EMAIL_HEADER, create_router};
pub use state::AppState;
