//! Navigation planning server.
//!
//! Estimates fuel cost for a user's vehicle over a trip and recommends
//! charging stops spaced along a route.

pub mod domain;
pub mod geo;
pub mod planner;
pub mod profiles;
pub mod web;
