//! Vehicle profile lookup errors.

/// Errors resolving a user's vehicle.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// No profile is registered for this owner
    #[error("no vehicle profile for {0}")]
    NotFound(String),

    /// Two profiles claim the same owner
    #[error("duplicate vehicle profile for {0}")]
    Duplicate(String),

    /// Failed to read the profile file
    #[error("failed to read vehicle profiles: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file is not valid JSON
    #[error("failed to parse vehicle profiles: {0}")]
    Json(#[from] serde_json::Error),
}
