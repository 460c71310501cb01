use thiserror::Error;

/// Errors raised while configuring or running the simulation
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration rejected before the colony is built
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// No room left on the grid for a food cluster clear of the nest
    #[error("Could not place food away from the nest after {0} attempts")]
    FoodPlacement(usize),
    /// Another ant panicked while holding the trail graphs
    #[error("Trail graph lock poisoned")]
    TrailLockPoisoned,
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
