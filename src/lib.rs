//! # Ant foraging
//!
//! Ants wander a toroidal grid, find food, and shuttle it back to their nest
//! along pheromone trails they lay themselves.
//!
//! Two append-only trail graphs record every hop: hungry ants build the
//! home graph that loaded ants climb back to the nest, and loaded ants build
//! the food graph that the rest of the colony climbs out to the food. Edge
//! weights point at live pheromone levels in the grid, so decay reshapes the
//! routes without the graphs ever being edited.

pub mod ant;
pub mod cli;
pub mod colony;
pub mod config;
pub mod direction;
pub mod error;
pub mod simulation;
pub mod world;

pub use ant::{Ant, AntState};
pub use cli::Args;
pub use colony::Colony;
pub use config::SimConfig;
pub use direction::Direction;
pub use error::{Result, SimError};
pub use simulation::SimulationEngine;
pub use world::{Coord, Grid};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::simulation::{NullRenderer, Renderer, RunStats, TerminalRenderer};
    pub use crate::{
        Ant, AntState, Args, Colony, Coord, Direction, Grid, Result, SimConfig, SimError,
        SimulationEngine,
    };
}
