pub mod cell;
pub mod coord;
pub mod grid;
pub mod trail;

pub use cell::{Cell, Pheromone, PheromoneKind};
pub use coord::{Coord, Offset};
pub use grid::{CellView, Grid, LevelHandle};
pub use trail::{Edge, TrailGraph, TrailGraphs};
