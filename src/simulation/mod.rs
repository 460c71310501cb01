pub mod engine;
pub mod render;

pub use engine::{RunStats, SimulationEngine};
pub use render::{NullRenderer, Renderer, TerminalRenderer};
