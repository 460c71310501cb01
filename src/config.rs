use crate::error::{Result, SimError};

/// Smallest side that fits the nest, its ant ring and a separate food cluster
pub const MIN_SIDE: u32 = 10;

/// Tunables for one simulation run. Time values are abstract units;
/// the CLI treats them as milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub rows: u32,
    pub cols: u32,
    /// Strength a hungry ant lays home trail with
    pub alpha: f32,
    /// Strength a loaded ant lays food trail with
    pub beta: f32,
    /// Home trail decay per event; food trails decay at a third of this
    pub gamma: f32,
    /// Age a marker must exceed before it starts fading
    pub decay_after: u64,
    /// Exploring ants pick a new heading when elapsed time is a multiple of this
    pub redirect_interval: u64,
    /// Simulated time advanced per tick
    pub frame_delta: u64,
    /// Cap on stored edges per trail vertex; `None` keeps every hop
    pub max_edges_per_vertex: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            alpha: 0.65,
            beta: 0.95,
            gamma: 0.002,
            decay_after: 60,
            redirect_interval: 1000,
            frame_delta: 100,
            max_edges_per_vertex: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows < MIN_SIDE || self.cols < MIN_SIDE {
            return Err(SimError::InvalidConfig(format!(
                "grid {}x{} is smaller than {MIN_SIDE}x{MIN_SIDE}",
                self.rows, self.cols
            )));
        }
        if self.frame_delta == 0 {
            return Err(SimError::InvalidConfig("frame delta must be positive".into()));
        }
        if self.redirect_interval == 0 {
            return Err(SimError::InvalidConfig(
                "redirect interval must be positive".into(),
            ));
        }
        for (name, v) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !v.is_finite() || v < 0.0 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {v}"
                )));
            }
        }
        if self.max_edges_per_vertex == Some(0) {
            return Err(SimError::InvalidConfig(
                "edge cap must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
