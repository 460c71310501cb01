use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use colored::Colorize;
use rayon::prelude::*;
use tracing::{info, trace};

use crate::ant::{Ant, StepContext};
use crate::colony::Colony;
use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::simulation::render::Renderer;
use crate::world::{Grid, PheromoneKind, TrailGraphs};

/// Counters reported at the end of a run
#[derive(Clone, Debug, PartialEq)]
pub struct RunStats {
    pub ticks: u64,
    pub delivered: u64,
    pub home_edges: usize,
    pub food_edges: usize,
    /// Cells still marked with each trail
    pub home_cells: usize,
    pub food_cells: usize,
    pub wall_time: Duration,
}

/// Owns the shared world and drives it one tick at a time
pub struct SimulationEngine {
    config: SimConfig,
    grid: Grid,
    ants: Vec<Ant>,
    trails: Mutex<TrailGraphs>,
    delivered: AtomicU64,
    tick: u64,
}

impl SimulationEngine {
    /// Wrap a generated colony
    pub fn new(config: SimConfig, colony: Colony) -> Self {
        Self::from_parts(config, colony.grid, colony.ants)
    }

    /// Build from a hand-made grid and ant list
    pub fn from_parts(config: SimConfig, grid: Grid, ants: Vec<Ant>) -> Self {
        let trails = TrailGraphs::new(config.max_edges_per_vertex);
        Self {
            config,
            grid,
            ants,
            trails: Mutex::new(trails),
            delivered: AtomicU64::new(0),
            tick: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Simulated time the next tick runs at
    pub fn elapsed(&self) -> u64 {
        self.tick * self.config.frame_delta
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn trails(&self) -> Result<MutexGuard<'_, TrailGraphs>> {
        self.trails.lock().map_err(|_| SimError::TrailLockPoisoned)
    }

    /// Move every ant once in parallel, then fade old trails
    ///
    /// Decay only starts after every ant has finished, so it sees the
    /// grid exactly as the renderer will.
    pub fn tick(&mut self) -> Result<()> {
        let elapsed = self.elapsed();
        let ctx = StepContext {
            grid: &self.grid,
            trails: &self.trails,
            config: &self.config,
            elapsed,
            delivered: &self.delivered,
        };

        self.ants.par_iter_mut().try_for_each(|ant| ant.step(&ctx))?;

        let faded = self.grid.decay_tick(elapsed, self.config.decay_after);
        trace!(tick = self.tick, elapsed, faded, "tick done");

        self.tick += 1;
        Ok(())
    }

    /// Run up to `max_ticks` ticks, rendering after each one, until `stop` is raised
    pub fn run(
        &mut self,
        max_ticks: u64,
        renderer: &mut dyn Renderer,
        stop: &AtomicBool,
    ) -> Result<RunStats> {
        let sim_start = Instant::now();

        for _ in 0..max_ticks {
            if stop.load(Ordering::Relaxed) {
                info!(tick = self.tick, "stop requested");
                break;
            }
            self.tick()?;
            renderer.render(&self.grid, self.tick);
        }

        let stats = self.stats(sim_start.elapsed())?;
        info!(
            ticks = stats.ticks,
            delivered = stats.delivered,
            home_edges = stats.home_edges,
            food_edges = stats.food_edges,
            "run finished"
        );
        Ok(stats)
    }

    pub fn stats(&self, wall_time: Duration) -> Result<RunStats> {
        let trails = self.trails()?;
        Ok(RunStats {
            ticks: self.tick,
            delivered: self.delivered(),
            home_edges: trails.home.edge_count(),
            food_edges: trails.food.edge_count(),
            home_cells: self.grid.trail_count(PheromoneKind::Home),
            food_cells: self.grid.trail_count(PheromoneKind::Food),
            wall_time,
        })
    }

    /// Print simulation summary
    pub fn print_summary(&self, stats: &RunStats) {
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            stats.wall_time.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("ticks={}", stats.ticks).cyan(),
            format!("delivered={}", stats.delivered).cyan(),
            format!("home_edges={}", stats.home_edges).cyan(),
            format!("food_edges={}", stats.food_edges).cyan(),
            format!("trail_cells={}/{}", stats.home_cells, stats.food_cells).cyan(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::render::NullRenderer;

    fn engine(seed: u64) -> SimulationEngine {
        let config = SimConfig {
            rows: 30,
            cols: 30,
            ..SimConfig::default()
        };
        let mut rng = fastrand::Rng::with_seed(seed);
        let colony = Colony::generate(&config, &mut rng).unwrap();
        SimulationEngine::new(config, colony)
    }

    #[test]
    fn test_tick_advances_clock() {
        let mut sim = engine(1);
        assert_eq!(sim.elapsed(), 0);

        sim.tick().unwrap();
        sim.tick().unwrap();

        assert_eq!(sim.ticks(), 2);
        assert_eq!(sim.elapsed(), 2 * sim.config().frame_delta);
    }

    #[test]
    fn test_graphs_only_grow() {
        let mut sim = engine(2);
        let mut last = (0, 0);

        for _ in 0..200 {
            sim.tick().unwrap();
            let trails = sim.trails().unwrap();
            let now = (trails.home.edge_count(), trails.food.edge_count());
            assert!(now.0 >= last.0);
            assert!(now.1 >= last.1);
            last = now;
        }
    }

    #[test]
    fn test_run_honours_stop_flag() {
        let mut sim = engine(3);
        let stop = AtomicBool::new(true);

        let stats = sim.run(50, &mut NullRenderer, &stop).unwrap();

        assert_eq!(stats.ticks, 0);
        assert_eq!(stats.home_edges, 0);
    }

    #[test]
    fn test_run_counts_ticks() {
        let mut sim = engine(4);
        let stop = AtomicBool::new(false);

        let stats = sim.run(25, &mut NullRenderer, &stop).unwrap();

        assert_eq!(stats.ticks, 25);
        assert_eq!(stats.delivered, sim.delivered());
    }

    #[test]
    fn test_positions_stay_on_grid() {
        let mut sim = engine(5);
        for _ in 0..300 {
            sim.tick().unwrap();
            for ant in sim.ants() {
                assert!(ant.cur_pos.row < sim.grid().rows());
                assert!(ant.cur_pos.col < sim.grid().cols());
                assert!(!ant.has_food() || ant.found_food());
            }
        }
    }
}
