use clap::Parser;

use crate::config::SimConfig;
use crate::error::Result;

/// CLI arguments for the foraging simulation
#[derive(Parser, Debug)]
#[command(name = "antsim", about = "🐜 Pheromone-trail ant foraging on a toroidal grid")]
pub struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 100)]
    pub rows: u32,

    /// Grid columns
    #[arg(long, default_value_t = 100)]
    pub cols: u32,

    /// Number of ticks to simulate
    #[arg(short = 't', long, default_value_t = 1_000)]
    pub ticks: u64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a grid frame every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    pub render_every: u64,

    /// Frames per second when rendering (0 = as fast as possible)
    #[arg(long, default_value_t = 0)]
    pub fps: u32,

    /// Home trail strength laid by hungry ants
    #[arg(long, default_value_t = 0.65)]
    pub alpha: f32,

    /// Food trail strength laid by loaded ants
    #[arg(long, default_value_t = 0.95)]
    pub beta: f32,

    /// Home trail decay per event (food trails decay at a third of this)
    #[arg(long, default_value_t = 0.002)]
    pub gamma: f32,

    /// Cap on stored edges per trail vertex
    #[arg(long)]
    pub max_edges: Option<usize>,

    /// Suppress the run summary
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Args {
    /// Validated simulation config; unlisted tunables keep their defaults
    pub fn to_config(&self) -> Result<SimConfig> {
        let config = SimConfig {
            rows: self.rows,
            cols: self.cols,
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            max_edges_per_vertex: self.max_edges,
            ..SimConfig::default()
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config() {
        let args = Args::parse_from(["antsim"]);
        assert_eq!(args.to_config().unwrap(), SimConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["antsim", "--rows", "40", "--cols", "60", "--max-edges", "8"]);
        let config = args.to_config().unwrap();

        assert_eq!(config.rows, 40);
        assert_eq!(config.cols, 60);
        assert_eq!(config.max_edges_per_vertex, Some(8));
    }

    #[test]
    fn test_invalid_grid() {
        let args = Args::parse_from(["antsim", "--rows", "4"]);
        assert!(args.to_config().is_err());
    }
}
