use tracing::{debug, info};

use crate::ant::Ant;
use crate::config::SimConfig;
use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::world::coord::FOOTPRINT;
use crate::world::{Coord, Grid};

/// How many random food centres to try before giving up
const FOOD_ATTEMPTS: usize = 1_000;

/// Toroidal Chebyshev distance two food/nest centres must keep, so the food
/// footprint never overlaps the nest or the ring of spawned ants
const FOOD_CLEARANCE: u32 = 4;

/// A freshly generated world: grid with nest and food, plus its ants
#[derive(Debug)]
pub struct Colony {
    pub grid: Grid,
    pub ants: Vec<Ant>,
    pub nest: Coord,
    pub food: Coord,
}

impl Colony {
    /// Pick random nest and food spots and populate a new grid
    pub fn generate(config: &SimConfig, rng: &mut fastrand::Rng) -> Result<Self> {
        config.validate()?;

        let nest = Coord::new(rng.u32(..config.rows - 1), rng.u32(..config.cols - 1));
        let food = (0..FOOD_ATTEMPTS)
            .map(|_| Coord::new(rng.u32(..config.rows - 1), rng.u32(..config.cols - 1)))
            .find(|&spot| torus_distance(nest, spot, config) >= FOOD_CLEARANCE)
            .ok_or(SimError::FoodPlacement(FOOD_ATTEMPTS))?;

        let mut grid = Grid::new(config);
        build_nest(&mut grid, nest);
        let ants = spawn_ants(&grid, nest, config, rng);
        spawn_food(&mut grid, food);

        info!(
            nest_row = nest.row,
            nest_col = nest.col,
            food_row = food.row,
            food_col = food.col,
            ants = ants.len(),
            "colony ready"
        );

        Ok(Self {
            grid,
            ants,
            nest,
            food,
        })
    }
}

/// Flag the 3x3 block around `centre` as nest
pub fn build_nest(grid: &mut Grid, centre: Coord) {
    for off in FOOTPRINT {
        let at = grid.step(centre, off);
        grid.set_nest(at);
    }
}

/// Flag the 3x3 block around `centre` as an inexhaustible food cluster
pub fn spawn_food(grid: &mut Grid, centre: Coord) {
    for off in FOOTPRINT {
        let at = grid.step(centre, off);
        grid.set_food(at);
    }
}

/// One ant per heading, just outside the nest footprint, facing away from it
pub fn spawn_ants(
    grid: &Grid,
    centre: Coord,
    config: &SimConfig,
    rng: &mut fastrand::Rng,
) -> Vec<Ant> {
    Direction::ALL
        .iter()
        .enumerate()
        .map(|(i, &dir)| {
            let home = grid.step(centre, dir.unit().scale(2));
            grid.cell_at(home).set_ant(true);
            debug!(
                ant = i,
                heading = dir.as_str(),
                row = home.row,
                col = home.col,
                "spawned"
            );
            Ant::new(i as u32, home, dir, config.alpha, rng.u64(..))
        })
        .collect()
}

fn torus_distance(a: Coord, b: Coord, config: &SimConfig) -> u32 {
    let axis = |x: u32, y: u32, n: u32| {
        let d = x.abs_diff(y);
        d.min(n - d)
    };
    axis(a.row, b.row, config.rows).max(axis(a.col, b.col, config.cols))
}
