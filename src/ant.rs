use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::config::SimConfig;
use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::world::coord::FOOD_SCAN;
use crate::world::{Coord, Grid, Offset, PheromoneKind, TrailGraphs};

/// Behaviour an ant is in, derived from its two food flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    /// Random walk, laying home trail
    Exploring,
    /// Knows a food trail exists and climbs the food graph toward it
    SeekingFoodTrail,
    /// Carrying food, climbing the home graph back to the nest
    ReturningHome,
}

/// Everything an ant touches during one tick besides itself
pub struct StepContext<'a> {
    pub grid: &'a Grid,
    pub trails: &'a Mutex<TrailGraphs>,
    pub config: &'a SimConfig,
    /// Simulated time since the run started
    pub elapsed: u64,
    /// Food units dropped at the nest, shared by the whole colony
    pub delivered: &'a AtomicU64,
}

impl StepContext<'_> {
    fn lock_trails(&self) -> Result<MutexGuard<'_, TrailGraphs>> {
        self.trails.lock().map_err(|_| SimError::TrailLockPoisoned)
    }
}

/// A single forager
#[derive(Clone, Debug)]
pub struct Ant {
    pub id: u32,
    pub cur_pos: Coord,
    pub last_pos: Coord,
    pub home_base: Coord,
    pub direction: Direction,
    pub travel: Offset,
    pub pheromone_strength: f32,
    pub pheromone_kind: PheromoneKind,
    has_food: bool,
    found_food: bool,
    rng: fastrand::Rng,
}

impl Ant {
    /// Create a hungry ant standing on its home base
    pub fn new(id: u32, home_base: Coord, direction: Direction, strength: f32, seed: u64) -> Self {
        Self {
            id,
            cur_pos: home_base,
            last_pos: home_base,
            home_base,
            direction,
            travel: Offset::ZERO,
            pheromone_strength: strength,
            pheromone_kind: PheromoneKind::Home,
            has_food: false,
            found_food: false,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Currently carrying food home
    #[inline]
    pub fn has_food(&self) -> bool {
        self.has_food
    }

    /// Has located food or a trail leading to it
    #[inline]
    pub fn found_food(&self) -> bool {
        self.found_food
    }

    pub fn state(&self) -> AntState {
        match (self.has_food, self.found_food) {
            (true, _) => AntState::ReturningHome,
            (false, true) => AntState::SeekingFoodTrail,
            (false, false) => AntState::Exploring,
        }
    }

    /// Advance this ant by one tick
    ///
    /// The trail lock is taken only around graph reads and writes, never
    /// across grid updates. The ant picks its hungry or loaded branch from
    /// the flags it started the tick with, so an ant that spots food steps
    /// onto it this tick and starts home on the next.
    pub fn step(&mut self, ctx: &StepContext<'_>) -> Result<()> {
        let grid = ctx.grid;
        let started_loaded = self.has_food;

        match self.state() {
            AntState::Exploring => {
                if ctx.elapsed % ctx.config.redirect_interval == 0 {
                    self.redirect();
                }
            }
            AntState::SeekingFoodTrail => {
                let next = ctx.lock_trails()?.food.strongest_edge(self.cur_pos, grid);
                if let Some(next) = next {
                    grid.cell_at(self.cur_pos).set_ant(false);
                    self.last_pos = self.cur_pos;
                    self.cur_pos = next;
                    grid.cell_at(self.cur_pos).set_ant(true);
                }
            }
            AntState::ReturningHome => {}
        }

        grid.cell_at(self.cur_pos).refresh_fade();
        self.check_food(grid);

        if started_loaded {
            self.carry_home(ctx)?;
        } else {
            self.forage(ctx)?;
        }

        grid.cell_at(self.cur_pos).set_ant(true);
        Ok(())
    }

    /// New travel vector from the current heading, then maybe a new heading
    fn redirect(&mut self) {
        self.travel = self.direction.sample_travel(&mut self.rng);
        self.direction = self.direction.turn(self.rng.f64());
    }

    fn check_food(&mut self, grid: &Grid) {
        let here = self.cur_pos;
        let hit = FOOD_SCAN
            .iter()
            .copied()
            .find(|&off| grid.cell_at(grid.step(here, off)).is_food());

        if let Some(off) = hit {
            if !self.has_food {
                debug!(ant = self.id, row = here.row, col = here.col, "picked up food");
            }
            self.has_food = true;
            self.found_food = true;
            self.travel = off;
        }
    }

    /// Hungry branch: lay home trail and take one walking step
    fn forage(&mut self, ctx: &StepContext<'_>) -> Result<()> {
        let grid = ctx.grid;
        let here = grid.cell_at(self.cur_pos);

        here.set_ant(false);
        here.deposit(PheromoneKind::Home, self.pheromone_strength, ctx.elapsed);
        self.pheromone_strength = ctx.config.alpha;
        self.pheromone_kind = PheromoneKind::Home;

        if here.pheromone(PheromoneKind::Food).is_present() {
            if !self.found_food {
                let at = self.cur_pos;
                debug!(ant = self.id, row = at.row, col = at.col, "found food trail");
            }
            self.found_food = true;
            return Ok(());
        }

        self.last_pos = self.cur_pos;
        self.cur_pos = grid.step(self.cur_pos, self.travel);
        {
            let mut trails = ctx.lock_trails()?;
            trails.home.add_vertex(self.last_pos);
            trails.home.add_vertex(self.cur_pos);
            trails.home.add_edge(
                self.cur_pos,
                self.last_pos,
                grid.handle(self.cur_pos, PheromoneKind::Home),
            );
        }
        grid.cell_at(self.cur_pos).set_ant(true);
        Ok(())
    }

    /// Loaded branch: lay food trail and climb the home graph one hop
    ///
    /// Delivery happens on whichever nest cell the ant reaches. It stays on
    /// that cell rather than jumping back to its home base.
    fn carry_home(&mut self, ctx: &StepContext<'_>) -> Result<()> {
        let grid = ctx.grid;
        self.pheromone_strength = ctx.config.beta;
        self.pheromone_kind = PheromoneKind::Food;
        self.found_food = true;

        let here = grid.cell_at(self.cur_pos);
        here.set_ant(false);
        here.deposit(PheromoneKind::Food, self.pheromone_strength, ctx.elapsed);

        let next = {
            let mut trails = ctx.lock_trails()?;
            let next = trails.home.strongest_edge(self.cur_pos, grid);
            if let Some(next) = next {
                trails.food.add_vertex(self.cur_pos);
                trails.food.add_vertex(next);
                trails
                    .food
                    .add_edge(next, self.cur_pos, grid.handle(next, PheromoneKind::Food));
            }
            next
        };

        // No recorded way home from here: hold position
        let Some(next) = next else {
            return Ok(());
        };

        self.last_pos = self.cur_pos;
        self.cur_pos = next;
        grid.cell_at(self.cur_pos).set_ant(true);

        if self.cur_pos == self.home_base || grid.cell_at(self.cur_pos).is_nest() {
            let total = ctx.delivered.fetch_add(1, Ordering::Relaxed) + 1;
            debug!(ant = self.id, total, "back to nest with food");
            self.has_food = false;
        }
        Ok(())
    }
}
