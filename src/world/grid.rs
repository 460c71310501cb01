use crate::config::SimConfig;
use crate::world::cell::{Cell, PheromoneKind};
use crate::world::coord::{Coord, Offset};

/// Live reference to one cell's trail level; edges store this instead of a copy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelHandle {
    index: usize,
    kind: PheromoneKind,
}

/// Read-only snapshot of one cell for the renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    pub nest: bool,
    pub food: bool,
    pub ant: bool,
    pub home_trail: bool,
    pub food_trail: bool,
    /// Trail colour the renderer should use, if the cell shows a trail
    pub colour: Option<[f32; 3]>,
}

/// Toroidal grid of cells, shared by reference between all ants
#[derive(Debug)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid sized from the config
    pub fn new(config: &SimConfig) -> Self {
        let cells = (0..config.rows as usize * config.cols as usize)
            .map(|_| Cell::new(config))
            .collect();
        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Normalize signed coordinates onto the torus
    #[inline]
    pub fn wrap(&self, row: i64, col: i64) -> Coord {
        Coord::new(
            row.rem_euclid(self.rows as i64) as u32,
            col.rem_euclid(self.cols as i64) as u32,
        )
    }

    /// Neighbour of `at` reached by `by`, wrapping at the edges
    #[inline]
    pub fn step(&self, at: Coord, by: Offset) -> Coord {
        self.wrap(
            at.row as i64 + by.d_row as i64,
            at.col as i64 + by.d_col as i64,
        )
    }

    #[inline]
    fn index(&self, at: Coord) -> usize {
        let at = self.wrap(at.row as i64, at.col as i64);
        at.row as usize * self.cols as usize + at.col as usize
    }

    /// Cell at `at`; out-of-range coordinates wrap instead of panicking
    #[inline]
    pub fn cell_at(&self, at: Coord) -> &Cell {
        &self.cells[self.index(at)]
    }

    pub fn set_nest(&mut self, at: Coord) {
        let idx = self.index(at);
        self.cells[idx].nest = true;
    }

    pub fn set_food(&mut self, at: Coord) {
        let idx = self.index(at);
        self.cells[idx].food = true;
    }

    /// Handle to the live `kind` level at `at`
    #[inline]
    pub fn handle(&self, at: Coord, kind: PheromoneKind) -> LevelHandle {
        LevelHandle {
            index: self.index(at),
            kind,
        }
    }

    /// Dereference an edge weight
    #[inline]
    pub fn level(&self, handle: LevelHandle) -> f32 {
        self.cells[handle.index].pheromone(handle.kind).level()
    }

    /// Fade visible trails older than `decay_after`. Returns the number of
    /// cells that decayed.
    ///
    /// Only cells the renderer would paint as a trail decay: nest, food and
    /// occupied cells are skipped, and a food trail hides the home trail
    /// underneath it.
    pub fn decay_tick(&mut self, now: u64, decay_after: u64) -> usize {
        let mut decayed = 0;
        for cell in &self.cells {
            if cell.is_nest() || cell.is_food() || cell.has_ant() {
                continue;
            }
            let home = cell.pheromone(PheromoneKind::Home).is_present();
            let food = cell.pheromone(PheromoneKind::Food).is_present();

            let changed = if home && !food {
                cell.decay_trail(PheromoneKind::Home, now, decay_after)
            } else if food {
                cell.decay_trail(PheromoneKind::Food, now, decay_after)
            } else {
                false
            };
            decayed += changed as usize;
        }
        decayed
    }

    /// What the renderer needs to know about `at`
    pub fn view(&self, at: Coord) -> CellView {
        let cell = self.cell_at(at);
        let home_trail = cell.pheromone(PheromoneKind::Home).is_present();
        let food_trail = cell.pheromone(PheromoneKind::Food).is_present();
        let covered = cell.is_nest() || cell.is_food() || cell.has_ant();

        let colour = match (covered, cell.fade()) {
            (false, Some(fade)) if food_trail => Some(fade.colour(PheromoneKind::Food)),
            (false, Some(fade)) if home_trail => Some(fade.colour(PheromoneKind::Home)),
            _ => None,
        };

        CellView {
            nest: cell.is_nest(),
            food: cell.is_food(),
            ant: cell.has_ant(),
            home_trail,
            food_trail,
            colour,
        }
    }

    /// Number of cells carrying a `kind` trail
    pub fn trail_count(&self, kind: PheromoneKind) -> usize {
        self.cells
            .iter()
            .filter(|c| c.pheromone(kind).is_present())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: u32, cols: u32) -> Grid {
        Grid::new(&SimConfig {
            rows,
            cols,
            ..SimConfig::default()
        })
    }

    #[test]
    fn test_wrap_is_toroidal() {
        let g = grid(10, 20);

        assert_eq!(g.wrap(-1, -1), Coord::new(9, 19));
        assert_eq!(g.wrap(10, 20), Coord::new(0, 0));
        assert_eq!(g.wrap(-21, 45), Coord::new(9, 5));
        assert_eq!(g.step(Coord::new(0, 19), Offset::new(-1, 1)), Coord::new(9, 0));
    }

    #[test]
    fn test_cell_at_normalizes() {
        let mut g = grid(10, 10);
        g.set_food(Coord::new(13, 4));

        assert!(g.cell_at(Coord::new(3, 4)).is_food());
        assert!(g.cell_at(Coord::new(23, 14)).is_food());
    }

    #[test]
    fn test_handle_is_live() {
        let g = grid(10, 10);
        let at = Coord::new(2, 3);
        let handle = g.handle(at, PheromoneKind::Home);

        g.cell_at(at).deposit(PheromoneKind::Home, 0.3, 0);
        assert_eq!(g.level(handle), 0.3);

        g.cell_at(at).deposit(PheromoneKind::Home, 0.8, 1);
        assert_eq!(g.level(handle), 0.8);
    }

    #[test]
    fn test_decay_tick_skips_covered_cells() {
        let mut g = grid(10, 10);
        let open = Coord::new(1, 1);
        let occupied = Coord::new(2, 2);
        for at in [open, occupied] {
            g.cell_at(at).deposit(PheromoneKind::Home, 0.65, 0);
            g.cell_at(at).refresh_fade();
        }
        g.cell_at(occupied).set_ant(true);

        assert_eq!(g.decay_tick(100, 60), 1);
        assert!(g.level(g.handle(open, PheromoneKind::Home)) < 0.65);
        assert_eq!(g.level(g.handle(occupied, PheromoneKind::Home)), 0.65);
    }

    #[test]
    fn test_food_trail_shadows_home_trail() {
        let mut g = grid(10, 10);
        let at = Coord::new(4, 4);
        g.cell_at(at).deposit(PheromoneKind::Home, 0.65, 0);
        g.cell_at(at).deposit(PheromoneKind::Food, 0.95, 0);
        g.cell_at(at).refresh_fade();

        g.decay_tick(100, 60);

        assert_eq!(g.level(g.handle(at, PheromoneKind::Home)), 0.65);
        assert!(g.level(g.handle(at, PheromoneKind::Food)) < 0.95);
    }

    #[test]
    fn test_view_colour() {
        let g = grid(10, 10);
        let at = Coord::new(5, 5);
        assert_eq!(g.view(at).colour, None);

        g.cell_at(at).deposit(PheromoneKind::Home, 0.65, 0);
        g.cell_at(at).refresh_fade();
        let view = g.view(at);
        assert!(view.home_trail);
        assert_eq!(view.colour, Some([1.0, 1.0, 1.0]));

        g.cell_at(at).set_ant(true);
        let view = g.view(at);
        assert!(view.ant);
        assert_eq!(view.colour, None);
    }
}
