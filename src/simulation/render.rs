use std::time::Duration;

use colored::Colorize;

use crate::world::{Coord, Grid};

/// Consumer of the grid after each tick; always called from one thread
pub trait Renderer {
    fn render(&mut self, grid: &Grid, tick: u64);
}

/// Draws nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _tick: u64) {}
}

/// Prints coloured text frames to stdout
#[derive(Clone, Debug)]
pub struct TerminalRenderer {
    /// Print one frame every this many ticks
    every: u64,
    /// Sleep after each printed frame
    pause: Option<Duration>,
}

impl TerminalRenderer {
    pub fn new(every: u64, pause: Option<Duration>) -> Self {
        Self {
            every: every.max(1),
            pause,
        }
    }

    /// Text for one frame: `#` nest, `*` food, `@` ant, `.` trail
    pub fn frame(grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.rows() as usize + 1) * (grid.cols() as usize + 1));
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let view = grid.view(Coord::new(row, col));
                let glyph = if view.ant {
                    "@".red().bold()
                } else if view.food {
                    "*".green()
                } else if view.nest {
                    "#".magenta()
                } else if let Some([r, g, b]) = view.colour {
                    ".".truecolor(channel(r), channel(g), channel(b))
                } else {
                    " ".normal()
                };
                out.push_str(&glyph.to_string());
            }
            out.push('\n');
        }
        out
    }
}

/// Fade colours may run negative; only the display clamps them
fn channel(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, grid: &Grid, tick: u64) {
        if tick % self.every != 0 {
            return;
        }
        println!("{} {}", "--- tick".dimmed(), tick.to_string().cyan());
        print!("{}", Self::frame(grid));
        if let Some(pause) = self.pause {
            std::thread::sleep(pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::world::PheromoneKind;

    #[test]
    fn test_frame_glyphs() {
        colored::control::set_override(false);
        let config = SimConfig {
            rows: 10,
            cols: 10,
            ..SimConfig::default()
        };
        let mut grid = Grid::new(&config);
        grid.set_nest(Coord::new(0, 0));
        grid.set_food(Coord::new(0, 1));
        grid.cell_at(Coord::new(0, 2)).set_ant(true);
        grid.cell_at(Coord::new(0, 3)).deposit(PheromoneKind::Home, 0.65, 0);
        grid.cell_at(Coord::new(0, 3)).refresh_fade();

        let frame = TerminalRenderer::frame(&grid);
        let first = frame.lines().next().unwrap();

        assert!(first.starts_with("#*@."));
        assert_eq!(frame.lines().count(), 10);
    }

    #[test]
    fn test_channel_clamps() {
        assert_eq!(channel(-0.5), 0);
        assert_eq!(channel(1.0), 255);
        assert_eq!(channel(2.0), 255);
    }
}
