use crate::world::Offset;

/// 8 compass headings an ant can face
///
/// Rows grow toward East and columns grow toward North, so `West` steps
/// along `-row` and `North` along `+col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    West = 0,
    East = 1,
    North = 2,
    South = 3,
    Southwest = 4,
    Southeast = 5,
    Northwest = 6,
    Northeast = 7,
}

/// Range a single travel component is drawn from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    /// {-1, 0}
    Back,
    /// {0, 1}
    Forward,
    /// {-1, 0, 1}
    Either,
}

impl Axis {
    #[inline]
    fn sample(self, rng: &mut fastrand::Rng) -> i32 {
        match self {
            Axis::Back => -(rng.usize(..2) as i32),
            Axis::Forward => rng.usize(..2) as i32,
            Axis::Either => rng.usize(..3) as i32 - 1,
        }
    }
}

/// (row axis, col axis) per direction, indexed by `Direction::index`
const TRAVEL_TABLE: [(Axis, Axis); 8] = [
    (Axis::Back, Axis::Either),     // West
    (Axis::Forward, Axis::Either),  // East
    (Axis::Either, Axis::Forward),  // North
    (Axis::Either, Axis::Back),     // South
    (Axis::Back, Axis::Back),       // Southwest
    (Axis::Forward, Axis::Back),    // Southeast
    (Axis::Back, Axis::Forward),    // Northwest
    (Axis::Forward, Axis::Forward), // Northeast
];

/// Half-open probability bands `(lo, hi]` that pick a new heading.
/// Draws in (0.1, 0.2] and (0.9, 1.0) match no band and keep the old one.
const TURN_BANDS: [(f64, f64, Direction); 8] = [
    (f64::NEG_INFINITY, 0.1, Direction::West),
    (0.2, 0.3, Direction::East),
    (0.3, 0.4, Direction::North),
    (0.4, 0.5, Direction::South),
    (0.5, 0.6, Direction::Southwest),
    (0.6, 0.7, Direction::Southeast),
    (0.7, 0.8, Direction::Northwest),
    (0.8, 0.9, Direction::Northeast),
];

impl Direction {
    /// All possible directions
    pub const ALL: [Direction; 8] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::Southwest,
        Direction::Southeast,
        Direction::Northwest,
        Direction::Northeast,
    ];

    /// Get direction index for table lookups
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit step pointing this way
    pub const fn unit(self) -> Offset {
        match self {
            Direction::West => Offset::new(-1, 0),
            Direction::East => Offset::new(1, 0),
            Direction::North => Offset::new(0, 1),
            Direction::South => Offset::new(0, -1),
            Direction::Southwest => Offset::new(-1, -1),
            Direction::Southeast => Offset::new(1, -1),
            Direction::Northwest => Offset::new(-1, 1),
            Direction::Northeast => Offset::new(1, 1),
        }
    }

    /// Draw a travel vector biased toward this heading
    pub fn sample_travel(self, rng: &mut fastrand::Rng) -> Offset {
        let (row_axis, col_axis) = TRAVEL_TABLE[self.index()];
        let d_row = row_axis.sample(rng);
        let d_col = col_axis.sample(rng);
        Offset::new(d_row, d_col)
    }

    /// Map a uniform draw onto a heading, or keep `self` inside the gaps
    pub fn turn(self, p: f64) -> Direction {
        TURN_BANDS
            .iter()
            .find(|(lo, hi, _)| p > *lo && p <= *hi)
            .map_or(self, |&(_, _, dir)| dir)
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::East => "east",
            Direction::North => "north",
            Direction::South => "south",
            Direction::Southwest => "southwest",
            Direction::Southeast => "southeast",
            Direction::Northwest => "northwest",
            Direction::Northeast => "northeast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_bands() {
        let start = Direction::North;

        assert_eq!(start.turn(0.0), Direction::West);
        assert_eq!(start.turn(0.1), Direction::West);
        assert_eq!(start.turn(0.25), Direction::East);
        assert_eq!(start.turn(0.35), Direction::North);
        assert_eq!(start.turn(0.45), Direction::South);
        assert_eq!(start.turn(0.55), Direction::Southwest);
        assert_eq!(start.turn(0.65), Direction::Southeast);
        assert_eq!(start.turn(0.75), Direction::Northwest);
        assert_eq!(start.turn(0.85), Direction::Northeast);
    }

    #[test]
    fn test_turn_gaps_keep_heading() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn(0.15), dir);
            assert_eq!(dir.turn(0.2), dir);
            assert_eq!(dir.turn(0.95), dir);
        }
    }

    #[test]
    fn test_sample_travel_stays_in_range() {
        let mut rng = fastrand::Rng::with_seed(9);

        for _ in 0..200 {
            let west = Direction::West.sample_travel(&mut rng);
            assert!((-1..=0).contains(&west.d_row));
            assert!((-1..=1).contains(&west.d_col));

            let north = Direction::North.sample_travel(&mut rng);
            assert!((-1..=1).contains(&north.d_row));
            assert!((0..=1).contains(&north.d_col));

            let se = Direction::Southeast.sample_travel(&mut rng);
            assert!((0..=1).contains(&se.d_row));
            assert!((-1..=0).contains(&se.d_col));
        }
    }

    #[test]
    fn test_sample_travel_never_leaves_heading() {
        let mut rng = fastrand::Rng::with_seed(1);

        for dir in Direction::ALL {
            let unit = dir.unit();
            for _ in 0..50 {
                let travel = dir.sample_travel(&mut rng);
                // A component never opposes the heading's own unit step
                assert!(travel.d_row * unit.d_row >= 0);
                assert!(travel.d_col * unit.d_col >= 0);
            }
        }
    }

    #[test]
    fn test_units_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.unit(), b.unit());
            }
        }
    }
}
