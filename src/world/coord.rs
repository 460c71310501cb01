/// Grid position, always normalized into `[0, rows) x [0, cols)` by the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Signed step between two cells; travel vectors stay inside {-1, 0, 1}^2
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub d_row: i32,
    pub d_col: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0, 0);

    #[inline]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }

    /// Same step repeated `k` times
    #[inline]
    pub const fn scale(self, k: i32) -> Self {
        Self::new(self.d_row * k, self.d_col * k)
    }
}

/// Fixed order the 3x3 food check scans in: self, the 4 edges, then diagonals
pub const FOOD_SCAN: [Offset; 9] = [
    Offset::new(0, 0),
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

/// 3x3 footprint around a centre, used for the nest and the food cluster
pub const FOOTPRINT: [Offset; 9] = FOOD_SCAN;
