//! Grid model
//!
//! The panel is a 9×18 grid: seven periods plus the lanthanide and
//! actinide breakout rows. Positions are always in bounds; anything that
//! would leave the grid is clamped to the nearest edge, never wrapped.

/// Number of grid rows
pub const GRID_ROWS: usize = 9;

/// Number of grid columns
pub const GRID_COLS: usize = 18;

/// Total number of cells on the panel
pub const CELL_COUNT: usize = GRID_ROWS * GRID_COLS;

const MAX_ROW: u8 = (GRID_ROWS - 1) as u8;
const MAX_COL: u8 = (GRID_COLS - 1) as u8;

/// A cell on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    row: u8,
    col: u8,
}

impl GridPosition {
    /// Top-left cell (hydrogen on the standard layout)
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a position, returning `None` if it lies outside the grid
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row <= MAX_ROW && col <= MAX_COL {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Create a position, clamping each coordinate into the grid
    pub fn clamped(row: i32, col: i32) -> Self {
        Self {
            row: row.clamp(0, MAX_ROW as i32) as u8,
            col: col.clamp(0, MAX_COL as i32) as u8,
        }
    }

    /// Row index (0-8)
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Column index (0-17)
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Row-major cell index (0-161), also the LED index on the strip
    pub const fn cell_index(&self) -> usize {
        self.row as usize * GRID_COLS + self.col as usize
    }

    /// Position of a row-major cell index, if in range
    pub const fn from_cell_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self {
                row: (index / GRID_COLS) as u8,
                col: (index % GRID_COLS) as u8,
            })
        } else {
            None
        }
    }

    /// Move one cell in a direction, holding at the edge of the grid
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::clamped(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }
}

/// A single-axis navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards row 8
    Down,
    /// Towards column 0
    Left,
    /// Towards column 17
    Right,
}

impl Direction {
    /// All directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for this direction
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Returns true for Up/Down
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}
