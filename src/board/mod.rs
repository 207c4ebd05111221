//! Board representation: players, coordinates, and the 15x15 grid

pub mod grid;


// Re-exports
pub use grid::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Center coordinate on both axes (floor(15 / 2))
pub const CENTER: u8 = (BOARD_SIZE / 2) as u8;

/// The two sides of a game. The human always owns the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Cpu,
}

impl Player {
    /// Get the opposing side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Cpu,
            Player::Cpu => Player::Human,
        }
    }

    /// Name shown in the status line and move log
    pub fn label(self) -> &'static str {
        match self {
            Player::Human => "You",
            Player::Cpu => "CPU",
        }
    }
}

/// Position on the board. `x` runs left to right, `y` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Row-major index: `y` outer, `x` inner. Scan order over indices is
    /// the tie-break order used by every strategy.
    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// Column letter for coordinate labels (`A` through `O`)
    #[inline]
    pub fn column_letter(self) -> char {
        (b'A' + self.x) as char
    }
}

impl std::fmt::Display for Pos {
    /// Formats as a board label like `H8`: column letter, then 1-based row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.y as u16 + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
