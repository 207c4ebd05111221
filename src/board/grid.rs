//! Grid storage and cell accessors

use super::{Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// The 15x15 grid. Cells hold `Some(player)` or `None` for empty.
///
/// Mutation goes through `place_stone` / `remove_stone` only; the game
/// controller validates occupancy before placing, and probing code must
/// pair every tentative placement with a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Get the occupant of a cell, if any
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[pos.to_index()]
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()].is_none()
    }

    /// Place a stone on an empty cell
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.to_index()] = Some(player);
    }

    /// Clear a cell
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = None;
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if no stone has been placed yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// All empty cells in scan order (y outer, x inner). Strategies that
    /// break ties by first-found rely on exactly this order.
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::new();
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(x, y);
                if self.is_empty(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// All occupied cells in scan order
    pub fn occupied_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::new();
        for y in 0..BOARD_SIZE as u8 {
            for x in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(x, y);
                if !self.is_empty(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
