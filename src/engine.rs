//! CPU opponent: six selectable strategies behind one dispatch point
//!
//! Each difficulty level is a self-contained move picker over the current
//! position. The levels, weakest first:
//!
//! 1. **Random**: any empty cell, uniformly
//! 2. **Defensive**: block an immediate human five, else random
//! 3. **Smart**: complete an own five, else block, else play toward the center
//! 4. **Minimax**: fixed-depth search over cells near the existing stones
//! 5. **Positional**: directional placement score per empty cell
//! 6. **Pattern**: line-window pattern table per empty cell
//!
//! Apart from the two random-backed levels every strategy is deterministic:
//! candidate cells are visited in scan order (top row first, left to right)
//! and only a strictly better score displaces the current pick, so the same
//! position always yields the same move.

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Player, Pos, CENTER};
use crate::error::GameError;
use crate::eval::{evaluate_placement, line_score};
use crate::rules::is_winning_placement;
use crate::search::{self, SEARCH_DEPTH};

/// Selectable strength of the automated opponent.
///
/// The controller reads the active level fresh on every CPU turn, so
/// switching it mid-game affects the very next reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    Random,
    /// Blocks an immediate human five, otherwise random.
    Defensive,
    /// Takes an own five, blocks the human's, otherwise plays centrally.
    Smart,
    /// Fixed-depth minimax over the stone neighborhood.
    Minimax,
    /// Directional placement score per empty cell.
    Positional,
    /// Line-window pattern table per empty cell.
    Pattern,
}

impl Difficulty {
    /// All levels in menu order.
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Random,
        Difficulty::Defensive,
        Difficulty::Smart,
        Difficulty::Minimax,
        Difficulty::Positional,
        Difficulty::Pattern,
    ];

    /// Name shown in the difficulty selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Random => "Random",
            Difficulty::Defensive => "Defensive",
            Difficulty::Smart => "Smart",
            Difficulty::Minimax => "Minimax",
            Difficulty::Positional => "Positional",
            Difficulty::Pattern => "Pattern",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Smart
    }
}

/// Move picker for the CPU side.
///
/// Owns the random number generator used by the `Random` and `Defensive`
/// levels; the deterministic levels never touch it. Strategies that probe
/// the position work on a scratch copy, so the caller's board is never
/// modified.
///
/// # Example
///
/// ```
/// use gomoku_duel::{Board, CpuEngine, Difficulty};
///
/// let mut engine = CpuEngine::new();
/// let board = Board::new();
/// let reply = engine.select_move(&board, Difficulty::Smart);
/// assert!(reply.is_ok());
/// ```
pub struct CpuEngine {
    rng: StdRng,
}

impl CpuEngine {
    /// Create an engine seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a fixed seed, for reproducible random play.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick the CPU's next move at the given difficulty.
    ///
    /// Returns [`GameError::NoLegalMove`] when no empty cell is left.
    pub fn select_move(&mut self, board: &Board, difficulty: Difficulty) -> Result<Pos, GameError> {
        if board.is_full() {
            return Err(GameError::NoLegalMove);
        }

        let mut scratch = board.clone();
        let pos = match difficulty {
            Difficulty::Random => self.random_move(&scratch),
            Difficulty::Defensive => self.defensive_move(&mut scratch),
            Difficulty::Smart => self.smart_move(&mut scratch),
            Difficulty::Minimax => self.minimax_move(&mut scratch),
            Difficulty::Positional => self.positional_move(&scratch),
            Difficulty::Pattern => self.pattern_move(&mut scratch),
        };
        Ok(pos)
    }

    /// Uniformly random empty cell.
    fn random_move(&mut self, board: &Board) -> Pos {
        let cells = board.empty_cells();
        debug_assert!(!cells.is_empty());
        cells[self.rng.random_range(0..cells.len())]
    }

    /// Block the human's immediate five if one exists, else play randomly.
    fn defensive_move(&mut self, board: &mut Board) -> Pos {
        if let Some(block) = self.find_winning_move(board, Player::Human) {
            return block;
        }
        self.random_move(board)
    }

    /// Win now if possible, block the human's win otherwise, and fall back
    /// to the most central empty cell.
    fn smart_move(&self, board: &mut Board) -> Pos {
        if let Some(win) = self.find_winning_move(board, Player::Cpu) {
            return win;
        }
        if let Some(block) = self.find_winning_move(board, Player::Human) {
            return block;
        }
        self.center_bias_move(board)
    }

    /// Depth-limited minimax; the center fallback only fires on an empty
    /// board, where the search has no candidate cells.
    fn minimax_move(&self, board: &mut Board) -> Pos {
        match search::best_move(board, SEARCH_DEPTH) {
            Some(pos) => pos,
            None => self.center_bias_move(board),
        }
    }

    /// Score every empty cell by its directional placement value for both
    /// sides, weighting own lines slightly above the human's and nudging
    /// the pick toward the center on quiet boards.
    fn positional_move(&self, board: &Board) -> Pos {
        debug_assert!(!board.is_full());
        let mut best_pos = Pos::new(CENTER, CENTER);
        let mut best_score = f64::NEG_INFINITY;
        for pos in board.empty_cells() {
            let attack = evaluate_placement(board, pos, Player::Cpu) as f64;
            let defense = evaluate_placement(board, pos, Player::Human) as f64;
            let spread = (i32::from(pos.x) - i32::from(CENTER)).abs()
                + (i32::from(pos.y) - i32::from(CENTER)).abs();
            let score = 1.1 * attack + defense - 0.1 * f64::from(spread);
            if score > best_score {
                best_score = score;
                best_pos = pos;
            }
        }
        best_pos
    }

    /// Try a CPU stone on every empty cell and keep the one whose line
    /// windows score highest against the pattern table. Cells that match
    /// nothing stay at zero, and if no cell scores the engine falls back
    /// to the center.
    fn pattern_move(&self, board: &mut Board) -> Pos {
        let mut best: Option<(i64, Pos)> = None;
        for pos in board.empty_cells() {
            board.place_stone(pos, Player::Cpu);
            let score = line_score(board, pos);
            board.remove_stone(pos);
            if score <= 0 {
                continue;
            }
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, pos)),
            }
        }
        match best {
            Some((_, pos)) => pos,
            None => self.center_bias_move(board),
        }
    }

    /// First empty cell, in scan order, that would complete a five for
    /// `player`. The probe stone is removed before returning.
    fn find_winning_move(&self, board: &mut Board, player: Player) -> Option<Pos> {
        for pos in board.empty_cells() {
            board.place_stone(pos, player);
            let wins = is_winning_placement(board, pos, player);
            board.remove_stone(pos);
            if wins {
                return Some(pos);
            }
        }
        None
    }

    /// Empty cell with the smallest Manhattan distance to the center.
    /// Only a strictly closer cell displaces the pick, so ties resolve
    /// in scan order.
    fn center_bias_move(&self, board: &Board) -> Pos {
        debug_assert!(!board.is_full());
        let mut best_pos = Pos::new(CENTER, CENTER);
        let mut best_dist = i32::MAX;
        for pos in board.empty_cells() {
            let dist = (i32::from(pos.x) - i32::from(CENTER)).abs()
                + (i32::from(pos.y) - i32::from(CENTER)).abs();
            if dist < best_dist {
                best_dist = dist;
                best_pos = pos;
            }
        }
        best_pos
    }
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new()
    }
}
