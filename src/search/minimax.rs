//! Fixed-depth minimax over a neighborhood-restricted move set
//!
//! The tree alternates CPU placements (maximizing) and human placements
//! (minimizing) down to a fixed depth, where the whole-board line score
//! is read. Considered moves are the empty cells within two steps of an
//! existing stone. No pruning beyond that restriction and no caching;
//! ties at the root go to the first candidate.

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::eval::evaluate_board;

/// Search depth of the minimax strategy: one CPU move and one human reply
pub const SEARCH_DEPTH: u32 = 2;

/// Chebyshev radius of the candidate neighborhood around each stone
const CANDIDATE_RADIUS: i32 = 2;

/// Empty cells within the candidate radius of any stone, deduplicated.
///
/// The order is deterministic: occupied cells are visited in scan order
/// and each contributes its neighborhood row by row. An empty board
/// yields an empty list; the engine plays the center instead.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let mut seen = [false; TOTAL_CELLS];
    let mut candidates = Vec::new();
    for anchor in board.occupied_cells() {
        for dy in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dx in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let x = anchor.x as i32 + dx;
                let y = anchor.y as i32 + dy;
                if !Pos::is_valid(x, y) {
                    continue;
                }
                let pos = Pos::new(x as u8, y as u8);
                if !board.is_empty(pos) || seen[pos.to_index()] {
                    continue;
                }
                seen[pos.to_index()] = true;
                candidates.push(pos);
            }
        }
    }
    candidates
}

/// Pick the CPU move by minimax over the candidate set.
///
/// Tries each candidate as a CPU placement, values it with a minimizing
/// reply search, and keeps the first strict maximum. The root compares
/// child values only; leaf evaluation happens at depth 0. Returns `None`
/// when there are no candidates. `depth` must be at least 1.
pub fn best_move(board: &mut Board, depth: u32) -> Option<Pos> {
    debug_assert!(depth >= 1);
    let mut best: Option<(i64, Pos)> = None;
    for pos in candidate_moves(board) {
        board.place_stone(pos, Player::Cpu);
        let score = minimax(board, depth - 1, false);
        board.remove_stone(pos);
        match best {
            Some((best_score, _)) if score <= best_score => {}
            _ => best = Some((score, pos)),
        }
    }
    best.map(|(_, pos)| pos)
}

/// Minimax value of the current position for the side to move.
///
/// Maximizing levels place CPU stones, minimizing levels human stones,
/// with candidates recomputed against the board at each node. A node
/// with no candidates reports the worst value for its side, so sibling
/// scores always beat it.
fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> i64 {
    if depth == 0 {
        return evaluate_board(board);
    }
    if maximizing {
        let mut best = i64::MIN;
        for pos in candidate_moves(board) {
            board.place_stone(pos, Player::Cpu);
            let score = minimax(board, depth - 1, false);
            board.remove_stone(pos);
            best = best.max(score);
        }
        best
    } else {
        let mut best = i64::MAX;
        for pos in candidate_moves(board) {
            board.place_stone(pos, Player::Human);
            let score = minimax(board, depth - 1, true);
            board.remove_stone(pos);
            best = best.min(score);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_empty_board() {
        let board = Board::new();
        assert!(candidate_moves(&board).is_empty());
    }

    #[test]
    fn test_candidates_around_single_stone() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Player::Cpu);

        let candidates = candidate_moves(&board);
        // Full 5x5 neighborhood minus the stone itself
        assert_eq!(candidates.len(), 24);
        // Row-by-row neighborhood order starts at the top-left corner
        assert_eq!(candidates[0], Pos::new(5, 5));

        for pos in &candidates {
            let dx = (pos.x as i32 - 7).abs();
            let dy = (pos.y as i32 - 7).abs();
            assert!(dx <= 2 && dy <= 2, "{pos} is outside the neighborhood");
            assert!(board.is_empty(*pos));
        }
    }

    #[test]
    fn test_candidates_deduplicate_overlap() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Player::Cpu);
        board.place_stone(Pos::new(8, 7), Player::Human);

        let candidates = candidate_moves(&board);
        // Union of the two 5x5 neighborhoods (5x6 cells) minus both stones
        assert_eq!(candidates.len(), 28);

        let mut unique = candidates.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), candidates.len(), "duplicates in candidate list");
    }

    #[test]
    fn test_candidates_clipped_at_corner() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Player::Human);

        let candidates = candidate_moves(&board);
        // Only the in-bounds 3x3 corner of the neighborhood remains
        assert_eq!(candidates.len(), 8);
    }

    #[test]
    fn test_candidates_follow_anchor_order() {
        let mut board = Board::new();
        board.place_stone(Pos::new(10, 10), Player::Cpu);
        board.place_stone(Pos::new(3, 3), Player::Human);

        let candidates = candidate_moves(&board);
        // (3,3) is scanned first, so its neighborhood leads the list
        assert_eq!(candidates.len(), 48);
        assert_eq!(candidates[0], Pos::new(1, 1));
        assert_eq!(candidates[24], Pos::new(8, 8));
    }

    #[test]
    fn test_best_move_empty_board() {
        let mut board = Board::new();
        assert_eq!(best_move(&mut board, SEARCH_DEPTH), None);
    }

    #[test]
    fn test_best_move_stays_near_stones() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Player::Cpu);

        let pos = best_move(&mut board, SEARCH_DEPTH).unwrap();
        let dx = (pos.x as i32 - 7).abs();
        let dy = (pos.y as i32 - 7).abs();
        assert!(dx <= 2 && dy <= 2, "{pos} left the candidate neighborhood");
    }

    #[test]
    fn test_best_move_completes_five() {
        let mut board = Board::new();
        // CPU four blocked on the left; the only completion is (7,7)
        board.place_stone(Pos::new(2, 7), Player::Human);
        for i in 3..7 {
            board.place_stone(Pos::new(i, 7), Player::Cpu);
        }

        assert_eq!(best_move(&mut board, SEARCH_DEPTH), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_best_move_blocks_closed_four() {
        let mut board = Board::new();
        // Human four blocked on the left; letting (7,7) go loses
        board.place_stone(Pos::new(2, 7), Player::Cpu);
        for i in 3..7 {
            board.place_stone(Pos::new(i, 7), Player::Human);
        }

        assert_eq!(best_move(&mut board, SEARCH_DEPTH), Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_best_move_reverts_probes() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Player::Cpu);
        board.place_stone(Pos::new(8, 8), Player::Human);
        let snapshot = board.clone();

        let _ = best_move(&mut board, SEARCH_DEPTH);
        assert_eq!(board, snapshot, "search must leave the board untouched");
    }
}
