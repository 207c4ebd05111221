//! Game controller: turns, move history, the undo budget, and win state
//!
//! The controller is synchronous and single-threaded. The frontend decides
//! when to call [`Game::run_automated_turn`]; delaying the call only delays
//! the reply, it never changes it.

use crate::board::{Board, Player, Pos};
use crate::engine::{CpuEngine, Difficulty};
use crate::error::GameError;
use crate::rules::{is_winning_placement, winning_line};

/// Number of undos granted per game.
pub const UNDO_BUDGET: u8 = 3;

/// One applied move, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub player: Player,
}

/// Whether the game is still running or decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Play passes to the other side.
    Continue,
    /// The stone just placed completed a five; the game is over.
    Win,
}

/// Full state of one game session.
///
/// Moves enter through [`Game::apply_human_move`] and
/// [`Game::run_automated_turn`]; both run the same validation and the same
/// win check, and every rejected call leaves the state exactly as it was.
/// The human always owns the first turn.
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    undos_left: u8,
    status: GameStatus,
    active: Player,
    difficulty: Difficulty,
    engine: CpuEngine,
}

impl Game {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            undos_left: UNDO_BUDGET,
            status: GameStatus::InProgress,
            active: Player::Human,
            difficulty,
            engine: CpuEngine::new(),
        }
    }

    /// Place a human stone at `pos`.
    pub fn apply_human_move(&mut self, pos: Pos) -> Result<TurnOutcome, GameError> {
        self.ensure_can_move(Player::Human)?;
        if !self.board.is_empty(pos) {
            return Err(GameError::OccupiedCell(pos));
        }
        Ok(self.commit_move(pos, Player::Human))
    }

    /// Let the CPU take its turn and report where it played.
    ///
    /// The difficulty is read at call time, so a change made through
    /// [`Game::set_difficulty`] after the human's move still shapes this
    /// reply.
    pub fn run_automated_turn(&mut self) -> Result<(Pos, TurnOutcome), GameError> {
        self.ensure_can_move(Player::Cpu)?;
        let pos = self.engine.select_move(&self.board, self.difficulty)?;
        let outcome = self.commit_move(pos, Player::Cpu);
        Ok((pos, outcome))
    }

    /// Take back the last two moves as a unit and hand the turn to the
    /// human.
    ///
    /// Fails with [`GameError::UndoUnavailable`] when the budget is spent,
    /// the game has been decided, or fewer than two moves are recorded.
    pub fn undo(&mut self) -> Result<(), GameError> {
        if self.undos_left == 0
            || matches!(self.status, GameStatus::Won(_))
            || self.history.len() < 2
        {
            return Err(GameError::UndoUnavailable);
        }

        for _ in 0..2 {
            if let Some(record) = self.history.pop() {
                self.board.remove_stone(record.pos);
            }
        }
        self.undos_left -= 1;
        self.active = Player::Human;
        Ok(())
    }

    /// Start over. The selected difficulty survives the reset.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.undos_left = UNDO_BUDGET;
        self.status = GameStatus::InProgress;
        self.active = Player::Human;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[inline]
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, pos: Pos) -> Option<Player> {
        self.board.get(pos)
    }

    #[inline]
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn undos_left(&self) -> u8 {
        self.undos_left
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|record| record.pos)
    }

    #[inline]
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// True when [`Game::undo`] would succeed.
    #[must_use]
    pub fn undo_available(&self) -> bool {
        self.undos_left > 0 && self.in_progress() && self.history.len() >= 2
    }

    /// Cells of the winning run, once the game has been decided.
    #[must_use]
    pub fn winning_run(&self) -> Option<Vec<Pos>> {
        match (self.status, self.history.last()) {
            (GameStatus::Won(winner), Some(record)) if record.player == winner => {
                winning_line(&self.board, record.pos, winner)
            }
            _ => None,
        }
    }

    fn ensure_can_move(&self, player: Player) -> Result<(), GameError> {
        if matches!(self.status, GameStatus::Won(_)) {
            return Err(GameError::GameAlreadyOver);
        }
        if self.active != player {
            return Err(GameError::NotYourTurn(player));
        }
        Ok(())
    }

    fn commit_move(&mut self, pos: Pos, player: Player) -> TurnOutcome {
        self.board.place_stone(pos, player);
        self.history.push(MoveRecord { pos, player });
        if is_winning_placement(&self.board, pos, player) {
            self.status = GameStatus::Won(player);
            TurnOutcome::Win
        } else {
            self.active = player.opponent();
            TurnOutcome::Continue
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a full human win against the `Smart` level.
    ///
    /// The human builds a row on y=10 while the CPU plays its deterministic
    /// center-bias replies; once the row becomes an open four the CPU blocks
    /// the left end, and the human completes the five on the right.
    fn play_to_human_win(game: &mut Game) {
        game.set_difficulty(Difficulty::Smart);
        for x in 3..7 {
            assert_eq!(
                game.apply_human_move(Pos::new(x, 10)),
                Ok(TurnOutcome::Continue)
            );
            let (_, outcome) = game.run_automated_turn().unwrap();
            assert_eq!(outcome, TurnOutcome::Continue);
        }
        assert_eq!(game.apply_human_move(Pos::new(7, 10)), Ok(TurnOutcome::Win));
    }

    // ---- initial state ----

    #[test]
    fn test_new_game_state() {
        let game = Game::new(Difficulty::Minimax);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.active_player(), Player::Human);
        assert_eq!(game.undos_left(), UNDO_BUDGET);
        assert_eq!(game.difficulty(), Difficulty::Minimax);
        assert!(game.moves().is_empty());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.cell(Pos::new(7, 7)), None);
    }

    // ---- move validation ----

    #[test]
    fn test_rejects_out_of_turn_moves() {
        let mut game = Game::new(Difficulty::Smart);
        assert_eq!(
            game.run_automated_turn(),
            Err(GameError::NotYourTurn(Player::Cpu))
        );

        game.apply_human_move(Pos::new(3, 3)).unwrap();
        assert_eq!(
            game.apply_human_move(Pos::new(4, 4)),
            Err(GameError::NotYourTurn(Player::Human))
        );
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = Game::new(Difficulty::Smart);
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        let (cpu_pos, _) = game.run_automated_turn().unwrap();

        assert_eq!(
            game.apply_human_move(Pos::new(7, 7)),
            Err(GameError::OccupiedCell(Pos::new(7, 7)))
        );
        assert_eq!(
            game.apply_human_move(cpu_pos),
            Err(GameError::OccupiedCell(cpu_pos))
        );
        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.active_player(), Player::Human);
    }

    #[test]
    fn test_rejects_moves_after_win() {
        let mut game = Game::new(Difficulty::Smart);
        play_to_human_win(&mut game);

        assert_eq!(
            game.apply_human_move(Pos::new(0, 0)),
            Err(GameError::GameAlreadyOver)
        );
        assert_eq!(game.run_automated_turn(), Err(GameError::GameAlreadyOver));
    }

    // ---- win transition ----

    #[test]
    fn test_human_win_is_detected() {
        let mut game = Game::new(Difficulty::Smart);
        play_to_human_win(&mut game);

        assert_eq!(game.status(), GameStatus::Won(Player::Human));
        assert!(!game.in_progress());

        let run = game.winning_run().unwrap();
        assert_eq!(run.len(), 5);
        for x in 3..8 {
            assert!(run.contains(&Pos::new(x, 10)), "missing ({x},10)");
        }
    }

    #[test]
    fn test_cpu_reply_is_recorded() {
        let mut game = Game::new(Difficulty::Smart);
        game.apply_human_move(Pos::new(3, 3)).unwrap();

        let (pos, outcome) = game.run_automated_turn().unwrap();
        assert_eq!(outcome, TurnOutcome::Continue);
        assert_eq!(game.cell(pos), Some(Player::Cpu));
        assert_eq!(game.last_move(), Some(pos));
        assert_eq!(game.active_player(), Player::Human);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_difficulty_switch_affects_next_reply() {
        let mut game = Game::new(Difficulty::Random);
        game.apply_human_move(Pos::new(3, 3)).unwrap();

        // The level set after the human's move must shape the reply: Smart
        // has no win or block here, so it takes the most central cell.
        game.set_difficulty(Difficulty::Smart);
        let (pos, _) = game.run_automated_turn().unwrap();
        assert_eq!(pos, Pos::new(7, 7));
    }

    // ---- undo ----

    #[test]
    fn test_undo_round_trip() {
        let mut game = Game::new(Difficulty::Smart);
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        let (cpu_pos, _) = game.run_automated_turn().unwrap();
        let snapshot = game.board.clone();

        game.undo().unwrap();
        assert_eq!(game.undos_left(), UNDO_BUDGET - 1);
        assert!(game.moves().is_empty());
        assert_eq!(game.cell(Pos::new(7, 7)), None);
        assert_eq!(game.cell(cpu_pos), None);
        assert_eq!(game.active_player(), Player::Human);

        // Replaying the same move draws the same deterministic reply, so
        // the position ends up exactly where it was.
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        game.run_automated_turn().unwrap();
        assert_eq!(game.board, snapshot);
    }

    #[test]
    fn test_double_undo_clears_four_cells() {
        let mut game = Game::new(Difficulty::Smart);
        game.apply_human_move(Pos::new(3, 3)).unwrap();
        game.run_automated_turn().unwrap();
        game.apply_human_move(Pos::new(3, 4)).unwrap();
        game.run_automated_turn().unwrap();
        assert_eq!(game.moves().len(), 4);

        game.undo().unwrap();
        game.undo().unwrap();
        assert_eq!(game.undos_left(), UNDO_BUDGET - 2);
        assert!(game.moves().is_empty());
        assert_eq!(game.board, Board::new());
    }

    #[test]
    fn test_undo_requires_two_moves() {
        let mut game = Game::new(Difficulty::Smart);
        assert_eq!(game.undo(), Err(GameError::UndoUnavailable));

        game.apply_human_move(Pos::new(3, 3)).unwrap();
        assert_eq!(game.undo(), Err(GameError::UndoUnavailable));
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.undos_left(), UNDO_BUDGET);
    }

    #[test]
    fn test_undo_budget_runs_out() {
        let mut game = Game::new(Difficulty::Smart);
        for _ in 0..UNDO_BUDGET {
            game.apply_human_move(Pos::new(7, 7)).unwrap();
            game.run_automated_turn().unwrap();
            game.undo().unwrap();
        }
        assert_eq!(game.undos_left(), 0);

        game.apply_human_move(Pos::new(7, 7)).unwrap();
        game.run_automated_turn().unwrap();
        let snapshot = game.board.clone();
        assert!(!game.undo_available());
        assert_eq!(game.undo(), Err(GameError::UndoUnavailable));
        assert_eq!(game.board, snapshot);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn test_undo_after_win_fails() {
        let mut game = Game::new(Difficulty::Smart);
        play_to_human_win(&mut game);

        assert!(!game.undo_available());
        assert_eq!(game.undo(), Err(GameError::UndoUnavailable));
        assert_eq!(game.undos_left(), UNDO_BUDGET);
    }

    #[test]
    fn test_undo_hands_turn_back_to_human() {
        let mut game = Game::new(Difficulty::Smart);
        game.apply_human_move(Pos::new(3, 3)).unwrap();
        game.run_automated_turn().unwrap();
        game.apply_human_move(Pos::new(3, 4)).unwrap();
        assert_eq!(game.active_player(), Player::Cpu);

        // Undo from mid-exchange removes the dangling human move and the
        // CPU's previous reply, and the human moves again.
        game.undo().unwrap();
        assert_eq!(game.active_player(), Player::Human);
        assert_eq!(game.moves().len(), 1);
    }

    // ---- reset ----

    #[test]
    fn test_reset_starts_over_but_keeps_difficulty() {
        let mut game = Game::new(Difficulty::Pattern);
        game.apply_human_move(Pos::new(7, 7)).unwrap();
        game.run_automated_turn().unwrap();
        game.undo().unwrap();

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.active_player(), Player::Human);
        assert_eq!(game.undos_left(), UNDO_BUDGET);
        assert!(game.moves().is_empty());
        assert_eq!(game.board, Board::new());
        assert_eq!(game.difficulty(), Difficulty::Pattern);
    }
}
