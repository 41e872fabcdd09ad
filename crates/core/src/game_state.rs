//! Game state module - manages the complete game state
//!
//! This module ties together the board, the falling and next pieces, the piece
//! generator and scoring. It owns gravity timing, input actions, locking,
//! line clears and the Running / Paused / GameOver lifecycle.
//!
//! Nothing here touches the terminal: a host loop feeds [`GameState::tick`]
//! with elapsed time and [`GameState::apply_action`] with input, then draws a
//! [`GameSnapshot`].

use log::{debug, info};

use crate::board::Board;
use crate::piece::Tetromino;
use crate::rng::PieceGenerator;
use crate::scoring::{fall_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Phase, PieceKind, START_LEVEL};

/// Outcome of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    /// The piece promoted after this lock could not spawn.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    next: Tetromino,
    generator: PieceGenerator,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer_ms: u32,
    /// Last lock event (consumed by the host).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new running game on an empty board
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game starting from a prepared board.
    ///
    /// If the first piece cannot spawn on `board`, the game starts over.
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self::from_generator(PieceGenerator::new(seed), board)
    }

    fn from_generator(mut generator: PieceGenerator, board: Board) -> Self {
        let active = generator.next_piece();
        let next = generator.next_piece();
        let phase = if active.is_valid(&board) {
            Phase::Running
        } else {
            Phase::GameOver
        };

        Self {
            board,
            active,
            next,
            generator,
            phase,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            fall_timer_ms: 0,
            last_event: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Time accumulated towards the next gravity step
    pub fn fall_timer_ms(&self) -> u32 {
        self.fall_timer_ms
    }

    /// Current gravity interval based on level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        // The falling piece is hidden under the pause and game over overlays.
        out.active = (self.phase == Phase::Running).then_some(self.active);
        out.next = self.next.kind;
        out.phase = self.phase;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Main game tick - advance the fall timer and apply gravity.
    ///
    /// Returns true when a gravity step happened (a one-row descent or a lock).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms() {
            return false;
        }

        if self.active.is_grounded(&self.board) {
            self.lock_active();
        } else {
            self.active.try_move(&self.board, 0, 1);
        }
        self.fall_timer_ms = 0;
        true
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the game. Piece actions are ignored
    /// unless the game is running; `Pause` is ignored after game over and
    /// `Restart` is only accepted after game over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match self.phase {
            Phase::Running => {}
            Phase::Paused => {
                return match action {
                    GameAction::Pause => self.toggle_pause(),
                    _ => false,
                };
            }
            Phase::GameOver => {
                return match action {
                    GameAction::Restart => {
                        self.restart();
                        true
                    }
                    _ => false,
                };
            }
        }

        match action {
            GameAction::MoveLeft => self.active.try_move(&self.board, -1, 0),
            GameAction::MoveRight => self.active.try_move(&self.board, 1, 0),
            GameAction::SoftDrop => self.active.try_move(&self.board, 0, 1),
            GameAction::Rotate => self.active.try_rotate(&self.board),
            GameAction::HardDrop => {
                let distance = self.active.hard_drop(&self.board);
                debug!("hard drop {:?} by {} rows", self.active.kind, distance);
                self.lock_active();
                true
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => false,
        }
    }

    fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => return false,
        };
        info!("game {}", self.phase.as_str());
        true
    }

    /// Lock the active piece, clear rows, score, and bring in the next piece.
    fn lock_active(&mut self) {
        let locked = self.active;
        self.board.lock(&locked);

        let full = self.board.full_rows();
        let cleared = self.board.clear_full_rows();
        let points = line_clear_score(cleared, self.level);
        if cleared > 0 {
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(cleared as u32);
            self.level = level_for_lines(self.lines);
            debug!(
                "cleared rows {:?} for {} points (lines {}, level {})",
                full.as_slice(),
                points,
                self.lines,
                self.level
            );
        }

        let fresh = self.generator.next_piece();
        self.active = std::mem::replace(&mut self.next, fresh);
        self.fall_timer_ms = 0;

        let game_over = !self.active.is_valid(&self.board);
        if game_over {
            self.phase = Phase::GameOver;
            info!(
                "game over: score {}, lines {}, level {}",
                self.score, self.lines, self.level
            );
        }

        self.last_event = Some(LockEvent {
            kind: locked.kind,
            lines_cleared: cleared as u32,
            points,
            game_over,
        });
    }

    /// Reset board, score and pieces. The piece stream continues.
    fn restart(&mut self) {
        let generator = self.generator.clone();
        *self = Self::from_generator(generator, Board::new());
        info!("game restarted");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    fn state_with_active(piece: Tetromino) -> GameState {
        let mut state = GameState::new(12345);
        state.active = piece;
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lines, 0);
        assert_eq!(state.fall_timer_ms, 0);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.active, Tetromino::spawn(state.active.kind));
        assert_eq!(state.next, Tetromino::spawn(state.next.kind));
    }

    #[test]
    fn test_tick_below_interval_only_accumulates() {
        let mut state = GameState::new(12345);
        let y = state.active.y;

        assert!(!state.tick(499));
        assert_eq!(state.active.y, y);
        assert_eq!(state.fall_timer_ms, 499);
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = GameState::new(12345);
        let y = state.active.y;

        assert!(state.tick(500));
        assert_eq!(state.active.y, y + 1);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn test_tick_accumulates_small_frames() {
        let mut state = GameState::new(12345);
        let y = state.active.y;

        for _ in 0..31 {
            state.tick(16);
        }
        assert_eq!(state.active.y, y);
        state.tick(16);
        assert_eq!(state.active.y, y + 1);
    }

    #[test]
    fn test_blocked_gravity_locks_and_promotes_next() {
        let mut state = state_with_active(Tetromino {
            y: 16,
            ..Tetromino::spawn(PieceKind::O)
        });
        let next = state.next;

        assert!(state.tick(500));

        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.board.get(5, 18), Some(Some(PieceKind::O)));
        assert_eq!(state.active, next);
        assert_eq!(state.fall_timer_ms, 0);
        let event = state.take_last_event().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.game_over);
    }

    #[test]
    fn test_hard_drop_locks_immediately() {
        let mut state = state_with_active(Tetromino::spawn(PieceKind::O));
        state.fall_timer_ms = 200;
        let next = state.next;

        assert!(state.apply_action(GameAction::HardDrop));

        assert_eq!(state.board.filled_count(), 4);
        assert_eq!(state.board.get(4, 19), Some(Some(PieceKind::O)));
        assert_eq!(state.active, next);
        assert_eq!(state.fall_timer_ms, 0);
    }

    #[test]
    fn test_soft_drop_does_not_lock() {
        let mut state = state_with_active(Tetromino {
            y: 16,
            ..Tetromino::spawn(PieceKind::O)
        });
        state.fall_timer_ms = 120;

        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active.y, 16);
        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.fall_timer_ms, 120);
    }

    #[test]
    fn test_single_line_scores_100_at_level_1() {
        let mut state = state_with_active(Tetromino::spawn(PieceKind::I));
        // I spawns horizontally over columns 3..=6.
        let row = BOARD_HEIGHT as i8 - 1;
        for x in [0, 1, 2, 7, 8, 9] {
            state.board.set(x, row, Some(PieceKind::Z));
        }

        assert!(state.apply_action(GameAction::HardDrop));

        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 1);
        assert_eq!(state.level, 1);
        assert!((0..BOARD_WIDTH as i8).all(|x| state.board.get(x, row) == Some(None)));
        let event = state.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.points, 100);
    }

    #[test]
    fn test_four_lines_score_2400_at_level_3() {
        // Vertical I: mask column 2, so x = 3 fills board column 5.
        let mut state = state_with_active(Tetromino {
            kind: PieceKind::I,
            rotation: 1,
            x: 3,
            y: 0,
        });
        state.lines = 20;
        state.level = 3;
        for y in 16..20 {
            state.board.fill_row(y, PieceKind::L, Some(5));
        }

        assert!(state.apply_action(GameAction::HardDrop));

        assert_eq!(state.score, 2400);
        assert_eq!(state.lines, 24);
        assert_eq!(state.level, 3);
        assert_eq!(state.board.filled_count(), 0);
    }

    #[test]
    fn test_level_uses_pre_clear_level_for_points() {
        let mut state = state_with_active(Tetromino::spawn(PieceKind::I));
        state.lines = 9;
        let row = BOARD_HEIGHT as i8 - 1;
        for x in [0, 1, 2, 7, 8, 9] {
            state.board.set(x, row, Some(PieceKind::Z));
        }

        state.apply_action(GameAction::HardDrop);

        assert_eq!(state.score, 100);
        assert_eq!(state.lines, 10);
        assert_eq!(state.level, 2);
        assert_eq!(state.fall_interval_ms(), 450);
    }

    #[test]
    fn test_game_over_when_promoted_piece_is_blocked() {
        // Block row 2 and 3 in columns 4..=7: every spawn state touches one of them.
        let mut state = state_with_active(Tetromino {
            x: -1,
            ..Tetromino::spawn(PieceKind::O)
        });
        for y in 2..=3 {
            for x in 4..=7 {
                state.board.set(x, y, Some(PieceKind::T));
            }
        }
        assert!(state.active.is_valid(&state.board));

        assert!(state.apply_action(GameAction::HardDrop));

        assert_eq!(state.phase, Phase::GameOver);
        assert!(state.take_last_event().unwrap().game_over);
    }

    #[test]
    fn test_game_over_ignores_everything_but_restart() {
        let mut state = GameState::new(12345);
        state.phase = Phase::GameOver;
        let before = state.active;

        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(!state.apply_action(GameAction::Pause));
        assert!(!state.tick(10_000));
        assert_eq!(state.active, before);
        assert_eq!(state.phase, Phase::GameOver);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(12345);
        state.board.fill_row(19, PieceKind::S, Some(0));
        state.score = 4200;
        state.lines = 33;
        state.level = 4;
        state.phase = Phase::GameOver;

        state.apply_action(GameAction::Restart);

        assert_eq!(state.board.filled_count(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.phase, Phase::Running);
        assert!(state.active.is_valid(&state.board));
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = GameState::new(12345);
        state.score = 300;
        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.score, 300);
    }

    #[test]
    fn test_pause_toggles_and_freezes() {
        let mut state = GameState::new(12345);
        let y = state.active.y;

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase, Phase::Paused);

        assert!(!state.tick(5_000));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::Rotate));
        assert_eq!(state.active.y, y);

        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_snapshot_hides_active_unless_running() {
        let mut state = GameState::new(12345);
        assert_eq!(state.snapshot().active, Some(state.active));

        state.apply_action(GameAction::Pause);
        let snap = state.snapshot();
        assert_eq!(snap.active, None);
        assert_eq!(snap.phase, Phase::Paused);
    }

    #[test]
    fn test_snapshot_exports_board_and_counters() {
        let mut state = GameState::new(12345);
        state.board.set(0, 19, Some(PieceKind::L));
        state.score = 1234;

        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], PieceKind::L.color_index());
        assert_eq!(snap.score, 1234);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.next, state.next.kind);
        assert_eq!(snap.fall_interval_ms, 500);
    }
}
