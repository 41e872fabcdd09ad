//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on the terminal, so it is:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule can be exercised headlessly
//! - **Portable**: Any front end can drive it with elapsed time and actions
//!
//! # Module Structure
//!
//! - [`catalog`]: 5x5 rotation masks for the seven piece kinds
//! - [`board`]: 10x20 grid with collision queries and line clearing
//! - [`piece`]: The falling piece and its atomic move/rotate/drop operations
//! - [`rng`]: Seedable uniform piece generation
//! - [`scoring`]: Line clear points, leveling and gravity speed
//! - [`game_state`]: Running / Paused / GameOver state machine
//! - [`snapshot`]: Copyable per-frame view for rendering
//! - [`sprite`]: Logic of the sprite movement demo
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece is an independent draw over all kinds
//! - **Simple rotation**: one direction, no wall kicks; blocked rotations fail
//! - **Immediate lock**: a blocked gravity step or a hard drop locks at once
//! - **Scoring**: 100/300/500/800 times level for 1/2/3/4+ rows
//! - **Leveling**: one level per 10 lines, starting at level 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.board().filled_count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The piece falls one row whenever the accumulated time
//! reaches [`scoring::fall_interval_ms`] for the current level.

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod sprite;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ColorGrid};
pub use catalog::{mask, mask_cells, rotation_count, ShapeMask};
pub use game_state::{GameState, LockEvent};
pub use piece::{PieceCells, Tetromino};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{fall_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
pub use sprite::{Direction, SpriteField};
