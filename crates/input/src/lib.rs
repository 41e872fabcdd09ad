//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`],
//! sprite demo directions, and the quit signal. Nothing here repeats keys on
//! its own: each press (or host key-repeat) event yields at most one action.

pub mod map;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use map::{accepts_key, direction_for_key, handle_key_event, mouse_press, should_quit};
