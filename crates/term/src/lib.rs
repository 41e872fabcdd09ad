//! Terminal presentation layer.
//!
//! Views render into a plain [`FrameBuffer`] of styled cells instead of going
//! through a widget toolkit. The [`TerminalRenderer`] then flushes that buffer,
//! only rewriting the cells that changed since the previous frame.
//!
//! Board cells are drawn 2 columns wide so squares look square in most fonts.

pub mod buttons;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprite_view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use buttons::{Button, ButtonPad};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprite_view::SpriteView;
