//! On-screen buttons for mouse (or touch-emulating terminal) play.
//!
//! The pad is a small grid of labelled boxes. Clicking a box produces the same
//! [`GameAction`] as the matching key, so the game itself never knows where an
//! action came from.
//!
//! ```text
//! [ ◀ ][ ▼ ][ ▶ ]
//! [ ↻ ][DROP]
//! [PAUSE][NEW]
//! ```

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GameAction;

/// Width of one button in terminal columns.
pub const BUTTON_W: u16 = 6;

/// Columns between buttons.
const GAP_X: u16 = 1;

/// Terminal rows per button row (button plus a spacer).
const ROW_PITCH: u16 = 2;

/// (action, label, column, row) in button-grid units.
static LAYOUT: [(GameAction, &str, u16, u16); 7] = [
    (GameAction::MoveLeft, "◀", 0, 0),
    (GameAction::SoftDrop, "▼", 1, 0),
    (GameAction::MoveRight, "▶", 2, 0),
    (GameAction::Rotate, "↻", 0, 1),
    (GameAction::HardDrop, "DROP", 1, 1),
    (GameAction::Pause, "PAUSE", 0, 2),
    (GameAction::Restart, "NEW", 1, 2),
];

/// Total pad width in terminal columns.
pub const PAD_W: u16 = 3 * BUTTON_W + 2 * GAP_X;

/// Total pad height in terminal rows.
pub const PAD_H: u16 = 2 * ROW_PITCH + 1;

/// A single on-screen button, in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub action: GameAction,
    pub label: &'static str,
    pub x: u16,
    pub y: u16,
    pub w: u16,
}

impl Button {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        row == self.y && col >= self.x && col < self.x + self.w
    }
}

/// Placed set of on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPad {
    /// Top-left corner, `None` when the pad does not fit on screen.
    origin: Option<(u16, u16)>,
}

impl ButtonPad {
    /// A pad that is not shown.
    pub const fn hidden() -> Self {
        Self { origin: None }
    }

    /// Place the pad at (x, y) if it fits inside `avail_w` x `avail_h`.
    pub fn layout(x: u16, y: u16, avail_w: u16, avail_h: u16) -> Self {
        if avail_w < PAD_W || avail_h < PAD_H {
            return Self::hidden();
        }
        Self {
            origin: Some((x, y)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.origin.is_some()
    }

    /// Buttons in layout order (empty when hidden).
    pub fn buttons(&self) -> impl Iterator<Item = Button> {
        let origin = self.origin;
        LAYOUT
            .iter()
            .filter_map(move |&(action, label, col, row)| {
                let (x0, y0) = origin?;
                Some(Button {
                    action,
                    label,
                    x: x0 + col * (BUTTON_W + GAP_X),
                    y: y0 + row * ROW_PITCH,
                    w: BUTTON_W,
                })
            })
    }

    /// Action of the button under (col, row), if any.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<GameAction> {
        self.buttons()
            .find(|button| button.contains(col, row))
            .map(|button| button.action)
    }

    /// Draw every button, dimming the ones `enabled` rejects.
    pub fn draw(&self, fb: &mut FrameBuffer, enabled: impl Fn(GameAction) -> bool) {
        let on = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 60, 90)).bold();
        let off = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(40, 40, 50)).dim();

        for button in self.buttons() {
            let style = if enabled(button.action) { on } else { off };
            fb.fill_rect(button.x, button.y, button.w, 1, ' ', style);
            let label_w = button.label.chars().count() as u16;
            let lx = button.x + button.w.saturating_sub(label_w) / 2;
            fb.put_str(lx, button.y, button.label, style);
        }
    }
}
