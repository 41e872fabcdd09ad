//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::buttons::{ButtonPad, PAD_W};
use crate::core::{mask, mask_cells, GameSnapshot, Tetromino};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameAction, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Panel rows, relative to the top of the board frame.
const ROW_SCORE: u16 = 0;
const ROW_LEVEL: u16 = 3;
const ROW_LINES: u16 = 6;
const ROW_NEXT: u16 = 9;
const ROW_HELP: u16 = 13;
const ROW_BUTTONS: u16 = 15;

/// Narrowest side panel that is drawn at all.
const MIN_PANEL_W: u16 = 12;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Screen placement of the board frame and side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    /// Left column and width of the side panel, if it fits.
    panel: Option<(u16, u16)>,
}

/// A lightweight terminal renderer for the falling-block game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = (BOARD_HEIGHT as u16) * self.cell_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        let panel = (panel_x < viewport.width)
            .then(|| (panel_x, viewport.width - panel_x))
            .filter(|&(_, w)| w >= MIN_PANEL_W);

        Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            panel,
        }
    }

    /// On-screen buttons for this viewport, placed in the side panel.
    ///
    /// Uses the same geometry as [`GameView::render_into`], so a click
    /// position read from the terminal can be hit-tested directly.
    pub fn button_pad(&self, viewport: Viewport) -> ButtonPad {
        let layout = self.layout(viewport);
        match layout.panel {
            Some((panel_x, panel_w)) => {
                let y = layout.start_y.saturating_add(ROW_BUTTONS);
                ButtonPad::layout(panel_x, y, panel_w, viewport.height.saturating_sub(y))
            }
            None => ButtonPad::hidden(),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let Layout {
            start_x,
            start_y,
            frame_w,
            frame_h,
            ..
        } = layout;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        fb.draw_border(start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let value = snap.board[y as usize][x as usize];
                match PieceKind::from_color_index(value) {
                    Some(kind) => self.draw_board_cell(fb, &layout, x, y, kind),
                    None => self.draw_empty_cell(fb, &layout, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            self.draw_piece(fb, &layout, &active);
        }

        self.draw_side_panel(fb, snap, &layout, viewport);

        match snap.phase {
            Phase::Paused => {
                self.draw_overlay(fb, &layout, "PAUSED", "Press P to continue");
            }
            Phase::GameOver => {
                self.draw_overlay(fb, &layout, "GAME OVER", "Press R to restart");
            }
            Phase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, layout: &Layout, piece: &Tetromino) {
        for (x, y) in piece.cells() {
            // Cells above the top edge are not drawn.
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_board_cell(fb, layout, x as u16, y as u16, piece.kind);
            }
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        self.fill_cell_rect(fb, layout, x, y, '·', style);
    }

    fn draw_board_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(kind.color(), BOARD_BG).bold();
        self.fill_cell_rect(fb, layout, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cell_x * self.cell_w;
        let py = layout.start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        layout: &Layout,
        viewport: Viewport,
    ) {
        let Some((panel_x, panel_w)) = layout.panel else {
            return;
        };

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let y0 = layout.start_y;

        for (row, name, number) in [
            (ROW_SCORE, "SCORE", snap.score),
            (ROW_LEVEL, "LEVEL", snap.level),
            (ROW_LINES, "LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y0 + row, name, label);
            fb.put_u32(panel_x, y0 + row + 1, number, value);
        }

        fb.put_str(panel_x, y0 + ROW_NEXT, "NEXT", label);
        self.draw_preview(fb, snap.next, panel_x, y0 + ROW_NEXT + 1);

        let help = CellStyle { dim: true, ..value };
        fb.put_str(panel_x, y0 + ROW_HELP, "P pause  Q quit", help);

        if panel_w >= PAD_W {
            let playable = snap.playable();
            let phase = snap.phase;
            self.button_pad(viewport).draw(fb, |action| match action {
                GameAction::Restart => phase == Phase::GameOver,
                GameAction::Pause => phase != Phase::GameOver,
                other => other.is_movement() && playable,
            });
        }
    }

    /// Draw a kind's spawn shape with its top-left occupied cell at (x, y).
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: u16, y: u16) {
        let shape = mask(kind, 0);
        let min_col = mask_cells(shape).map(|(c, _)| c).min().unwrap_or(0);
        let min_row = mask_cells(shape).map(|(_, r)| r).min().unwrap_or(0);
        let style = CellStyle::new(kind.color(), Rgb::new(0, 0, 0)).bold();

        for (col, row) in mask_cells(shape) {
            let px = x + (col - min_col) as u16 * self.cell_w;
            let py = y + (row - min_row) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, title: &str, hint: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let title_style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let hint_style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        for (dy, text, style) in [(0, title, title_style), (1, hint, hint_style)] {
            let text_w = text.chars().count() as u16;
            let x = layout
                .start_x
                .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y + dy, text, style);
        }
    }
}
