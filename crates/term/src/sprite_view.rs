//! SpriteView: draws the sprite demo field.

use crate::core::SpriteField;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

const SPRITE_COLOR: Rgb = Rgb::new(80, 120, 220);
const FIELD_BG: Rgb = Rgb::new(20, 20, 28);

#[derive(Debug, Default, Clone, Copy)]
pub struct SpriteView;

impl SpriteView {
    /// Terminal size needed to show `field` without clipping.
    pub fn required_size(field: &SpriteField) -> Viewport {
        Viewport::new(field.cols() * 2 + 2, field.rows() + 3)
    }

    /// Render the field, centered, with one status line under it.
    pub fn render_into(&self, field: &SpriteField, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = field.cols() * 2 + 2;
        let frame_h = field.rows() + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        let bg = CellStyle::new(FIELD_BG, FIELD_BG);
        let sprite = CellStyle::new(SPRITE_COLOR, FIELD_BG);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        fb.draw_border(start_x, start_y, frame_w, frame_h, CellStyle::default());

        for row in 0..field.rows() {
            for col in 0..field.cols() {
                if field.covers(col, row) {
                    fb.fill_rect(start_x + 1 + col * 2, start_y + 1 + row, 2, 1, '█', sprite);
                }
            }
        }

        let (sx, sy) = field.position();

        let status = CellStyle::default().dim();
        let y = start_y + frame_h;
        fb.put_str(start_x, y, "x ", status);
        fb.put_u32(start_x + 2, y, sx as u32, status);
        fb.put_str(start_x + 7, y, "y ", status);
        fb.put_u32(start_x + 9, y, sy as u32, status);
        fb.put_str(start_x + 14, y, "arrows move, q quits", status);
    }

    pub fn render(&self, field: &SpriteField, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(field, viewport, &mut fb);
        fb
    }
}
