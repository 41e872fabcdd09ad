//! Framebuffer and style types for terminal rendering.

pub use crate::types::Rgb;

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Draw a single-line box outline.
    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        self.put_char(x, y, '┌', style);
        self.put_char(x + w - 1, y, '┐', style);
        self.put_char(x, y + h - 1, '└', style);
        self.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            self.put_char(x + dx, y, '─', style);
            self.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            self.put_char(x, y + dy, '│', style);
            self.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Read one row back as a string (tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}
