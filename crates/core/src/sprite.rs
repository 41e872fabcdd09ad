//! Sprite demo logic - one square sprite moving inside a fixed field.
//!
//! Positions are in field cells with (0, 0) at the top-left. The sprite never
//! leaves the field: every step is clamped to the walls.

/// Movement direction for the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteField {
    cols: u16,
    rows: u16,
    size: u16,
    speed: u16,
    x: u16,
    y: u16,
}

impl SpriteField {
    /// Create a field with the sprite centered horizontally, one sprite
    /// height above the bottom edge.
    ///
    /// The sprite is shrunk to fit when `size` exceeds the field.
    pub fn new(cols: u16, rows: u16, size: u16, speed: u16) -> Self {
        let size = size.clamp(1, cols.min(rows).max(1));
        let x = (cols / 2).saturating_sub(size / 2);
        let y = rows.saturating_sub(size.saturating_mul(2));
        let mut field = Self {
            cols,
            rows,
            size,
            speed,
            x,
            y,
        };
        field.x = field.x.min(field.max_x());
        field.y = field.y.min(field.max_y());
        field
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    fn max_x(&self) -> u16 {
        self.cols.saturating_sub(self.size)
    }

    fn max_y(&self) -> u16 {
        self.rows.saturating_sub(self.size)
    }

    /// Move one step. Returns false when the sprite is already against the wall.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let speed = self.speed as i32;
        let x = (self.x as i32 + dx * speed).clamp(0, self.max_x() as i32) as u16;
        let y = (self.y as i32 + dy * speed).clamp(0, self.max_y() as i32) as u16;
        let moved = (x, y) != (self.x, self.y);
        self.x = x;
        self.y = y;
        moved
    }

    /// Whether a field cell is covered by the sprite.
    pub fn covers(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.size && row >= self.y && row < self.y + self.size
    }
}
