//! Shared geometry primitives

use serde::{Deserialize, Serialize};

/// Integer point in panel or screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Half-open containment: low edges inclusive, high edges exclusive
    pub fn contains(&self, point: Position) -> bool {
        self.left() <= point.x
            && point.x < self.right()
            && self.top() <= point.y
            && point.y < self.bottom()
    }

    /// Scale every component, truncating toward zero
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            x: scale_unit(self.x, scale),
            y: scale_unit(self.y, scale),
            width: scale_unit(self.width, scale),
            height: scale_unit(self.height, scale),
        }
    }
}

/// Convert one base unit to pixels (`int(value * scale)` semantics)
pub fn scale_unit(value: i32, scale: f64) -> i32 {
    (value as f64 * scale) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(10, 20, 5, 5);
        assert!(rect.contains(Position::new(10, 20)));
        assert!(rect.contains(Position::new(14, 24)));
        assert!(!rect.contains(Position::new(15, 20)));
        assert!(!rect.contains(Position::new(10, 25)));
        assert!(!rect.contains(Position::new(9, 22)));
    }

    #[test]
    fn test_scale_unit_truncates_toward_zero() {
        assert_eq!(scale_unit(182, 0.75), 136); // 136.5
        assert_eq!(scale_unit(-1, 0.25), 0); // -0.25 → 0, not -1
        assert_eq!(scale_unit(-1, 3.0), -3);
        assert_eq!(scale_unit(23, 1.25), 28); // 28.75
    }

    #[test]
    fn test_scaled_rect() {
        let rect = Rect::new(23, 3, 16, 16).scaled(2.5);
        assert_eq!(rect, Rect::new(57, 7, 40, 40));
    }
}
