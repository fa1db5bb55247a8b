//! Pixel geometry of the hotbar for a given scale factor
//!
//! All rectangles come from fixed base-unit geometry (a 182x22 panel) and are
//! scaled with truncation toward zero, matching how the skin images are
//! stretched.

use crate::constants::geometry::*;
use crate::types::{Position, Rect, Size, scale_unit};

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub scale: f64,
    pub panel: Size,
    /// Clickable icon areas
    pub slots: [Rect; SLOT_COUNT],
    /// Selection frames; wider than the slots and overlapping at the seams
    pub hover: [Rect; SLOT_COUNT],
}

impl Layout {
    pub fn for_scale(scale: f64) -> Self {
        Self {
            scale,
            panel: Size::new(scale_unit(BASE_WIDTH, scale), scale_unit(BASE_HEIGHT, scale)),
            slots: std::array::from_fn(|i| base_slot_rect(i).scaled(scale)),
            hover: std::array::from_fn(|i| base_hover_rect(i).scaled(scale)),
        }
    }

    /// First clickable slot containing `point`
    pub fn slot_at(&self, point: Position) -> Option<usize> {
        self.slots.iter().position(|rect| rect.contains(point))
    }

    /// First hover region containing `point`; lower index wins on overlap
    pub fn hover_at(&self, point: Position) -> Option<usize> {
        self.hover.iter().position(|rect| rect.contains(point))
    }

    pub fn selection_size(&self) -> Size {
        self.hover[0].size()
    }

    /// Edge length of a slot icon
    pub fn icon_size(&self) -> i32 {
        (self.slots[0].width as f64 * ICON_FILL_RATIO) as i32
    }

    pub fn initials_font_size(&self) -> i32 {
        let size = (self.slots[0].height as f64 * INITIALS_FONT_RATIO) as i32;
        size.max(MIN_INITIALS_FONT_SIZE)
    }

    /// Default window origin: centred horizontally, just above the bottom edge
    pub fn bottom_center(&self, monitor: Size) -> Position {
        Position::new(
            (monitor.width - self.panel.width) / 2,
            monitor.height - self.panel.height - BOTTOM_MARGIN,
        )
    }
}

fn base_slot_rect(index: usize) -> Rect {
    let (x, y, w, h) = SLOT_ORIGIN;
    Rect::new(x + SLOT_STRIDE * index as i32, y, w, h)
}

fn base_hover_rect(index: usize) -> Rect {
    let (x, y, w, h) = SELECTION_ORIGIN;
    Rect::new(x + SLOT_STRIDE * index as i32, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALES: [f64; 9] = [0.25, 0.5, 0.75, 1.0, 1.3, 2.0, 3.0, 4.5, 10.0];

    #[test]
    fn test_panel_size_is_floored() {
        for scale in SCALES {
            let layout = Layout::for_scale(scale);
            assert_eq!(layout.panel.width, (182.0 * scale).floor() as i32, "scale {scale}");
            assert_eq!(layout.panel.height, (22.0 * scale).floor() as i32, "scale {scale}");
        }
    }

    #[test]
    fn test_slot_rects_scaled_componentwise() {
        for scale in SCALES {
            let layout = Layout::for_scale(scale);
            for (i, rect) in layout.slots.iter().enumerate() {
                let base_x = 3.0 + 20.0 * i as f64;
                assert_eq!(rect.x, (base_x * scale).floor() as i32);
                assert_eq!(rect.y, (3.0 * scale).floor() as i32);
                assert_eq!(rect.width, (16.0 * scale).floor() as i32);
                assert_eq!(rect.height, (16.0 * scale).floor() as i32);
            }
        }
    }

    #[test]
    fn test_default_scale_geometry() {
        let layout = Layout::for_scale(3.0);
        assert_eq!(layout.panel, Size::new(546, 66));
        assert_eq!(layout.slots[0], Rect::new(9, 9, 48, 48));
        assert_eq!(layout.slots[8], Rect::new(489, 9, 48, 48));
        assert_eq!(layout.hover[0], Rect::new(-3, -3, 72, 69));
        assert_eq!(layout.hover[1], Rect::new(57, -3, 72, 69));
        assert_eq!(layout.selection_size(), Size::new(72, 69));
    }

    #[test]
    fn test_hover_offset_truncates_toward_zero() {
        // -1 * 0.5 = -0.5 → 0, not -1
        let layout = Layout::for_scale(0.5);
        assert_eq!(layout.hover[0].x, 0);
        assert_eq!(layout.hover[0].y, 0);
    }

    #[test]
    fn test_slot_at() {
        let layout = Layout::for_scale(3.0);
        assert_eq!(layout.slot_at(Position::new(9, 9)), Some(0));
        assert_eq!(layout.slot_at(Position::new(56, 56)), Some(0));
        assert_eq!(layout.slot_at(Position::new(57, 30)), None); // gap between slots
        assert_eq!(layout.slot_at(Position::new(70, 30)), Some(1));
        assert_eq!(layout.slot_at(Position::new(2, 2)), None);
    }

    #[test]
    fn test_hover_at_prefers_lower_index() {
        let layout = Layout::for_scale(3.0);
        // Hover 0 spans -3..69, hover 1 spans 57..129: overlap at 57..69
        assert_eq!(layout.hover_at(Position::new(60, 10)), Some(0));
        assert_eq!(layout.hover_at(Position::new(69, 10)), Some(1));
        assert_eq!(layout.hover_at(Position::new(600, 10)), None);
    }

    #[test]
    fn test_icon_and_font_sizes() {
        let layout = Layout::for_scale(3.0);
        assert_eq!(layout.icon_size(), 38); // 48 * 0.8 = 38.4
        assert_eq!(layout.initials_font_size(), 24);

        let small = Layout::for_scale(0.5);
        assert_eq!(small.icon_size(), 6);
        assert_eq!(small.initials_font_size(), MIN_INITIALS_FONT_SIZE);
    }

    #[test]
    fn test_bottom_center() {
        let layout = Layout::for_scale(3.0);
        let origin = layout.bottom_center(Size::new(1920, 1080));
        assert_eq!(origin, Position::new(687, 974));
    }
}
