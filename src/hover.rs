//! Tracks which slot's selection frame is shown under the pointer

use crate::config::SlotCollection;
use crate::constants::geometry::SLOT_COUNT;
use crate::layout::Layout;
use crate::types::Position;

/// Result of feeding a pointer update to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    /// Resolved slot is the same as before; nothing to redraw
    Unchanged,
    /// Pointer moved onto a (different) slot
    Entered(usize),
    /// Pointer no longer over any slot
    Left,
}

impl HoverEvent {
    pub fn is_transition(&self) -> bool {
        !matches!(self, HoverEvent::Unchanged)
    }
}

#[derive(Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Resolve `position` against the hover regions (index order, first match)
    pub fn on_pointer_move(&mut self, position: Position, layout: &Layout) -> HoverEvent {
        let resolved = layout.hover_at(position);
        if resolved == self.current {
            return HoverEvent::Unchanged;
        }
        self.current = resolved;
        match resolved {
            Some(slot) => HoverEvent::Entered(slot),
            None => HoverEvent::Left,
        }
    }

    /// Pointer left the window; always reports `Left`
    pub fn on_leave(&mut self) -> HoverEvent {
        self.current = None;
        HoverEvent::Left
    }
}

/// Slot a dropped file lands on
///
/// Each known pointer position is tried in order against the clickable slots
/// and then the wider hover frames. Without a usable position the tracked
/// hover slot wins, then the first empty slot.
pub fn drop_target(
    layout: &Layout,
    pointers: &[Option<Position>],
    hovered: Option<usize>,
    slots: &SlotCollection,
) -> Option<usize> {
    pointers
        .iter()
        .flatten()
        .find_map(|&point| layout.slot_at(point).or_else(|| layout.hover_at(point)))
        .or(hovered)
        .or_else(|| (0..SLOT_COUNT).find(|&index| slots.get(index).is_none()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppBinding;
    use std::path::PathBuf;

    fn center(layout: &Layout, slot: usize) -> Position {
        let rect = layout.hover[slot];
        Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_starts_with_nothing_hovered() {
        assert_eq!(HoverTracker::new().current(), None);
    }

    #[test]
    fn test_repeated_moves_in_same_slot_emit_once() {
        let layout = Layout::for_scale(3.0);
        let mut tracker = HoverTracker::new();
        let inside = center(&layout, 3);

        let events = [
            tracker.on_pointer_move(inside, &layout),
            tracker.on_pointer_move(Position::new(inside.x + 2, inside.y - 1), &layout),
        ];
        assert_eq!(events, [HoverEvent::Entered(3), HoverEvent::Unchanged]);
        assert_eq!(events.iter().filter(|e| e.is_transition()).count(), 1);
        assert_eq!(tracker.current(), Some(3));
    }

    #[test]
    fn test_moving_between_slots() {
        let layout = Layout::for_scale(2.0);
        let mut tracker = HoverTracker::new();

        assert_eq!(tracker.on_pointer_move(center(&layout, 0), &layout), HoverEvent::Entered(0));
        assert_eq!(tracker.on_pointer_move(center(&layout, 1), &layout), HoverEvent::Entered(1));
        assert_eq!(tracker.on_pointer_move(Position::new(1000, 1000), &layout), HoverEvent::Left);
        assert_eq!(tracker.on_pointer_move(Position::new(1001, 1000), &layout), HoverEvent::Unchanged);
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_every_slot_resolves_to_itself() {
        for scale in [0.5, 1.0, 3.0, 7.5] {
            let layout = Layout::for_scale(scale);
            for slot in 0..layout.hover.len() {
                let mut tracker = HoverTracker::new();
                tracker.on_pointer_move(center(&layout, slot), &layout);
                assert_eq!(tracker.current(), Some(slot), "scale {scale} slot {slot}");
            }
        }
    }

    #[test]
    fn test_overlap_resolves_to_lower_index() {
        let layout = Layout::for_scale(3.0);
        let mut tracker = HoverTracker::new();
        // x=60 is inside both hover 0 (-3..69) and hover 1 (57..129)
        assert_eq!(tracker.on_pointer_move(Position::new(60, 20), &layout), HoverEvent::Entered(0));
        // just past hover 0's exclusive right edge
        assert_eq!(tracker.on_pointer_move(Position::new(69, 20), &layout), HoverEvent::Entered(1));
    }

    #[test]
    fn test_leave_is_unconditional() {
        let layout = Layout::for_scale(3.0);
        let mut tracker = HoverTracker::new();
        assert_eq!(tracker.on_leave(), HoverEvent::Left);

        tracker.on_pointer_move(center(&layout, 5), &layout);
        assert_eq!(tracker.on_leave(), HoverEvent::Left);
        assert_eq!(tracker.current(), None);
        // Re-entering the same slot after a leave is a new transition
        assert_eq!(tracker.on_pointer_move(center(&layout, 5), &layout), HoverEvent::Entered(5));
    }

    fn binding(name: &str) -> AppBinding {
        AppBinding {
            name: name.to_string(),
            icon: String::new(),
            exec: name.to_string(),
            source_path: PathBuf::from(format!("/usr/share/applications/{name}.desktop")),
        }
    }

    #[test]
    fn test_drop_target_prefers_pointer_slot() {
        let layout = Layout::for_scale(3.0);
        let slots = SlotCollection::default();
        let on_slot_6 = center(&layout, 6);
        assert_eq!(drop_target(&layout, &[Some(on_slot_6)], Some(2), &slots), Some(6));
    }

    #[test]
    fn test_drop_target_uses_hover_frame_between_slots() {
        let layout = Layout::for_scale(3.0);
        // x=60 misses every clickable slot but sits inside hover frame 0
        let seam = Position::new(60, 2);
        assert_eq!(layout.slot_at(seam), None);
        assert_eq!(drop_target(&layout, &[Some(seam)], None, &SlotCollection::default()), Some(0));
    }

    #[test]
    fn test_drop_target_falls_back_to_earlier_drag_position() {
        let layout = Layout::for_scale(3.0);
        let last_seen = center(&layout, 4);
        let target = drop_target(&layout, &[None, Some(last_seen)], None, &SlotCollection::default());
        assert_eq!(target, Some(4));
    }

    #[test]
    fn test_drop_target_without_pointer_picks_first_empty_slot() {
        let layout = Layout::for_scale(3.0);
        let mut slots = SlotCollection::default();
        slots.set(0, Some(binding("term")));
        slots.set(1, Some(binding("files")));

        assert_eq!(drop_target(&layout, &[None, None], None, &slots), Some(2));
        // Tracked hover still beats the empty-slot guess
        assert_eq!(drop_target(&layout, &[None], Some(0), &slots), Some(0));
    }

    #[test]
    fn test_drop_target_full_bar_without_pointer() {
        let layout = Layout::for_scale(3.0);
        let mut slots = SlotCollection::default();
        for index in 0..SLOT_COUNT {
            slots.set(index, Some(binding(&format!("app{index}"))));
        }
        assert_eq!(drop_target(&layout, &[None], None, &slots), None);
        // Outside the panel entirely
        assert_eq!(drop_target(&layout, &[Some(Position::new(5000, 5000))], None, &slots), None);
    }
}
