use serde::{Serialize, Deserialize};

use crate::geometry::bezier::Point;

/// Effective base when the grabbed value is exactly zero. Without it the
/// first drag on a zeroed node would fight the sign convention; the legacy
/// constant is kept bit-for-bit.
const ZERO_VALUE_BASE: f64 = 0.01;

/// Pointer-distance divisor: one node radius of travel changes the value by
/// 1/20, so a comfortable drag spans a few units.
const DISTANCE_SCALE: f64 = 20.0;

/// Lifecycle of one node's gesture. Each editable node owns its own tracker,
/// so concurrent drags on different nodes can never share state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    Idle,
    Dragging {
        /// Pointer position at gesture start, device pixels.
        start: Point,
        /// Node value at gesture start; every move recomputes from this, so
        /// a drag is always relative to where the gesture began.
        original_value: f64,
    },
}

/// Maps a pointer-drag displacement stream onto a bounded node value.
///
/// Protocol: `begin` on pointer-down, `move_to` on every move (unthrottled),
/// `end` on release. `move_to` returns the new clamped value; the caller
/// writes it back to the node and re-renders. A tracker on a non-editable
/// node ignores the whole protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragTracker {
    pub state: DragState,
    radius: f64,
    min_value: f64,
    max_value: f64,
    editable: bool,
}

impl DragTracker {
    pub fn new(radius: f64, min_value: f64, max_value: f64, editable: bool) -> DragTracker {
        DragTracker {
            state: DragState::Idle,
            radius,
            min_value,
            max_value,
            editable,
        }
    }

    /// Starts a gesture at `start`, capturing `value` as the drag base.
    /// Ignored (stays `Idle`) when the node is not editable.
    pub fn begin(&mut self, value: f64, start: Point) {
        if !self.editable {
            return;
        }
        self.state = DragState::Dragging {
            start,
            original_value: value,
        };
    }

    /// Feeds one pointer position; returns the node's new value, clamped
    /// into `[min_value, max_value]`. Returns `None` while no gesture is in
    /// progress (including all moves on non-editable nodes).
    pub fn move_to(&mut self, current: Point) -> Option<f64> {
        let (start, original_value) = match self.state {
            DragState::Dragging { start, original_value } => (start, original_value),
            DragState::Idle => return None,
        };

        let dx = current[0] - start[0];
        let dy = current[1] - start[1];
        let sign = if dx >= 0.0 { 1.0 } else { -1.0 };
        let delta = sign * (dx * dx + dy * dy).sqrt() / self.radius / DISTANCE_SCALE;

        let base = if original_value == 0.0 {
            ZERO_VALUE_BASE
        } else {
            original_value
        };

        Some((base + delta).clamp(self.min_value, self.max_value))
    }

    /// Ends the gesture. No value side effects — everything already happened
    /// during the moves.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> DragTracker {
        DragTracker::new(20.0, -100.0, 100.0, true)
    }

    #[test]
    fn zero_displacement_leaves_value_unchanged() {
        let mut t = tracker();
        t.begin(0.5, [10.0, 10.0]);
        assert_eq!(t.move_to([10.0, 10.0]), Some(0.5));
    }

    #[test]
    fn rightward_drag_increases_leftward_decreases() {
        let mut t = tracker();
        t.begin(1.0, [0.0, 0.0]);
        // 40px right over a 20px radius: delta = 40/20/20 = 0.1.
        assert_eq!(t.move_to([40.0, 0.0]), Some(1.1));
        assert_eq!(t.move_to([-40.0, 0.0]), Some(0.9));
    }

    #[test]
    fn vertical_displacement_counts_as_positive() {
        // dx == 0 defaults the sign to +1 even though hypot is all dy.
        let mut t = tracker();
        t.begin(1.0, [0.0, 0.0]);
        assert_eq!(t.move_to([0.0, 40.0]), Some(1.1));
    }

    #[test]
    fn oversized_drag_clamps_to_the_bounds() {
        let mut t = DragTracker::new(20.0, -2.0, 2.0, true);
        t.begin(0.5, [0.0, 0.0]);
        assert_eq!(t.move_to([1e6, 0.0]), Some(2.0));
        assert_eq!(t.move_to([-1e6, 0.0]), Some(-2.0));
    }

    #[test]
    fn zero_base_substitution() {
        let mut t = tracker();
        t.begin(0.0, [0.0, 0.0]);
        // Base becomes 0.01, so 40px right lands on 0.11 exactly.
        let v = t.move_to([40.0, 0.0]).unwrap();
        assert!((v - 0.11).abs() < 1e-12);
    }

    #[test]
    fn non_editable_node_ignores_the_gesture() {
        let mut t = DragTracker::new(20.0, 0.0, 1.0, false);
        t.begin(1.0, [0.0, 0.0]);
        assert!(!t.is_dragging());
        assert_eq!(t.move_to([50.0, 0.0]), None);
    }

    #[test]
    fn moves_after_end_are_ignored() {
        let mut t = tracker();
        t.begin(1.0, [0.0, 0.0]);
        t.end();
        assert_eq!(t.move_to([40.0, 0.0]), None);
    }

    #[test]
    fn each_tracker_is_independent() {
        let mut a = tracker();
        let mut b = tracker();
        a.begin(1.0, [0.0, 0.0]);
        // b never started; a's gesture must not leak into it.
        assert_eq!(b.move_to([40.0, 0.0]), None);
        assert_eq!(a.move_to([40.0, 0.0]), Some(1.1));
    }
}
