use super::{Intent, PointerContext};

/// Minimum vertical travel, in logical px, for a drag to count as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Vertical touch-drag tracker.
///
/// Records the start Y on touch-start and the latest Y on touch-move. On
/// touch-end the signed distance `start - end` decides the direction: a
/// finger moving up (positive distance) advances.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TouchTracker {
    start: Option<f64>,
    end: Option<f64>,
}

impl TouchTracker {
    pub fn start(&mut self, y: f64, ctx: PointerContext) {
        if ctx.on_control() {
            return;
        }
        self.start = Some(y);
        self.end = None;
    }

    pub fn moved(&mut self, y: f64, ctx: PointerContext) {
        if ctx.on_control() {
            return;
        }
        self.end = Some(y);
    }

    /// Finish the gesture. A drag without both a start and a move is a no-op.
    pub fn end(&mut self) -> Option<Intent> {
        let (Some(start), Some(end)) = (self.start.take(), self.end.take()) else {
            return None;
        };

        let distance = start - end;
        if distance.abs() < MIN_SWIPE_DISTANCE {
            return None;
        }
        Some(if distance > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        })
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
