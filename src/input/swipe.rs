use super::Intent;

/// Minimum travel, in logical px, before a pointer release counts as a swipe.
pub const SWIPE_DELTA: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
}

/// Direction-only swipe recognizer for touch and mouse pointers.
///
/// The dominant axis between press and release decides the direction.
/// Vertical swipes map to intents (up advances, down retreats); horizontal
/// swipes are recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    pub track_touch: bool,
    pub track_mouse: bool,
    origin: Option<(PointerKind, f64, f64)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self {
            track_touch: true,
            track_mouse: true,
            origin: None,
        }
    }
}

impl SwipeTracker {
    fn tracks(&self, kind: PointerKind) -> bool {
        match kind {
            PointerKind::Touch => self.track_touch,
            PointerKind::Mouse => self.track_mouse,
        }
    }

    pub fn down(&mut self, kind: PointerKind, x: f64, y: f64) {
        if self.tracks(kind) {
            self.origin = Some((kind, x, y));
        }
    }

    /// Release the pointer. Returns an intent for a vertical swipe.
    pub fn up(&mut self, kind: PointerKind, x: f64, y: f64) -> Option<Intent> {
        let (origin_kind, x0, y0) = self.origin.take()?;
        if origin_kind != kind {
            return None;
        }

        let dx = x - x0;
        let dy = y - y0;
        if dx.abs().max(dy.abs()) < SWIPE_DELTA {
            return None;
        }
        if dx.abs() > dy.abs() {
            tracing::trace!(dx, "Horizontal swipe ignored");
            return None;
        }

        Some(if dy < 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        })
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
