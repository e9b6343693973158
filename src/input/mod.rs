//! Input reconciliation.
//!
//! Keyboard, wheel, touch-drag and swipe sources all reduce to one of two
//! navigation intents. The reconciler only decides *whether* to navigate;
//! boundary checks and prefetching belong to [`crate::feed::Pager`].
//!
//! Pointer positions are in logical pixels. The terminal front end converts
//! cells to pixels before calling in (see `ui::input`).

mod swipe;
mod touch;

pub use swipe::{PointerKind, SwipeTracker, SWIPE_DELTA};
pub use touch::{TouchTracker, MIN_SWIPE_DISTANCE};

use crate::keybindings::{Action, Context, KeybindingRegistry};
use crossterm::event::{KeyCode, KeyModifiers};

/// A navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
}

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// The article surface.
    #[default]
    Feed,
    /// A button, link, chip, input or modal.
    Control,
}

/// Where a pointer event happened and whether text is being selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerContext {
    pub target: Target,
    pub text_selected: bool,
}

impl PointerContext {
    pub fn feed() -> Self {
        Self::default()
    }

    pub fn control() -> Self {
        Self {
            target: Target::Control,
            text_selected: false,
        }
    }

    pub fn on_control(self) -> bool {
        self.target == Target::Control
    }
}

/// Stateful front door for every navigation input source.
#[derive(Debug, Default, Clone)]
pub struct Reconciler {
    touch: TouchTracker,
    swipe: SwipeTracker,
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard: resolved through the feed bindings (user overrides apply).
    pub fn key(
        &self,
        registry: &KeybindingRegistry,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<Intent> {
        match registry.action_for_key(code, modifiers, Context::Feed)? {
            Action::Advance => Some(Intent::Advance),
            Action::Retreat => Some(Intent::Retreat),
            _ => None,
        }
    }

    /// Wheel: positive delta advances, negative retreats.
    ///
    /// Suppressed over interactive controls and while text is selected.
    pub fn wheel(&self, delta_y: f64, ctx: PointerContext) -> Option<Intent> {
        if ctx.text_selected || ctx.on_control() {
            return None;
        }
        if delta_y > 0.0 {
            Some(Intent::Advance)
        } else if delta_y < 0.0 {
            Some(Intent::Retreat)
        } else {
            None
        }
    }

    pub fn touch_start(&mut self, y: f64, ctx: PointerContext) {
        self.touch.start(y, ctx);
    }

    pub fn touch_move(&mut self, y: f64, ctx: PointerContext) {
        self.touch.moved(y, ctx);
    }

    pub fn touch_end(&mut self) -> Option<Intent> {
        self.touch.end()
    }

    pub fn pointer_down(&mut self, kind: PointerKind, x: f64, y: f64) {
        self.swipe.down(kind, x, y);
    }

    pub fn pointer_up(&mut self, kind: PointerKind, x: f64, y: f64) -> Option<Intent> {
        self.swipe.up(kind, x, y)
    }

    /// Drop any gesture in progress (e.g. when a modal opens mid-drag).
    pub fn cancel_gestures(&mut self) {
        self.touch = TouchTracker::default();
        self.swipe.cancel();
    }
}
