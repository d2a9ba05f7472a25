use crate::core::animation::{Interpolation, Spring};
use crate::core::time::{Duration, Instant};
use crate::touchable::Press;

use std::cell::Cell;

/// Maps the animation value of an action onto its bottom margin.
pub const MARGIN_BOTTOM: Interpolation = Interpolation::new((0.0, 1.0), (5.0, 10.0));

/// The visual phase of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At rest on 0.
    Collapsed,

    /// At rest on 1.
    Expanded,

    /// The spring is moving.
    Transitioning,
}

/// The local state of an action.
///
/// Created once per mounted action with [`Action::state`] and kept by the
/// host for as long as the action is shown. The properties of the action are
/// supplied again every frame; this is the only thing that persists.
///
/// [`Action::state`]: super::Action::state
#[derive(Debug, Clone)]
pub struct State {
    spring: Spring,
    active: bool,
    last_tick: Option<Instant>,
    pub(super) press: Press,
    pub(super) warned_legacy_elevation: Cell<bool>,
}

impl State {
    /// Creates a collapsed [`State`].
    pub fn new() -> Self {
        Self {
            spring: Spring::new(0.0).bounded(0.0, 1.0),
            active: false,
            last_tick: None,
            press: Press::default(),
            warned_legacy_elevation: Cell::new(false),
        }
    }

    /// Creates a collapsed [`State`] that already saw the given `active` flag.
    ///
    /// Mounting an action does not animate it; only later flips do.
    pub fn mounted(active: bool) -> Self {
        Self {
            active,
            ..Self::new()
        }
    }

    /// Returns the animation value, between 0 (collapsed) and 1 (expanded).
    pub fn value(&self) -> f32 {
        self.spring.value()
    }

    /// Returns the last `active` flag seen by the [`State`].
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current [`Phase`].
    pub fn phase(&self) -> Phase {
        if !self.spring.is_at_rest() {
            Phase::Transitioning
        } else if self.spring.value() >= 1.0 {
            Phase::Expanded
        } else {
            Phase::Collapsed
        }
    }

    /// Returns true while the spring is moving.
    pub fn is_animating(&self) -> bool {
        self.phase() == Phase::Transitioning
    }

    /// Returns the bottom margin of the action row.
    pub fn margin_bottom(&self) -> f32 {
        MARGIN_BOTTOM.map(self.spring.value())
    }

    /// Returns true while the action is being pressed.
    pub fn is_pressed(&self) -> bool {
        self.press.is_pressed()
    }

    /// Feeds the latest `active` flag.
    ///
    /// Returns true if the flag flipped and a transition started. An
    /// in-flight transition is retargeted from its current value.
    pub fn set_active(&mut self, active: bool) -> bool {
        if self.active == active {
            return false;
        }

        if !self.is_animating() {
            self.last_tick = None;
        }

        self.active = active;
        self.spring.set_target(if active { 1.0 } else { 0.0 });

        !self.spring.is_at_rest()
    }

    /// Advances the transition by the given amount of time.
    ///
    /// Returns true while the transition is still in progress.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.spring.step(elapsed)
    }

    /// Advances the transition up to the given frame time.
    ///
    /// The first frame of a transition only records the time.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_animating() {
            self.last_tick = None;
            return false;
        }

        let elapsed = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();

        self.last_tick = Some(now);

        let moving = self.advance(elapsed);

        log::trace!("action spring at {:.4}", self.spring.value());

        if !moving {
            self.last_tick = None;
        }

        moving
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
