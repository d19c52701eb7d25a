use std::time::Instant;

use super::{Animatable, Transition};

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (animation not running, or still in its delay)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

/// Interpolation of a single value towards a target, driven by an explicit clock.
///
/// Callers pass `now` into [`animate_to`](Self::animate_to) and
/// [`advance`](Self::advance) instead of the state sampling the system clock, so the
/// same frame time is shared by everything advanced in one tick.
pub struct AnimationState<T: Animatable> {
    /// Current interpolated value
    current: T,
    /// Value the animation is heading to
    target: T,
    /// Value when animation started
    start: T,
    /// Progress from 0.0 to 1.0
    progress: f32,
    /// Time when animation started
    start_time: Instant,
    /// Transition configuration
    transition: Transition,
}

impl<T: Animatable> AnimationState<T> {
    pub fn new(initial_value: T, transition: Transition, now: Instant) -> Self {
        Self {
            current: initial_value.clone(),
            target: initial_value.clone(),
            start: initial_value,
            progress: 1.0, // Start completed
            start_time: now,
            transition,
        }
    }

    /// Start animating from the current value to `new_target`.
    ///
    /// Always restarts the clock, even when the target is unchanged.
    pub fn animate_to(&mut self, new_target: T, now: Instant) {
        self.start = self.current.clone();
        self.target = new_target;
        self.progress = 0.0;
        self.start_time = now;
    }

    /// Advance the animation to `now` and return whether the value changed
    pub fn advance(&mut self, now: Instant) -> AdvanceResult<T> {
        if self.progress >= 1.0 {
            return AdvanceResult::NoChange;
        }

        let elapsed = now.saturating_duration_since(self.start_time).as_micros() as f32 / 1000.0;
        let adjusted_elapsed = elapsed - self.transition.delay_ms;
        if adjusted_elapsed < 0.0 {
            // Still in delay period
            return AdvanceResult::NoChange;
        }

        let t = if self.transition.duration_ms <= 0.0 {
            1.0
        } else {
            (adjusted_elapsed / self.transition.duration_ms).min(1.0)
        };
        self.progress = t;

        let new_value = if t >= 1.0 {
            // Land exactly on the target instead of trusting the curve's endpoint
            self.target.clone()
        } else {
            T::lerp(&self.start, &self.target, self.transition.timing.evaluate(t))
        };

        if new_value == self.current {
            return AdvanceResult::NoChange;
        }
        self.current = new_value.clone();
        AdvanceResult::Changed(new_value)
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.progress < 1.0
    }

    /// Get target value
    pub fn target(&self) -> &T {
        &self.target
    }
}
