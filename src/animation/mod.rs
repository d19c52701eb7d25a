mod animatable;
mod state;
mod timing;

pub use animatable::Animatable;
pub use state::{AdvanceResult, AnimationState};
pub use timing::TimingFunction;

use bitflags::bitflags;

bitflags! {
    /// Options controlling how a property transition behaves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AnimationOptions: u8 {
        /// The surface keeps receiving user input while the transition runs
        const ALLOW_USER_INTERACTION = 1 << 0;
        /// A new transition starts from the currently presented value instead of
        /// the previous transition's target
        const BEGIN_FROM_CURRENT_STATE = 1 << 1;
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        AnimationOptions::ALLOW_USER_INTERACTION | AnimationOptions::BEGIN_FROM_CURRENT_STATE
    }
}

/// Configuration for how a property should animate when it changes
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Delay before animation starts in milliseconds
    pub delay_ms: f32,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms,
            timing,
            delay_ms: 0.0,
        }
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }
}

impl Default for Transition {
    /// 350ms ease-in-out, the duration used for inset reservation
    fn default() -> Self {
        Self::new(350.0, TimingFunction::EaseInOut)
    }
}
