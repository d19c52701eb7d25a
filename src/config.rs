use std::time::Duration;

use crate::animation::{AnimationOptions, Transition};
use crate::indicator::IndicatorStyle;
use crate::state::DEFAULT_INDICATOR_MARGIN;

/// Per-surface configuration of infinite loading.
///
/// ```ignore
/// let config = InfiniteScrollConfig::default()
///     .indicator_style(IndicatorStyle::White)
///     .indicator_margin(16.0)
///     .trigger_delay(Duration::from_millis(50));
/// let scroll = InfiniteScroll::with_config(surface, config);
/// ```
#[derive(Debug, Clone)]
pub struct InfiniteScrollConfig {
    pub indicator_style: IndicatorStyle,
    /// Spacing above and below the indicator
    pub indicator_margin: f32,
    /// Transition used when reserving and releasing the indicator row
    pub transition: Transition,
    pub animation_options: AnimationOptions,
    /// Delay between starting the reveal transition and calling the load handler
    pub trigger_delay: Duration,
    /// Tick period used by the event loop driver
    pub frame_interval: Duration,
}

impl Default for InfiniteScrollConfig {
    fn default() -> Self {
        Self {
            indicator_style: IndicatorStyle::default(),
            indicator_margin: DEFAULT_INDICATOR_MARGIN,
            transition: Transition::default(),
            animation_options: AnimationOptions::default(),
            trigger_delay: Duration::from_millis(100),
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl InfiniteScrollConfig {
    pub fn indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    /// Negative margins are treated as zero
    pub fn indicator_margin(mut self, margin: f32) -> Self {
        self.indicator_margin = margin.max(0.0);
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn animation_options(mut self, options: AnimationOptions) -> Self {
        self.animation_options = options;
        self
    }

    pub fn trigger_delay(mut self, delay: Duration) -> Self {
        self.trigger_delay = delay;
        self
    }

    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}
