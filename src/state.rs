use crate::indicator::{ActivityIndicator, IndicatorStyle};

/// Callback invoked when the user scrolls past the trigger offset.
pub type LoadHandler<S> = Box<dyn FnMut(&mut S)>;

/// Callback invoked once a finish transition has fully completed.
pub type FinishCompletion<S> = Box<dyn FnOnce(&mut S)>;

/// Default spacing above and below the indicator
pub const DEFAULT_INDICATOR_MARGIN: f32 = 11.0;

/// Per-surface infinite loading state.
///
/// Only the trigger state machine mutates the loading flags and reserved insets;
/// they are exposed read-only for hosts that want to inspect them.
pub struct ScrollInfiniteState<S> {
    pub(crate) initialized: bool,
    pub(crate) loading: bool,
    pub(crate) indicator: Option<Box<dyn ActivityIndicator>>,
    pub(crate) indicator_style: IndicatorStyle,
    pub(crate) indicator_margin: f32,
    /// Inset reserved for the indicator row
    pub(crate) indicator_inset: f32,
    /// Inset that pushes the indicator below a viewport-filling short list
    pub(crate) extra_bottom_inset: f32,
    pub(crate) load_handler: Option<LoadHandler<S>>,
}

impl<S> ScrollInfiniteState<S> {
    pub fn new(indicator_style: IndicatorStyle, indicator_margin: f32) -> Self {
        Self {
            initialized: false,
            loading: false,
            indicator: None,
            indicator_style,
            indicator_margin: indicator_margin.max(0.0),
            indicator_inset: 0.0,
            extra_bottom_inset: 0.0,
            load_handler: None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn indicator_inset(&self) -> f32 {
        self.indicator_inset
    }

    pub fn extra_bottom_inset(&self) -> f32 {
        self.extra_bottom_inset
    }

    pub fn indicator_style(&self) -> IndicatorStyle {
        self.indicator_style
    }

    pub fn indicator_margin(&self) -> f32 {
        self.indicator_margin
    }

    pub fn indicator(&self) -> Option<&dyn ActivityIndicator> {
        self.indicator.as_deref()
    }

    /// Drop everything tied to an attachment. Style and margin are per-view
    /// configuration and survive.
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.indicator_style, self.indicator_margin);
    }
}

impl<S> Default for ScrollInfiniteState<S> {
    fn default() -> Self {
        Self::new(IndicatorStyle::default(), DEFAULT_INDICATOR_MARGIN)
    }
}

impl<S> std::fmt::Debug for ScrollInfiniteState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollInfiniteState")
            .field("initialized", &self.initialized)
            .field("loading", &self.loading)
            .field("has_indicator", &self.indicator.is_some())
            .field("indicator_style", &self.indicator_style)
            .field("indicator_margin", &self.indicator_margin)
            .field("indicator_inset", &self.indicator_inset)
            .field("extra_bottom_inset", &self.extra_bottom_inset)
            .field("has_load_handler", &self.load_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::Spinner;

    #[test]
    fn test_defaults() {
        let state: ScrollInfiniteState<()> = ScrollInfiniteState::default();
        assert!(!state.is_initialized());
        assert!(!state.is_loading());
        assert_eq!(state.indicator_margin(), 11.0);
        assert_eq!(state.indicator_style(), IndicatorStyle::Gray);
        assert_eq!(state.indicator_inset(), 0.0);
        assert_eq!(state.extra_bottom_inset(), 0.0);
    }

    #[test]
    fn test_negative_margin_is_clamped() {
        let state: ScrollInfiniteState<()> = ScrollInfiniteState::new(IndicatorStyle::White, -4.0);
        assert_eq!(state.indicator_margin(), 0.0);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut state: ScrollInfiniteState<()> =
            ScrollInfiniteState::new(IndicatorStyle::WhiteLarge, 6.0);
        state.initialized = true;
        state.loading = true;
        state.indicator = Some(Box::new(Spinner::default()));
        state.indicator_inset = 42.0;
        state.load_handler = Some(Box::new(|_| {}));

        state.reset();

        assert!(!state.is_initialized());
        assert!(!state.is_loading());
        assert!(state.indicator().is_none());
        assert!(state.load_handler.is_none());
        assert_eq!(state.indicator_inset(), 0.0);
        assert_eq!(state.indicator_style(), IndicatorStyle::WhiteLarge);
        assert_eq!(state.indicator_margin(), 6.0);
    }
}
