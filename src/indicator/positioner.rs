//! Placement of the loading indicator below the content.

use super::{ActivityIndicator, Spinner};
use crate::geometry::{metrics, Insets, Size};
use crate::state::ScrollInfiniteState;
use crate::surface::ScrollSurface;

/// Return the indicator, creating a hidden [`Spinner`] in the configured style
/// if none exists yet, and mount it into the surface's view tree.
pub fn ensure_indicator<'a, S: ScrollSurface>(
    state: &'a mut ScrollInfiniteState<S>,
    surface: &mut S,
) -> &'a mut dyn ActivityIndicator {
    if !surface.contains_indicator() {
        surface.insert_indicator();
    }
    let style = state.indicator_style;
    let indicator = state.indicator.get_or_insert_with(|| {
        log::debug!("Creating loading indicator with style {:?}", style);
        let spinner: Box<dyn ActivityIndicator> = Box::new(Spinner::new(style));
        spinner
    });
    &mut **indicator
}

/// Height of the row reserved for the indicator, margins included.
pub fn row_height<S: ScrollSurface>(state: &mut ScrollInfiniteState<S>, surface: &mut S) -> f32 {
    let margin = state.indicator_margin;
    let height = ensure_indicator(state, surface).size().height;
    metrics::indicator_row_height(height, margin)
}

/// Content height clamped to one viewport, computed against the model insets.
pub fn effective_content_height<S: ScrollSurface>(
    state: &ScrollInfiniteState<S>,
    surface: &S,
    inset: Insets,
    content_size: Size,
) -> f32 {
    metrics::effective_content_height(
        content_size.height,
        surface.bounds().height,
        inset.top,
        original_bottom_inset(state, inset),
    )
}

/// The host's own bottom inset, without what infinite loading reserved.
pub fn original_bottom_inset<S>(state: &ScrollInfiniteState<S>, inset: Insets) -> f32 {
    metrics::original_bottom_inset(inset.bottom, state.extra_bottom_inset, state.indicator_inset)
}

/// Center the indicator horizontally just below the effective end of content.
/// The center is only written when it actually moves.
pub fn position<S: ScrollSurface>(
    state: &mut ScrollInfiniteState<S>,
    surface: &mut S,
    inset: Insets,
    content_size: Size,
) {
    let content_height = effective_content_height(state, surface, inset, content_size);
    let row_height = row_height(state, surface);
    let center = metrics::indicator_center(content_size.width, content_height, row_height);

    let indicator = ensure_indicator(state, surface);
    if indicator.center() != center {
        log::trace!("Moving loading indicator to {:?}", center);
        indicator.set_center(center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::indicator::IndicatorStyle;
    use crate::surface::MemorySurface;

    #[test]
    fn test_ensure_indicator_creates_hidden_spinner_once() {
        let mut state = ScrollInfiniteState::new(IndicatorStyle::WhiteLarge, 11.0);
        let mut surface = MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, 1000.0));

        let indicator = ensure_indicator(&mut state, &mut surface);
        assert!(indicator.is_hidden());
        assert_eq!(indicator.size(), Size::new(37.0, 37.0));
        indicator.set_center(Point::new(1.0, 2.0));

        assert!(surface.indicator_mounted);
        let again = ensure_indicator(&mut state, &mut surface);
        assert_eq!(again.center(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_position_below_tall_content() {
        let mut state = ScrollInfiniteState::new(IndicatorStyle::Gray, 10.0);
        let mut surface = MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, 1000.0));
        let size = surface.content_size();

        position(&mut state, &mut surface, Insets::ZERO, size);

        // row = 20 + 2 * 10
        let center = state.indicator().map(|indicator| indicator.center());
        assert_eq!(center, Some(Point::new(160.0, 1020.0)));
    }

    #[test]
    fn test_position_short_content_uses_viewport_height() {
        let mut state = ScrollInfiniteState::new(IndicatorStyle::Gray, 10.0);
        let mut surface = MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, 100.0));
        let size = surface.content_size();

        position(&mut state, &mut surface, Insets::ZERO, size);

        let center = state.indicator().map(|indicator| indicator.center());
        assert_eq!(center, Some(Point::new(160.0, 620.0)));
    }

    #[test]
    fn test_original_bottom_inset_strips_reserved_space() {
        let mut state: ScrollInfiniteState<MemorySurface> = ScrollInfiniteState::default();
        state.indicator_inset = 42.0;
        state.extra_bottom_inset = 500.0;
        assert_eq!(original_bottom_inset(&state, Insets::ZERO.bottom(550.0)), 8.0);
    }
}
