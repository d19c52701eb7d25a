//! The loading indicator shown below the content while a load is in flight.

pub mod positioner;
mod spinner;
mod style;

use std::time::Instant;

pub use spinner::Spinner;
pub use style::{Color, IndicatorStyle};

use crate::geometry::{Point, Rect, Size};

/// A view that signals ongoing work.
///
/// The built-in [`Spinner`] implements this; hosts can install their own through
/// [`InfiniteScroll::set_custom_indicator`](crate::InfiniteScroll::set_custom_indicator).
pub trait ActivityIndicator {
    /// Frame size; its height determines the reserved row height
    fn size(&self) -> Size;

    fn center(&self) -> Point;

    fn set_center(&mut self, center: Point);

    fn is_hidden(&self) -> bool;

    fn set_hidden(&mut self, hidden: bool);

    fn start_animating(&mut self);

    fn stop_animating(&mut self);

    fn is_animating(&self) -> bool;

    /// Apply a cosmetic style. Custom indicators may ignore it.
    fn set_style(&mut self, _style: IndicatorStyle) {}

    /// Advance any running animation to `now`
    fn advance(&mut self, _now: Instant) {}

    /// Frame in content coordinates
    fn frame(&self) -> Rect {
        Rect::centered(self.center(), self.size())
    }
}
