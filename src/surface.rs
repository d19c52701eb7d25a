//! The host scroll surface that infinite loading attaches to.
//!
//! Rendering, gesture recognition and scroll physics all stay with the host.
//! Infinite loading reads geometry through [`ScrollSurface`], writes insets and
//! offsets back through it, and is told about changes with [`SurfaceEvent`]s.

use crate::geometry::{Insets, Point, Rect, Size};

/// Change notifications a host forwards to its
/// [`InfiniteScroll`](crate::InfiniteScroll) attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// The content offset changed, from any source (drag, momentum or code)
    OffsetChanged(Point),
    /// The content size changed
    ContentSizeChanged(Size),
    /// The user lifted their finger at the end of a drag gesture
    DragEnded,
}

/// A scrollable region as seen by infinite loading.
pub trait ScrollSurface {
    /// Current scroll offset
    fn content_offset(&self) -> Point;

    /// Move the scroll offset. When `animated` the host scrolls there smoothly.
    fn set_content_offset(&mut self, offset: Point, animated: bool);

    /// Size of the scrollable content
    fn content_size(&self) -> Size;

    /// Visible bounds of the surface
    fn bounds(&self) -> Rect;

    /// Padding around the content
    fn content_inset(&self) -> Insets;

    fn set_content_inset(&mut self, inset: Insets);

    /// Whether the user is currently dragging the content
    fn is_dragging(&self) -> bool;

    /// Whether the loading indicator is part of this surface's view tree
    fn contains_indicator(&self) -> bool;

    /// Add the loading indicator to the view tree. The host paints it using
    /// [`InfiniteScroll::indicator`](crate::InfiniteScroll::indicator).
    fn insert_indicator(&mut self);

    /// Remove the loading indicator from the view tree
    fn remove_indicator(&mut self);
}

/// Headless [`ScrollSurface`] that keeps its whole state in memory.
///
/// Useful for hosts that do their own painting from plain numbers, and for tests.
/// Animated offset changes are applied immediately and remembered in
/// [`last_animated_offset`](Self::last_animated_offset).
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    /// Current scroll offset
    pub offset_x: f32,
    pub offset_y: f32,
    /// Size of the content
    pub content_width: f32,
    pub content_height: f32,
    /// Viewport size
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub inset: Insets,
    pub dragging: bool,
    pub indicator_mounted: bool,
    /// Target of the most recent animated `set_content_offset`
    pub last_animated_offset: Option<Point>,
}

impl MemorySurface {
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            content_width: content.width,
            content_height: content.height,
            ..Default::default()
        }
    }

    /// Start a drag gesture
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// End a drag gesture. Forward [`SurfaceEvent::DragEnded`] afterwards.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_width = size.width;
        self.content_height = size.height;
    }

    /// Get the maximum scroll offset in Y direction, bottom inset included
    pub fn max_scroll_y(&self) -> f32 {
        (self.content_height - self.viewport_height + self.inset.bottom).max(-self.inset.top)
    }

    /// Get the maximum scroll offset in X direction
    pub fn max_scroll_x(&self) -> f32 {
        (self.content_width - self.viewport_width + self.inset.right).max(-self.inset.left)
    }

    /// Clamp scroll offsets to the valid range
    pub fn clamp_offsets(&mut self) {
        self.offset_x = self.offset_x.clamp(-self.inset.left, self.max_scroll_x());
        self.offset_y = self.offset_y.clamp(-self.inset.top, self.max_scroll_y());
    }
}

impl ScrollSurface for MemorySurface {
    fn content_offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.offset_x = offset.x;
        self.offset_y = offset.y;
        if animated {
            self.last_animated_offset = Some(offset);
        }
    }

    fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.viewport_width,
            self.viewport_height,
        )
    }

    fn content_inset(&self) -> Insets {
        self.inset
    }

    fn set_content_inset(&mut self, inset: Insets) {
        self.inset = inset;
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn contains_indicator(&self) -> bool {
        self.indicator_mounted
    }

    fn insert_indicator(&mut self) {
        self.indicator_mounted = true;
    }

    fn remove_indicator(&mut self) {
        self.indicator_mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_follow_offset() {
        let mut surface = MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, 1000.0));
        surface.set_content_offset(Point::new(0.0, 120.0), false);
        assert_eq!(surface.bounds(), Rect::new(0.0, 120.0, 320.0, 600.0));
        assert_eq!(surface.last_animated_offset, None);
    }

    #[test]
    fn test_animated_offset_is_recorded() {
        let mut surface = MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, 1000.0));
        surface.set_content_offset(Point::new(0.0, 420.0), true);
        assert_eq!(surface.offset_y, 420.0);
        assert_eq!(surface.last_animated_offset, Some(Point::new(0.0, 420.0)));
    }

    #[test]
    fn test_clamp_offsets_respects_insets() {
        let mut surface = MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, 1000.0));
        surface.inset = Insets::all(0.0).bottom(42.0);
        surface.offset_y = 900.0;
        surface.clamp_offsets();
        assert_eq!(surface.offset_y, 442.0);

        surface.offset_y = -50.0;
        surface.clamp_offsets();
        assert_eq!(surface.offset_y, 0.0);
    }
}
