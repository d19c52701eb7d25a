//! Geometry value types shared by the scroll surface, the indicator and the
//! trigger state machine.

pub mod metrics;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Same point with its vertical component replaced.
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of the given size centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width * 0.5,
            y: center.y - size.height * 0.5,
            width: size.width,
            height: size.height,
        }
    }
}

/// Padding reserved at each edge of a scrollable region, outside of the content itself.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Override the top inset value.
    pub fn top(mut self, v: f32) -> Self {
        self.top = v;
        self
    }

    /// Override the bottom inset value.
    pub fn bottom(mut self, v: f32) -> Self {
        self.bottom = v;
        self
    }

    /// Override the left inset value.
    pub fn left(mut self, v: f32) -> Self {
        self.left = v;
        self
    }

    /// Override the right inset value.
    pub fn right(mut self, v: f32) -> Self {
        self.right = v;
        self
    }
}

impl From<f32> for Insets {
    fn from(v: f32) -> Self {
        Insets::all(v)
    }
}

impl From<[f32; 4]> for Insets {
    /// `[top, right, bottom, left]`
    fn from(v: [f32; 4]) -> Self {
        Insets {
            top: v[0],
            right: v[1],
            bottom: v[2],
            left: v[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_centered() {
        let rect = Rect::centered(Point::new(50.0, 100.0), Size::new(20.0, 10.0));
        assert_eq!(rect, Rect::new(40.0, 95.0, 20.0, 10.0));
    }

    #[test]
    fn test_insets_from_array() {
        let insets = Insets::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(insets.top, 1.0);
        assert_eq!(insets.right, 2.0);
        assert_eq!(insets.bottom, 3.0);
        assert_eq!(insets.left, 4.0);
    }
}
