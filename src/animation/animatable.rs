use crate::geometry::{Insets, Point};

/// Values that can be interpolated by an [`AnimationState`](super::AnimationState).
pub trait Animatable: Clone + PartialEq + 'static {
    /// `t = 0.0` yields `from`, `t = 1.0` yields `to`.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Point {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Point::new(f32::lerp(&from.x, &to.x, t), f32::lerp(&from.y, &to.y, t))
    }
}

impl Animatable for Insets {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Insets {
            top: f32::lerp(&from.top, &to.top, t),
            right: f32::lerp(&from.right, &to.right, t),
            bottom: f32::lerp(&from.bottom, &to.bottom, t),
            left: f32::lerp(&from.left, &to.left, t),
        }
    }
}
