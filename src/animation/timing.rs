//! Easing curves for inset and offset transitions.
//!
//! A [`TimingFunction`] maps normalized elapsed time (`0.0..=1.0`) onto an
//! interpolation factor. The inset animator defaults to
//! [`TimingFunction::EaseInOut`], which matches the slow-fast-slow feel of a
//! platform scroll view adjusting its padding.
//!
//! ```ignore
//! let config = InfiniteScrollConfig::default()
//!     .transition(Transition::new(250.0, TimingFunction::EaseOut));
//! ```

use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone)]
pub enum TimingFunction {
    /// Constant speed
    Linear,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// Hermite smoothstep, a gentler ease-in-out
    Smoothstep,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// User-supplied curve
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the curve at `t`. Input outside `0.0..=1.0` is clamped first.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            TimingFunction::Smoothstep => t * t * (3.0 - 2.0 * t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                Bezier::new(*x1, *y1, *x2, *y2).solve(t)
            }
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::Smoothstep => write!(f, "Smoothstep"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Control points of a unit cubic bezier; x1 and x2 are expected in [0, 1].
struct Bezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Bezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Find the curve parameter whose x equals `x` (Newton-Raphson), return its y.
    fn solve(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let slope = self.dx(s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= (Self::component(s, self.x1, self.x2) - x) / slope;
        }
        Self::component(s, self.y1, self.y2)
    }

    fn component(s: f32, p1: f32, p2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn dx(&self, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1 + 6.0 * inv * s * (self.x2 - self.x1) + 3.0 * s * s * (1.0 - self.x2)
    }
}
