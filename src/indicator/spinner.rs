use std::time::{Duration, Instant};

use super::{ActivityIndicator, Color, IndicatorStyle};
use crate::geometry::{Point, Size};

/// Number of spokes drawn around the spinner
pub const SPOKES: usize = 12;

/// One full revolution per second, one spoke step per frame.
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / SPOKES as u64);

/// Default [`ActivityIndicator`]: a ring of spokes where the brightest spoke
/// rotates while animating.
#[derive(Debug, Clone)]
pub struct Spinner {
    style: IndicatorStyle,
    center: Point,
    hidden: bool,
    animating: bool,
    /// Index of the brightest spoke
    frame: usize,
    last_step: Option<Instant>,
}

impl Spinner {
    pub fn new(style: IndicatorStyle) -> Self {
        Self {
            style,
            center: Point::zero(),
            hidden: true,
            animating: false,
            frame: 0,
            last_step: None,
        }
    }

    pub fn style(&self) -> IndicatorStyle {
        self.style
    }

    /// Index of the brightest spoke
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Color of every spoke for the current frame, indexed by spoke. Spokes that
    /// the highlight just passed keep most of their opacity.
    pub fn spoke_colors(&self) -> [Color; SPOKES] {
        let base = self.style.color();
        std::array::from_fn(|spoke| {
            let distance = (self.frame + SPOKES - spoke) % SPOKES;
            base.faded(1.0 - distance as f32 / SPOKES as f32)
        })
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(IndicatorStyle::default())
    }
}

impl ActivityIndicator for Spinner {
    fn size(&self) -> Size {
        self.style.size()
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn start_animating(&mut self) {
        self.animating = true;
    }

    fn stop_animating(&mut self) {
        self.animating = false;
        self.last_step = None;
    }

    fn is_animating(&self) -> bool {
        self.animating
    }

    fn set_style(&mut self, style: IndicatorStyle) {
        self.style = style;
    }

    fn advance(&mut self, now: Instant) {
        if !self.animating {
            return;
        }
        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            return;
        };
        let elapsed = now.saturating_duration_since(last);
        let steps = (elapsed.as_micros() / FRAME_DURATION.as_micros()) as usize;
        if steps > 0 {
            self.frame = (self.frame + steps) % SPOKES;
            self.last_step = Some(last + FRAME_DURATION * steps as u32);
        }
    }
}
