use crate::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with its alpha multiplied by `factor`
    pub fn faded(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
}

/// Cosmetic variant of the built-in spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorStyle {
    /// Small gray spinner, for light backgrounds
    #[default]
    Gray,
    /// Small white spinner, for dark backgrounds
    White,
    /// Large white spinner
    WhiteLarge,
}

impl IndicatorStyle {
    /// Frame size of a spinner drawn in this style
    pub fn size(self) -> Size {
        match self {
            IndicatorStyle::Gray | IndicatorStyle::White => Size::new(20.0, 20.0),
            IndicatorStyle::WhiteLarge => Size::new(37.0, 37.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            IndicatorStyle::Gray => Color::GRAY,
            IndicatorStyle::White | IndicatorStyle::WhiteLarge => Color::WHITE,
        }
    }
}
