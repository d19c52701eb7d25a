//! Scalar thresholds and positions derived from content geometry.
//!
//! Everything here is a pure function of its arguments. The trigger state machine
//! and the indicator positioner call into these with the surface's *model* insets
//! (see [`InsetAnimator::content_inset`](crate::inset_animator::InsetAnimator::content_inset)).

use super::Point;

/// Content height clamped to be at least one full viewport tall.
///
/// Keeps the trigger region and the indicator at the bottom of the viewport when
/// the actual content is shorter than the visible area.
pub fn effective_content_height(
    content_height: f32,
    visible_height: f32,
    top_inset: f32,
    original_bottom_inset: f32,
) -> f32 {
    content_height.max(visible_height - top_inset - original_bottom_inset)
}

/// The caller's own bottom inset, with everything infinite loading added removed.
pub fn original_bottom_inset(
    current_bottom_inset: f32,
    extra_bottom_inset: f32,
    indicator_inset: f32,
) -> f32 {
    current_bottom_inset - extra_bottom_inset - indicator_inset
}

/// Height of the row reserved for the indicator, margins included.
pub fn indicator_row_height(indicator_height: f32, margin: f32) -> f32 {
    indicator_height + margin * 2.0
}

/// Scroll offset beyond which a load starts.
pub fn trigger_offset(
    effective_content_height: f32,
    visible_height: f32,
    original_bottom_inset: f32,
) -> f32 {
    effective_content_height - visible_height + original_bottom_inset
}

/// Center of the indicator, just below the (effective) end of content.
pub fn indicator_center(content_width: f32, effective_content_height: f32, row_height: f32) -> Point {
    Point::new(
        content_width * 0.5,
        effective_content_height + row_height * 0.5,
    )
}

/// Largest offset that keeps the viewport inside content plus bottom inset.
pub fn max_valid_offset(content_height: f32, visible_height: f32, bottom_inset: f32) -> f32 {
    content_height - visible_height + bottom_inset
}

/// Offsets bounding a half-revealed indicator row.
///
/// The first value is the pre-indicator boundary (the trigger offset), the second
/// the post-indicator boundary where the whole row is visible. An offset strictly
/// between the two gets settled onto the second.
pub fn settle_range(
    effective_content_height: f32,
    visible_height: f32,
    original_bottom_inset: f32,
    row_height: f32,
) -> (f32, f32) {
    let min = trigger_offset(
        effective_content_height,
        visible_height,
        original_bottom_inset,
    );
    (min, min + row_height)
}
