//! Animated content-inset transitions with completion reporting.
//!
//! A transition carries a caller-chosen tag. When it ends the tag comes back
//! from [`InsetAnimator::advance`] together with a `finished` flag, which is
//! `false` if a later transition interrupted it. Immediate changes hand the tag
//! back synchronously from [`InsetAnimator::apply_bottom_inset`].

use std::time::Instant;

use crate::animation::{AdvanceResult, AnimationOptions, AnimationState, Transition};
use crate::geometry::Insets;
use crate::surface::ScrollSurface;

struct ActiveTransition<T> {
    animation: AnimationState<Insets>,
    tag: T,
}

pub struct InsetAnimator<T> {
    transition: Transition,
    options: AnimationOptions,
    active: Option<ActiveTransition<T>>,
    /// Tags of interrupted transitions, reported on the next advance
    interrupted: Vec<T>,
}

impl<T> InsetAnimator<T> {
    pub fn new(transition: Transition, options: AnimationOptions) -> Self {
        Self {
            transition,
            options,
            active: None,
            interrupted: Vec::new(),
        }
    }

    /// Move the surface's insets to `target`.
    ///
    /// Returns the tag right away when `animated` is false; otherwise the tag is
    /// returned from a later [`advance`](Self::advance).
    pub fn apply_bottom_inset<S: ScrollSurface>(
        &mut self,
        surface: &mut S,
        target: Insets,
        animated: bool,
        tag: T,
        now: Instant,
    ) -> Option<T> {
        let from = match &self.active {
            Some(active) if !self.options.contains(AnimationOptions::BEGIN_FROM_CURRENT_STATE) => {
                *active.animation.target()
            }
            _ => surface.content_inset(),
        };

        if let Some(previous) = self.active.take() {
            log::trace!("Inset transition interrupted");
            self.interrupted.push(previous.tag);
        }

        if !animated {
            surface.set_content_inset(target);
            return Some(tag);
        }

        surface.set_content_inset(from);
        let mut animation = AnimationState::new(from, self.transition.clone(), now);
        animation.animate_to(target, now);
        self.active = Some(ActiveTransition { animation, tag });
        None
    }

    /// Push the in-flight transition forward and collect ended transitions as
    /// `(tag, finished)`, interrupted ones first.
    pub fn advance<S: ScrollSurface>(&mut self, surface: &mut S, now: Instant) -> Vec<(T, bool)> {
        let mut ended: Vec<(T, bool)> = self
            .interrupted
            .drain(..)
            .map(|tag| (tag, false))
            .collect();

        if let Some(active) = self.active.as_mut() {
            if let AdvanceResult::Changed(inset) = active.animation.advance(now) {
                surface.set_content_inset(inset);
            }
            if !active.animation.is_animating() {
                if let Some(done) = self.active.take() {
                    surface.set_content_inset(*done.animation.target());
                    ended.push((done.tag, true));
                }
            }
        }

        ended
    }

    /// Insets the surface will settle on: the in-flight target, or the surface's
    /// own insets when nothing is animating.
    pub fn content_inset<S: ScrollSurface>(&self, surface: &S) -> Insets {
        match &self.active {
            Some(active) => *active.animation.target(),
            None => surface.content_inset(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// True while a transition runs that does not allow user interaction
    pub fn blocks_interaction(&self) -> bool {
        self.is_animating() && !self.options.contains(AnimationOptions::ALLOW_USER_INTERACTION)
    }

    /// Whether `advance` has anything to do
    pub fn has_pending_work(&self) -> bool {
        self.active.is_some() || !self.interrupted.is_empty()
    }

    /// Jump the in-flight transition to its target and hand back every pending
    /// tag, interrupted ones first. Nothing is reported from `advance` afterwards.
    pub fn settle<S: ScrollSurface>(&mut self, surface: &mut S) -> Vec<T> {
        let mut pending: Vec<T> = self.interrupted.drain(..).collect();
        if let Some(active) = self.active.take() {
            surface.set_content_inset(*active.animation.target());
            pending.push(active.tag);
        }
        pending
    }
}
