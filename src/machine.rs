//! The trigger/animation state machine behind infinite loading.
//!
//! Two states: idle and loading. Scroll events past the trigger offset while the
//! user drags move the machine to loading, reserve an inset row for the
//! indicator and schedule the load handler. [`TriggerMachine::finish`] releases
//! the row again; the machine only becomes idle once that transition completes.

use std::time::{Duration, Instant};

use crate::config::InfiniteScrollConfig;
use crate::geometry::{metrics, Point, Size};
use crate::indicator::{positioner, ActivityIndicator, IndicatorStyle};
use crate::inset_animator::InsetAnimator;
use crate::jobs::{JobQueue, JobType};
use crate::state::{FinishCompletion, LoadHandler, ScrollInfiniteState};
use crate::surface::ScrollSurface;

/// Inset transitions the machine starts, with what to do when they end
enum InsetTransition<S> {
    /// Indicator row being reserved
    Reveal,
    /// Indicator row being released
    Conceal(Option<FinishCompletion<S>>),
}

pub struct TriggerMachine<S> {
    state: ScrollInfiniteState<S>,
    animator: InsetAnimator<InsetTransition<S>>,
    jobs: JobQueue,
    trigger_delay: Duration,
}

impl<S: ScrollSurface> TriggerMachine<S> {
    pub fn new(config: &InfiniteScrollConfig) -> Self {
        Self {
            state: ScrollInfiniteState::new(config.indicator_style, config.indicator_margin),
            animator: InsetAnimator::new(config.transition.clone(), config.animation_options),
            jobs: JobQueue::new(),
            trigger_delay: config.trigger_delay,
        }
    }

    pub fn state(&self) -> &ScrollInfiniteState<S> {
        &self.state
    }

    /// Start observing events. Attaching again only replaces the handler.
    pub fn attach(&mut self, handler: LoadHandler<S>) {
        self.state.load_handler = Some(handler);
        if self.state.initialized {
            log::trace!("Infinite scroll already attached, replaced load handler");
            return;
        }
        self.state.initialized = true;
        log::debug!("Infinite scroll attached");
    }

    /// Stop observing events, unmount the indicator and drop all attachment state.
    ///
    /// A load cycle still in progress has its reserved insets released immediately.
    /// A finish completion still waiting on its transition runs before returning.
    pub fn detach(&mut self, surface: &mut S) {
        if !self.state.initialized {
            return;
        }

        let pending = self.animator.settle(surface);
        self.jobs.clear();
        if self.state.loading {
            let mut inset = surface.content_inset();
            inset.bottom -= self.state.indicator_inset;
            inset.bottom -= self.state.extra_bottom_inset;
            surface.set_content_inset(inset);
        }
        if surface.contains_indicator() {
            surface.remove_indicator();
        }
        self.state.reset();
        log::debug!("Infinite scroll detached");

        for transition in pending {
            if let InsetTransition::Conceal(Some(completion)) = transition {
                completion(surface);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Release the indicator row. Does nothing unless a load is in progress.
    pub fn finish(&mut self, surface: &mut S, completion: Option<FinishCompletion<S>>, now: Instant) {
        if !self.state.loading {
            log::trace!("Ignoring finish, no load in progress");
            return;
        }
        if self.state.indicator.is_none() {
            log::warn!("Ignoring finish, no loading indicator was ever created");
            return;
        }

        let mut inset = self.animator.content_inset(surface);
        inset.bottom -= self.state.indicator_inset;
        inset.bottom -= self.state.extra_bottom_inset;
        self.state.indicator_inset = 0.0;
        self.state.extra_bottom_inset = 0.0;

        log::debug!("Finishing infinite load, restoring bottom inset {}", inset.bottom);
        let transition = InsetTransition::Conceal(completion);
        if let Some(tag) = self.animator.apply_bottom_inset(surface, inset, true, transition, now) {
            self.complete(surface, tag, true);
        }
    }

    pub fn on_offset_changed(&mut self, surface: &mut S, offset: Point, now: Instant) {
        if !self.state.initialized {
            return;
        }

        let inset = self.animator.content_inset(surface);
        let size = surface.content_size();
        let content_height = positioner::effective_content_height(&self.state, surface, inset, size);
        let trigger = metrics::trigger_offset(
            content_height,
            surface.bounds().height,
            positioner::original_bottom_inset(&self.state, inset),
        );

        if size.height <= 1.0 {
            log::trace!("Ignoring scroll, no content");
            return;
        }
        if !surface.is_dragging() || self.state.loading {
            return;
        }

        if offset.y > trigger {
            log::debug!("Offset {} passed trigger offset {}", offset.y, trigger);
            self.start(surface, now);
            self.jobs
                .push_job(JobType::InvokeLoadHandler, self.trigger_delay, now);
        }
    }

    pub fn on_content_size_changed(&mut self, surface: &mut S, size: Size) {
        if !self.state.initialized {
            return;
        }
        let inset = self.animator.content_inset(surface);
        positioner::position(&mut self.state, surface, inset, size);
    }

    pub fn on_drag_ended(&mut self, surface: &mut S) {
        if !self.state.initialized {
            return;
        }
        self.settle(surface);
    }

    /// Run due jobs, advance the inset transition and the indicator to `now`.
    pub fn advance(&mut self, surface: &mut S, now: Instant) {
        for job in self.jobs.drain_due(now) {
            match job.job_type {
                JobType::InvokeLoadHandler => self.invoke_load_handler(surface),
            }
        }

        for (tag, finished) in self.animator.advance(surface, now) {
            self.complete(surface, tag, finished);
        }

        if let Some(indicator) = self.state.indicator.as_mut() {
            indicator.advance(now);
        }
    }

    /// Whether [`advance`](Self::advance) still has work to do
    pub fn needs_advance(&self) -> bool {
        self.animator.has_pending_work()
            || self.jobs.has_pending_jobs()
            || self
                .state
                .indicator
                .as_ref()
                .is_some_and(|indicator| indicator.is_animating())
    }

    pub fn blocks_interaction(&self) -> bool {
        self.animator.blocks_interaction()
    }

    pub fn indicator_style(&self) -> IndicatorStyle {
        self.state.indicator_style
    }

    /// Store the style and apply it to an existing indicator
    pub fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.state.indicator_style = style;
        if let Some(indicator) = self.state.indicator.as_mut() {
            indicator.set_style(style);
        }
    }

    pub fn indicator(&self) -> Option<&dyn ActivityIndicator> {
        self.state.indicator()
    }

    /// Replace the indicator. The new one starts hidden.
    pub fn set_custom_indicator(&mut self, mut indicator: Box<dyn ActivityIndicator>) {
        indicator.set_hidden(true);
        self.state.indicator = Some(indicator);
    }

    pub fn indicator_margin(&self) -> f32 {
        self.state.indicator_margin
    }

    pub fn set_indicator_margin(&mut self, margin: f32) {
        self.state.indicator_margin = margin.max(0.0);
    }

    fn start(&mut self, surface: &mut S, now: Instant) {
        let size = surface.content_size();
        let inset = self.animator.content_inset(surface);

        positioner::position(&mut self.state, surface, inset, size);
        let indicator = positioner::ensure_indicator(&mut self.state, surface);
        indicator.set_hidden(false);
        indicator.start_animating();

        let indicator_inset = positioner::row_height(&mut self.state, surface);
        // Clamped against the insets from before the row is added
        let adjusted_height = positioner::effective_content_height(&self.state, surface, inset, size);
        let extra_bottom_inset = adjusted_height - size.height;

        let mut target = inset;
        target.bottom += indicator_inset;
        target.bottom += extra_bottom_inset;

        self.state.indicator_inset = indicator_inset;
        self.state.extra_bottom_inset = extra_bottom_inset;
        self.state.loading = true;

        log::debug!(
            "Starting infinite load, reserving {} + {} bottom inset",
            indicator_inset,
            extra_bottom_inset
        );
        if let Some(tag) =
            self.animator
                .apply_bottom_inset(surface, target, true, InsetTransition::Reveal, now)
        {
            self.complete(surface, tag, true);
        }
    }

    fn complete(&mut self, surface: &mut S, transition: InsetTransition<S>, finished: bool) {
        match transition {
            InsetTransition::Reveal => {
                if finished {
                    self.settle(surface);
                }
            }
            InsetTransition::Conceal(completion) => {
                if let Some(indicator) = self.state.indicator.as_mut() {
                    indicator.stop_animating();
                    indicator.set_hidden(true);
                }
                self.state.loading = false;

                if finished {
                    self.clamp_overscroll(surface);
                }
                log::debug!("Infinite load finished");

                if let Some(completion) = completion {
                    completion(surface);
                }
            }
        }
    }

    /// Scroll back inside content that shrank while the row was reserved
    fn clamp_overscroll(&mut self, surface: &mut S) {
        let inset = self.animator.content_inset(surface);
        let max_offset = metrics::max_valid_offset(
            surface.content_size().height,
            surface.bounds().height,
            inset.bottom,
        );
        let offset = surface.content_offset();
        if offset.y > max_offset && max_offset > 0.0 {
            log::trace!("Clamping offset {} to {}", offset.y, max_offset);
            surface.set_content_offset(offset.with_y(max_offset), true);
        }
    }

    /// Bring a half-visible indicator row fully into view
    fn settle(&mut self, surface: &mut S) {
        if surface.is_dragging() || !self.state.loading {
            return;
        }

        let inset = self.animator.content_inset(surface);
        let size = surface.content_size();
        let content_height = positioner::effective_content_height(&self.state, surface, inset, size);
        let row_height = positioner::row_height(&mut self.state, surface);
        let (min, max) = metrics::settle_range(
            content_height,
            surface.bounds().height,
            positioner::original_bottom_inset(&self.state, inset),
            row_height,
        );

        let offset = surface.content_offset();
        if offset.y > min && offset.y < max {
            log::trace!("Settling offset {} onto indicator row at {}", offset.y, max);
            surface.set_content_offset(offset.with_y(max), true);
        }
    }

    fn invoke_load_handler(&mut self, surface: &mut S) {
        if let Some(handler) = self.state.load_handler.as_mut() {
            log::debug!("Invoking infinite load handler");
            handler(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::geometry::Insets;
    use crate::surface::MemorySurface;

    const AFTER_DELAY: Duration = Duration::from_millis(100);
    const AFTER_ANIMATION: Duration = Duration::from_millis(350);

    fn surface(content_height: f32) -> MemorySurface {
        MemorySurface::new(Size::new(320.0, 600.0), Size::new(320.0, content_height))
    }

    fn counting_machine() -> (TriggerMachine<MemorySurface>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let mut machine = TriggerMachine::new(&InfiniteScrollConfig::default());
        let counter = calls.clone();
        machine.attach(Box::new(move |_| counter.set(counter.get() + 1)));
        (machine, calls)
    }

    fn drag_to(machine: &mut TriggerMachine<MemorySurface>, surface: &mut MemorySurface, y: f32, now: Instant) {
        surface.begin_drag();
        surface.offset_y = y;
        machine.on_offset_changed(surface, Point::new(0.0, y), now);
    }

    #[test]
    fn test_threshold() {
        let t0 = Instant::now();
        let (mut machine, calls) = counting_machine();
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 399.0, t0);
        assert!(!machine.is_loading());

        drag_to(&mut machine, &mut surface, 400.0, t0);
        assert!(!machine.is_loading());

        drag_to(&mut machine, &mut surface, 401.0, t0);
        assert!(machine.is_loading());
        assert_eq!(calls.get(), 0);

        machine.advance(&mut surface, t0 + Duration::from_millis(99));
        assert_eq!(calls.get(), 0);
        machine.advance(&mut surface, t0 + AFTER_DELAY);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_start_reserves_row_and_shows_indicator() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 450.0, t0);

        // Gray spinner is 20 tall, default margin 11
        assert_eq!(machine.state().indicator_inset(), 42.0);
        assert_eq!(machine.state().extra_bottom_inset(), 0.0);
        let indicator = machine.indicator().map(|i| (i.is_hidden(), i.is_animating()));
        assert_eq!(indicator, Some((false, true)));

        machine.advance(&mut surface, t0 + AFTER_ANIMATION);
        assert_eq!(surface.inset.bottom, 42.0);
    }

    #[test]
    fn test_short_content_reserves_extra_inset() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(100.0);

        drag_to(&mut machine, &mut surface, 1.0, t0);

        assert!(machine.is_loading());
        assert_eq!(machine.state().extra_bottom_inset(), 500.0);
        let center = machine.indicator().map(|i| i.center());
        assert_eq!(center, Some(Point::new(160.0, 621.0)));

        machine.advance(&mut surface, t0 + AFTER_ANIMATION);
        assert_eq!(surface.inset.bottom, 542.0);
    }

    #[test]
    fn test_no_trigger_without_drag() {
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);
        surface.offset_y = 500.0;

        machine.on_offset_changed(&mut surface, Point::new(0.0, 500.0), Instant::now());

        assert!(!machine.is_loading());
    }

    #[test]
    fn test_no_trigger_on_empty_content() {
        let (mut machine, _) = counting_machine();
        for height in [0.0, 1.0] {
            let mut surface = surface(height);
            drag_to(&mut machine, &mut surface, 5000.0, Instant::now());
            assert!(!machine.is_loading());
        }
    }

    #[test]
    fn test_no_trigger_when_detached() {
        let mut machine: TriggerMachine<MemorySurface> =
            TriggerMachine::new(&InfiniteScrollConfig::default());
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 500.0, Instant::now());

        assert!(!machine.is_loading());
        assert!(!surface.indicator_mounted);
    }

    #[test]
    fn test_reentrant_trigger_is_suppressed() {
        let t0 = Instant::now();
        let (mut machine, calls) = counting_machine();
        let mut surface = surface(1000.0);

        for y in [401.0, 420.0, 460.0, 500.0] {
            drag_to(&mut machine, &mut surface, y, t0);
        }
        machine.advance(&mut surface, t0 + Duration::from_secs(2));

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_finish_cycle_restores_inset_and_hides_indicator() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);
        surface.inset = Insets::ZERO.bottom(8.0);

        drag_to(&mut machine, &mut surface, 420.0, t0);
        machine.advance(&mut surface, t0 + AFTER_ANIMATION);
        assert_eq!(surface.inset.bottom, 50.0);

        let t1 = t0 + AFTER_ANIMATION;
        machine.finish(&mut surface, None, t1);
        assert_eq!(machine.state().indicator_inset(), 0.0);
        // Still loading until the transition completes
        assert!(machine.is_loading());

        machine.advance(&mut surface, t1 + AFTER_ANIMATION);
        assert!(!machine.is_loading());
        assert_eq!(surface.inset.bottom, 8.0);
        let indicator = machine.indicator().map(|i| (i.is_hidden(), i.is_animating()));
        assert_eq!(indicator, Some((true, false)));
    }

    #[test]
    fn test_finish_when_idle_is_noop() {
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);
        let called = Rc::new(Cell::new(false));
        let flag = called.clone();

        machine.finish(&mut surface, Some(Box::new(move |_| flag.set(true))), Instant::now());
        machine.advance(&mut surface, Instant::now() + Duration::from_secs(1));

        assert!(!called.get());
        assert!(!machine.needs_advance());
    }

    #[test]
    fn test_settle_after_reveal_when_not_dragging() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 410.0, t0);
        surface.end_drag();
        machine.advance(&mut surface, t0 + AFTER_ANIMATION);

        assert_eq!(surface.last_animated_offset, Some(Point::new(0.0, 442.0)));
    }

    #[test]
    fn test_no_settle_while_dragging() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 410.0, t0);
        machine.advance(&mut surface, t0 + AFTER_ANIMATION);

        assert_eq!(surface.last_animated_offset, None);
    }

    #[test]
    fn test_drag_end_settles() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 410.0, t0);
        machine.advance(&mut surface, t0 + AFTER_ANIMATION);
        surface.end_drag();
        machine.on_drag_ended(&mut surface);

        assert_eq!(surface.offset_y, 442.0);
    }

    #[test]
    fn test_content_size_change_moves_indicator() {
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);

        surface.set_content_size(Size::new(320.0, 1600.0));
        machine.on_content_size_changed(&mut surface, Size::new(320.0, 1600.0));

        let center = machine.indicator().map(|i| i.center());
        assert_eq!(center, Some(Point::new(160.0, 1621.0)));
        assert!(surface.indicator_mounted);
    }

    #[test]
    fn test_style_applies_to_existing_indicator() {
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);
        machine.on_content_size_changed(&mut surface, Size::new(320.0, 1000.0));

        machine.set_indicator_style(IndicatorStyle::WhiteLarge);

        assert_eq!(machine.indicator_style(), IndicatorStyle::WhiteLarge);
        let size = machine.indicator().map(|i| i.size());
        assert_eq!(size, Some(Size::new(37.0, 37.0)));
    }

    #[test]
    fn test_detach_while_loading_releases_insets() {
        let t0 = Instant::now();
        let (mut machine, calls) = counting_machine();
        let mut surface = surface(1000.0);

        drag_to(&mut machine, &mut surface, 420.0, t0);
        machine.detach(&mut surface);

        assert!(!machine.is_loading());
        assert_eq!(surface.inset.bottom, 0.0);
        assert!(!surface.indicator_mounted);
        assert!(machine.indicator().is_none());

        machine.advance(&mut surface, t0 + Duration::from_secs(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_detach_mid_finish_runs_completion() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);
        drag_to(&mut machine, &mut surface, 450.0, t0);
        machine.advance(&mut surface, t0 + AFTER_ANIMATION);

        let completions = Rc::new(Cell::new(0));
        let counter = completions.clone();
        let t1 = t0 + AFTER_ANIMATION;
        machine.finish(
            &mut surface,
            Some(Box::new(move |surface: &mut MemorySurface| {
                assert_eq!(surface.inset.bottom, 0.0);
                assert!(!surface.indicator_mounted);
                counter.set(counter.get() + 1);
            })),
            t1,
        );
        machine.advance(&mut surface, t1 + Duration::from_millis(100));
        assert_eq!(completions.get(), 0);

        machine.detach(&mut surface);
        assert_eq!(completions.get(), 1);
        assert!(!machine.is_loading());

        machine.advance(&mut surface, t1 + Duration::from_secs(2));
        assert_eq!(completions.get(), 1);
        assert!(!machine.needs_advance());
    }

    #[test]
    fn test_settle_and_clamp_keep_horizontal_offset() {
        let t0 = Instant::now();
        let (mut machine, _) = counting_machine();
        let mut surface = surface(1000.0);
        surface.offset_x = 12.0;

        drag_to(&mut machine, &mut surface, 410.0, t0);
        machine.advance(&mut surface, t0 + AFTER_ANIMATION);
        surface.end_drag();
        machine.on_drag_ended(&mut surface);
        assert_eq!(surface.content_offset(), Point::new(12.0, 442.0));

        let t1 = t0 + AFTER_ANIMATION;
        machine.finish(&mut surface, None, t1);
        machine.advance(&mut surface, t1 + AFTER_ANIMATION);
        assert_eq!(surface.last_animated_offset, Some(Point::new(12.0, 400.0)));
    }
}
