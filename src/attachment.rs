use std::time::Instant;

use crate::config::InfiniteScrollConfig;
use crate::geometry::Point;
use crate::indicator::{ActivityIndicator, IndicatorStyle};
use crate::machine::TriggerMachine;
use crate::state::ScrollInfiniteState;
use crate::surface::{ScrollSurface, SurfaceEvent};

/// A scroll surface with infinite loading attached.
///
/// Owns the host surface together with its infinite loading state. The host
/// forwards offset, content size and drag-end notifications through
/// [`handle_event`](Self::handle_event) and calls [`advance`](Self::advance)
/// once per frame.
///
/// ```ignore
/// let mut scroll = InfiniteScroll::new(list_surface);
/// scroll.enable_infinite_scroll(move |_surface| {
///     tx.send(Request::NextPage).ok();
/// });
///
/// // event loop
/// scroll.handle_event(SurfaceEvent::OffsetChanged(offset));
/// scroll.advance(Instant::now());
///
/// // once the page arrived and was appended
/// scroll.finish_infinite_load();
/// ```
pub struct InfiniteScroll<S: ScrollSurface> {
    surface: S,
    machine: TriggerMachine<S>,
    config: InfiniteScrollConfig,
}

impl<S: ScrollSurface> InfiniteScroll<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, InfiniteScrollConfig::default())
    }

    pub fn with_config(surface: S, config: InfiniteScrollConfig) -> Self {
        Self {
            surface,
            machine: TriggerMachine::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &InfiniteScrollConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface. Changes made here are not observed;
    /// forward them with [`handle_event`](Self::handle_event).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn state(&self) -> &ScrollInfiniteState<S> {
        self.machine.state()
    }

    /// Call `handler` whenever the user drags past the end of the content.
    /// Enabling again replaces the previous handler.
    pub fn enable_infinite_scroll<F>(&mut self, handler: F)
    where
        F: FnMut(&mut S) + 'static,
    {
        self.machine.attach(Box::new(handler));
    }

    pub fn disable_infinite_scroll(&mut self) {
        self.machine.detach(&mut self.surface);
    }

    pub fn is_loading_infinite(&self) -> bool {
        self.machine.is_loading()
    }

    pub fn finish_infinite_load(&mut self) {
        self.machine.finish(&mut self.surface, None, Instant::now());
    }

    /// Like [`finish_infinite_load`](Self::finish_infinite_load), calling
    /// `completion` once the indicator row has been released.
    pub fn finish_infinite_load_with<F>(&mut self, completion: F)
    where
        F: FnOnce(&mut S) + 'static,
    {
        self.machine
            .finish(&mut self.surface, Some(Box::new(completion)), Instant::now());
    }

    pub fn indicator_style(&self) -> IndicatorStyle {
        self.machine.indicator_style()
    }

    pub fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.machine.set_indicator_style(style);
    }

    /// The indicator in use, custom or built-in. Hosts paint it at its frame.
    pub fn indicator(&self) -> Option<&dyn ActivityIndicator> {
        self.machine.indicator()
    }

    pub fn set_custom_indicator<I>(&mut self, indicator: I)
    where
        I: ActivityIndicator + 'static,
    {
        self.machine.set_custom_indicator(Box::new(indicator));
    }

    pub fn indicator_margin(&self) -> f32 {
        self.machine.indicator_margin()
    }

    pub fn set_indicator_margin(&mut self, margin: f32) {
        self.machine.set_indicator_margin(margin);
    }

    /// Whether an inset transition currently swallows user input
    pub fn blocks_interaction(&self) -> bool {
        self.machine.blocks_interaction()
    }

    /// Whether [`advance`](Self::advance) still has work to do
    pub fn needs_advance(&self) -> bool {
        self.machine.needs_advance()
    }

    pub fn handle_event(&mut self, event: SurfaceEvent) {
        self.handle_event_at(event, Instant::now());
    }

    /// [`handle_event`](Self::handle_event) with an explicit frame time
    pub fn handle_event_at(&mut self, event: SurfaceEvent, now: Instant) {
        match event {
            SurfaceEvent::OffsetChanged(offset) => {
                self.machine.on_offset_changed(&mut self.surface, offset, now)
            }
            SurfaceEvent::ContentSizeChanged(size) => {
                self.machine.on_content_size_changed(&mut self.surface, size)
            }
            SurfaceEvent::DragEnded => self.machine.on_drag_ended(&mut self.surface),
        }
    }

    /// Scroll programmatically and notify infinite loading about it
    pub fn set_content_offset(&mut self, offset: Point) {
        self.surface.set_content_offset(offset, false);
        self.handle_event(SurfaceEvent::OffsetChanged(offset));
    }

    /// Run due jobs and advance running transitions to `now`
    pub fn advance(&mut self, now: Instant) {
        self.machine.advance(&mut self.surface, now);
    }
}
