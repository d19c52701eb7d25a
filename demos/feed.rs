//! Scripted feed: a simulated user keeps dragging towards the end of a list,
//! every load request is answered by a fake network timer that appends a page.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopHandle, LoopSignal};
use endless_scroll::prelude::*;

const PAGE_HEIGHT: f32 = 1200.0;
const PAGES: u32 = 3;

struct Feed {
    scroll: InfiniteScroll<MemorySurface>,
    requested: Rc<Cell<bool>>,
    pages: u32,
    signal: LoopSignal,
}

fn append_page(handle: &LoopHandle<'static, Feed>) {
    let timer = Timer::from_duration(Duration::from_millis(300));
    let result = handle.insert_source(timer, |_, _, feed: &mut Feed| {
        feed.pages += 1;
        let size = Size::new(360.0, PAGE_HEIGHT * feed.pages as f32);
        feed.scroll.surface_mut().set_content_size(size);
        feed.scroll.handle_event(SurfaceEvent::ContentSizeChanged(size));
        log::info!("Page {} arrived, content is now {} tall", feed.pages, size.height);

        let signal = feed.signal.clone();
        let done = feed.pages > PAGES;
        feed.scroll.finish_infinite_load_with(move |surface: &mut MemorySurface| {
            log::info!("Indicator released at offset {}", surface.offset_y);
            if done {
                signal.stop();
            }
        });
        TimeoutAction::Drop
    });
    if let Err(err) = result {
        log::error!("Failed to schedule page: {}", err);
    }
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let mut event_loop: EventLoop<'static, Feed> =
        EventLoop::try_new().expect("Failed to create event loop");
    let handle = event_loop.handle();

    let config = InfiniteScrollConfig::default()
        .indicator_style(IndicatorStyle::WhiteLarge)
        .transition(Transition::new(250.0, TimingFunction::EaseOut));
    let interval = config.frame_interval;
    let surface = MemorySurface::new(Size::new(360.0, 640.0), Size::new(360.0, PAGE_HEIGHT));

    let requested = Rc::new(Cell::new(false));
    let mut feed = Feed {
        scroll: InfiniteScroll::with_config(surface, config),
        requested: requested.clone(),
        pages: 1,
        signal: event_loop.get_signal(),
    };
    feed.scroll.enable_infinite_scroll(move |surface: &mut MemorySurface| {
        log::info!("Load requested at offset {}", surface.offset_y);
        requested.set(true);
    });

    insert_frame_timer(&handle, interval, |feed: &mut Feed| &mut feed.scroll)
        .expect("Failed to insert frame timer");

    // The simulated user drags 24px per frame while nothing is loading
    let user = handle.clone();
    handle
        .insert_source(Timer::from_duration(interval), move |_, _, feed: &mut Feed| {
            if feed.requested.replace(false) {
                append_page(&user);
            }
            if !feed.scroll.is_loading_infinite() {
                let surface = feed.scroll.surface_mut();
                surface.begin_drag();
                let offset = Point::new(0.0, surface.offset_y + 24.0);
                surface.offset_y = offset.y;
                feed.scroll.handle_event(SurfaceEvent::OffsetChanged(offset));
            }
            TimeoutAction::ToDuration(interval)
        })
        .expect("Failed to insert user timer");

    event_loop
        .run(None, &mut feed, |_| {})
        .expect("Event loop failed");

    log::info!("Loaded {} pages", feed.pages);
}
