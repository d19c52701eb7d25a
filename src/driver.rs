//! Drive an [`InfiniteScroll`] from a `calloop` event loop.
//!
//! The frame timer calls [`InfiniteScroll::advance`] on every tick, which runs
//! the deferred load handler and pushes inset transitions forward on the loop's
//! own thread.

use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::{InsertError, LoopHandle, RegistrationToken};

use crate::attachment::InfiniteScroll;
use crate::surface::ScrollSurface;

/// Register a repeating timer that advances the attachment returned by
/// `accessor` every `interval`.
///
/// Remove it again with `LoopHandle::remove` and the returned token.
pub fn insert_frame_timer<'l, D, S, F>(
    handle: &LoopHandle<'l, D>,
    interval: Duration,
    mut accessor: F,
) -> Result<RegistrationToken, InsertError<Timer>>
where
    S: ScrollSurface + 'l,
    F: FnMut(&mut D) -> &mut InfiniteScroll<S> + 'l,
{
    handle.insert_source(Timer::from_duration(interval), move |_deadline, _, data| {
        accessor(data).advance(Instant::now());
        TimeoutAction::ToDuration(interval)
    })
}
