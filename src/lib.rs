//! Infinite loading for scrollable surfaces.
//!
//! Attach an [`InfiniteScroll`] to any [`ScrollSurface`]: when the user drags past
//! the end of the content it shows a loading indicator below the content, reserves
//! room for it in the bottom inset and calls your load handler. Once the new page
//! is in place, [`InfiniteScroll::finish_infinite_load`] releases the room again.

pub mod animation;
pub mod attachment;
pub mod config;
pub mod driver;
pub mod geometry;
pub mod indicator;
pub mod inset_animator;
pub mod jobs;
pub mod machine;
pub mod state;
pub mod surface;

pub use attachment::InfiniteScroll;
pub use config::InfiniteScrollConfig;
pub use surface::{ScrollSurface, SurfaceEvent};

pub mod prelude {
    pub use crate::animation::{AnimationOptions, TimingFunction, Transition};
    pub use crate::driver::insert_frame_timer;
    pub use crate::geometry::{Insets, Point, Rect, Size};
    pub use crate::indicator::{ActivityIndicator, Color, IndicatorStyle, Spinner};
    pub use crate::state::ScrollInfiniteState;
    pub use crate::surface::MemorySurface;
    pub use crate::{InfiniteScroll, InfiniteScrollConfig, ScrollSurface, SurfaceEvent};
}
