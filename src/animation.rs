//! Animation Driver.
//!
//! Every visual change is described by a [`Transition`] and handed to the
//! [`Timeline`], which owns all timers. Transitions are grouped by redraw
//! generation; opening a new generation drops everything scheduled by the
//! previous one, so no stale callback can touch a removed element.
//!
//! Time never moves on its own: the host advances the timeline with the
//! frame delta, which keeps the whole driver single-threaded and
//! deterministic.

pub mod easing;
pub mod timeline;
pub mod transition;

pub use easing::Easing;
pub use timeline::{Generation, Timeline, TransitionEnd};
pub use transition::Transition;
