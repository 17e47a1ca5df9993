//! A headless circular coverflow carousel engine.
//!
//! For adapter-level utilities (drag gestures, input routing, render passes), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the core state and math of a coverflow carousel: circular
//! wrap-around index arithmetic, a responsive visible-window heuristic, and per-offset
//! 3D transform projection (translation, depth, tilt, scale, stacking, opacity).
//!
//! It is UI-agnostic. A GUI/TUI/web layer is expected to provide:
//! - the item count (item payloads are never inspected)
//! - the viewport width (at mount and on resize)
//! - input events, routed through an adapter into `next`/`previous`/`go_to`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod options;
mod projection;
mod sizing;
mod state;
mod types;
mod wrap;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use options::{CarouselOptions, InitialIndex, OnChangeCallback};
pub use projection::transform_for_offset;
pub use sizing::{MAX_SIDE_COUNT, side_count_for_viewport};
pub use state::{FrameState, NavState, ViewportState};
pub use types::{
    CardSlot, CardSlotKeyed, CardTransform, Geometry, ItemKey, NavDirection, SideCounts,
};
pub use wrap::wrap_index;
