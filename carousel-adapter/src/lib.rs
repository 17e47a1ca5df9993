//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core math and state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A drag tracker reconciling incremental pointer deltas against the navigation
//!   threshold
//! - A controller that routes keyboard, pointer, and click input into a single
//!   carousel instance
//! - Render-pass helpers resolving each visible offset into a fully projected card
//!
//! Keyboard events are routed through the controller rather than any global handler:
//! each controller is an instance-scoped subscription owned by the embedding view
//! layer, so multiple carousels never respond to the same keypress, and dropping the
//! controller is the teardown.
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod drag;
mod view;


pub use controller::{ClickAction, Controller, NavKey, OnSelectCallback};
pub use drag::DragTracker;
pub use view::{RenderCard, collect_render_cards, for_each_render_card};
