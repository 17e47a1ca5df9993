use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::projection;
use crate::sizing::side_count_for_viewport;
use crate::wrap::wrap_index;
use crate::{
    CardSlot, CardSlotKeyed, CardTransform, CarouselOptions, FrameState, Geometry, InitialIndex,
    ItemKey, NavDirection, NavState, SideCounts, ViewportState,
};

/// A headless circular coverflow carousel.
///
/// This type is intentionally UI-agnostic:
/// - It holds no UI objects and never touches item payloads, only indices.
/// - Your adapter drives it by routing input events and viewport widths.
/// - Rendering is exposed via zero-allocation iteration APIs (`for_each_card*`).
///
/// The centered index is the single piece of navigation state and this type is its
/// sole mutator. Every navigation call funnels through [`wrap_index`], so the index
/// stays in `[0, count)` under any input, including repeated wrap-around.
///
/// For drag gestures and keyboard/click routing, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = ItemKey> {
    options: CarouselOptions<K>,
    current: usize,
    viewport_width: u32,
    auto_sides: SideCounts,
    nav_direction: Option<NavDirection>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K> Carousel<K> {
    /// Creates a new carousel from options.
    ///
    /// `options.initial_index` is resolved and wrapped immediately; when
    /// `options.initial_viewport_width` is set, responsive side counts are computed
    /// from it right away.
    pub fn new(options: CarouselOptions<K>) -> Self {
        let viewport_width = options.initial_viewport_width.unwrap_or(0);
        let current = wrap_index(options.initial_index.resolve(), options.count);
        cdebug!(
            count = options.count,
            enabled = options.enabled,
            current,
            "Carousel::new"
        );
        let mut c = Self {
            current,
            viewport_width,
            auto_sides: SideCounts::default(),
            nav_direction: None,
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.recompute_auto_sides();
        c
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    fn reset_to_initial(&mut self) {
        self.current = wrap_index(self.options.initial_index.resolve(), self.options.count);
        self.viewport_width = self.options.initial_viewport_width.unwrap_or(0);
        self.nav_direction = None;
        self.recompute_auto_sides();
    }

    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        let prev_count = self.options.count;
        let prev_geometry = self.options.geometry;
        let prev_sides = self.options.side_counts;
        let was_enabled = self.options.enabled;
        self.options = options;
        ctrace!(
            count = self.options.count,
            enabled = self.options.enabled,
            "Carousel::set_options"
        );

        if !self.options.enabled {
            self.current = wrap_index(self.options.initial_index.resolve(), self.options.count);
            self.viewport_width = 0;
            self.nav_direction = None;
        } else if !was_enabled {
            self.reset_to_initial();
        } else {
            if self.options.count != prev_count {
                self.current = wrap_index(self.current as i64, self.options.count);
            }
            if self.options.geometry != prev_geometry || self.options.side_counts != prev_sides {
                self.recompute_auto_sides();
            }
        }

        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    ///
    /// This is useful when you want to update multiple options at once while letting
    /// the carousel decide what needs to be recomputed (re-wrap/sizing/reset).
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_initial_index(&mut self, initial_index: i64) {
        self.options.initial_index = InitialIndex::Value(initial_index);
        self.notify();
    }

    pub fn set_initial_index_provider(
        &mut self,
        initial_index: impl Fn() -> i64 + Send + Sync + 'static,
    ) {
        self.options.initial_index = InitialIndex::Provider(Arc::new(initial_index));
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// This is recommended for UI adapters: one input event may update the viewport
    /// width and navigate in the same tick. Without batching, each setter may trigger
    /// `on_change`, which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.options.enabled == enabled {
            return;
        }
        self.options.enabled = enabled;
        if !enabled {
            self.current = wrap_index(self.options.initial_index.resolve(), self.options.count);
            self.viewport_width = 0;
            self.nav_direction = None;
        } else {
            self.reset_to_initial();
        }
        self.notify();
    }

    /// The centered item index, always in `[0, count)` for a non-empty collection.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The direction of the most recent navigation, if any.
    ///
    /// `go_to` reports the shorter wrap path to its target.
    pub fn nav_direction(&self) -> Option<NavDirection> {
        self.nav_direction
    }

    /// Advances the centered index by one step (wrapping past the end).
    pub fn next(&mut self) {
        if !self.options.enabled {
            return;
        }
        self.current = wrap_index(self.current as i64 + 1, self.options.count);
        self.nav_direction = Some(NavDirection::Forward);
        ctrace!(current = self.current, "next");
        self.notify();
    }

    /// Moves the centered index back by one step (wrapping past the start).
    pub fn previous(&mut self) {
        if !self.options.enabled {
            return;
        }
        self.current = wrap_index(self.current as i64 - 1, self.options.count);
        self.nav_direction = Some(NavDirection::Backward);
        ctrace!(current = self.current, "previous");
        self.notify();
    }

    /// Centers an arbitrary index, normalizing any integer via wrap-around.
    ///
    /// Out-of-range and negative values are accepted; no input is rejected.
    pub fn go_to(&mut self, i: i64) {
        if !self.options.enabled {
            return;
        }
        let total = self.options.count;
        let target = wrap_index(i, total);
        if target == self.current {
            return;
        }
        let forward_steps = wrap_index(target as i64 - self.current as i64, total);
        self.nav_direction = if forward_steps * 2 <= total {
            Some(NavDirection::Forward)
        } else {
            Some(NavDirection::Backward)
        };
        self.current = target;
        ctrace!(current = self.current, "go_to");
        self.notify();
    }

    /// Returns whether `i` (normalized via wrap-around) is the centered index.
    pub fn is_centered(&self, i: i64) -> bool {
        wrap_index(i, self.options.count) == self.current
    }

    /// The real item index rendered at relative offset `k` from the center.
    pub fn index_at_offset(&self, k: i32) -> usize {
        wrap_index(self.current as i64 + k as i64, self.options.count)
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_item_key)(index)
    }

    pub fn geometry(&self) -> Geometry {
        self.options.geometry
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        if self.options.geometry == geometry {
            return;
        }
        self.options.geometry = geometry;
        self.recompute_auto_sides();
        self.notify();
    }

    /// The active side counts: pinned ones when configured, responsive ones otherwise.
    pub fn side_counts(&self) -> SideCounts {
        self.options.side_counts.unwrap_or(self.auto_sides)
    }

    /// Pins explicit side counts (`Some`) or returns to responsive sizing (`None`).
    pub fn set_side_counts(&mut self, side_counts: Option<SideCounts>) {
        if self.options.side_counts == side_counts {
            return;
        }
        self.options.side_counts = side_counts;
        self.recompute_auto_sides();
        self.notify();
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Applies a viewport width update from your UI layer (mount or resize event).
    ///
    /// Responsive side counts are recomputed unless explicit counts are pinned.
    pub fn set_viewport_width(&mut self, width: u32) {
        if self.viewport_width == width {
            return;
        }
        self.viewport_width = width;
        self.recompute_auto_sides();
        ctrace!(width, "set_viewport_width");
        self.notify();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.current = wrap_index(self.current as i64, count);
        self.notify();
    }

    fn recompute_auto_sides(&mut self) {
        if self.options.side_counts.is_some() {
            return;
        }
        let s = side_count_for_viewport(self.viewport_width, &self.options.geometry);
        self.auto_sides = SideCounts::symmetric(s);
    }

    /// The projected 3D transform for the card at relative offset `k`.
    pub fn transform_for_offset(&self, k: i32) -> CardTransform {
        projection::transform_for_offset(k, &self.options.geometry)
    }

    /// Iterates the visible offset window `[-left ..= right]` in render order.
    ///
    /// Empty when the carousel is disabled or the collection is empty.
    pub fn for_each_offset(&self, mut f: impl FnMut(i32)) {
        if !self.options.enabled || self.options.count == 0 {
            return;
        }
        let sides = self.side_counts();
        for k in -(sides.left as i32)..=(sides.right as i32) {
            f(k);
        }
    }

    /// Iterates the visible cards in render order, resolving the real item index and
    /// centeredness for each offset.
    pub fn for_each_card(&self, mut f: impl FnMut(CardSlot)) {
        self.for_each_offset(|k| {
            let index = self.index_at_offset(k);
            f(CardSlot {
                index,
                offset: k,
                is_center: index == self.current,
            });
        });
    }

    /// Like [`Self::for_each_card`], but resolves each card's key as well.
    pub fn for_each_card_keyed(&self, mut f: impl FnMut(CardSlotKeyed<K>)) {
        self.for_each_offset(|k| {
            let index = self.index_at_offset(k);
            f(CardSlotKeyed {
                key: self.key_for(index),
                index,
                offset: k,
                is_center: index == self.current,
            });
        });
    }

    /// Collects the visible cards into `out` (clears `out` first).
    ///
    /// This is a convenience wrapper around [`Self::for_each_card`]. For maximum
    /// performance, prefer `for_each_card` and reuse a scratch buffer in your adapter.
    pub fn collect_cards(&self, out: &mut Vec<CardSlot>) {
        out.clear();
        self.for_each_card(|c| out.push(c));
    }

    /// Collects the visible keyed cards into `out` (clears `out` first).
    pub fn collect_cards_keyed(&self, out: &mut Vec<CardSlotKeyed<K>>) {
        out.clear();
        self.for_each_card_keyed(|c| out.push(c));
    }

    /// Returns a lightweight snapshot of the current viewport state.
    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            width: self.viewport_width,
        }
    }

    /// Returns a lightweight snapshot of the current navigation state.
    pub fn nav_state(&self) -> NavState {
        NavState {
            index: self.current,
        }
    }

    /// Returns a combined snapshot of viewport + navigation state.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            nav: self.nav_state(),
        }
    }

    /// Restores viewport geometry from a previously captured snapshot.
    pub fn restore_viewport_state(&mut self, viewport: ViewportState) {
        self.set_viewport_width(viewport.width);
    }

    /// Restores navigation state from a previously captured snapshot.
    ///
    /// Unlike `go_to`, this does not report a navigation direction.
    pub fn restore_nav_state(&mut self, nav: NavState) {
        let target = wrap_index(nav.index as i64, self.options.count);
        if target == self.current && self.nav_direction.is_none() {
            return;
        }
        self.current = target;
        self.nav_direction = None;
        self.notify();
    }

    /// Restores both viewport + navigation state from a previously captured snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.batch_update(|c| {
            c.restore_viewport_state(frame.viewport);
            c.restore_nav_state(frame.nav);
        });
    }
}
