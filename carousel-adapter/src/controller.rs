use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use carousel::{Carousel, CarouselOptions, NavDirection};

use crate::DragTracker;
use crate::view::{RenderCard, collect_render_cards, for_each_render_card};

/// A callback fired when the centered card is activated.
///
/// Receives the card's key and its item index; the caller decides the consequence
/// (navigation, detail view, etc.).
pub type OnSelectCallback<K> = Arc<dyn Fn(&K, usize) + Send + Sync>;

/// Navigation keys understood by [`Controller::on_key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

/// The outcome of a card click, reconciled against the centered index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction<K> {
    /// The clicked card was off-center; the carousel navigated to its index.
    Navigated(usize),
    /// The centered card was activated (selection, not navigation).
    Selected { key: K, index: usize },
    /// Disabled or empty carousel; nothing happened.
    Ignored,
}

/// A framework-neutral controller that wraps a `carousel::Carousel` and reconciles
/// the three input channels (keyboard, pointer drag, card clicks) into navigation.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_key` when a key event reaches this carousel instance
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` for drag gestures
/// - `on_card_click` when a rendered card is clicked
/// - `on_viewport_width` at mount and on resize
///
/// The controller is the instance-scoped input subscription: the view layer that owns
/// it decides which events reach it, and dropping it releases everything.
#[derive(Clone)]
pub struct Controller<K> {
    c: Carousel<K>,
    drag: DragTracker,
    on_select: Option<OnSelectCallback<K>>,
}

impl<K> Controller<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        Self {
            c: Carousel::new(options),
            drag: DragTracker::new(),
            on_select: None,
        }
    }

    pub fn from_carousel(c: Carousel<K>) -> Self {
        Self {
            c,
            drag: DragTracker::new(),
            on_select: None,
        }
    }

    pub fn carousel(&self) -> &Carousel<K> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<K> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<K> {
        self.c
    }

    pub fn with_on_select(
        mut self,
        on_select: impl Fn(&K, usize) + Send + Sync + 'static,
    ) -> Self {
        self.on_select = Some(Arc::new(on_select));
        self
    }

    pub fn set_on_select(
        &mut self,
        on_select: Option<impl Fn(&K, usize) + Send + Sync + 'static>,
    ) {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
    }

    /// Call this at mount and whenever the UI reports a viewport resize.
    pub fn on_viewport_width(&mut self, width: u32) {
        self.c.set_viewport_width(width);
    }

    /// Routes a navigation key: right arrow advances, left arrow goes back.
    pub fn on_key(&mut self, key: NavKey) {
        match key {
            NavKey::ArrowRight => self.c.next(),
            NavKey::ArrowLeft => self.c.previous(),
        }
    }

    /// The `next` navigation control.
    pub fn on_nav_next(&mut self) {
        self.c.next();
    }

    /// The `previous` navigation control.
    pub fn on_nav_previous(&mut self) {
        self.c.previous();
    }

    /// Starts a drag gesture at pointer position `x`.
    pub fn on_pointer_down(&mut self, x: f32) {
        self.drag.pointer_down(x);
    }

    /// Feeds a pointer position while dragging and applies any resulting navigation.
    ///
    /// The threshold comes from the carousel's geometry
    /// (`0.35 × (card_width + gap)`). Returns the applied direction, if any.
    pub fn on_pointer_move(&mut self, x: f32) -> Option<NavDirection> {
        let threshold = self.c.geometry().drag_threshold();
        let dir = self.drag.pointer_move(x, threshold)?;
        match dir {
            NavDirection::Forward => self.c.next(),
            NavDirection::Backward => self.c.previous(),
        }
        Some(dir)
    }

    /// Ends the drag gesture (pointer up/cancel/leave). Never navigates.
    pub fn on_pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Reconciles a click on the card rendered at window offset `offset`.
    ///
    /// An off-center card becomes the navigation target; the centered card is a
    /// selection and fires the `on_select` callback instead of navigating.
    pub fn on_card_click(&mut self, offset: i32) -> ClickAction<K> {
        if !self.c.enabled() || self.c.count() == 0 {
            return ClickAction::Ignored;
        }
        let index = self.c.index_at_offset(offset);
        if index == self.c.current() {
            let key = self.c.key_for(index);
            if let Some(cb) = &self.on_select {
                cb(&key, index);
            }
            ClickAction::Selected { key, index }
        } else {
            self.c.go_to(index as i64);
            ClickAction::Navigated(index)
        }
    }

    /// Iterates the fully projected render pass (see [`for_each_render_card`]).
    pub fn for_each_render_card(&self, f: impl FnMut(RenderCard<K>)) {
        for_each_render_card(&self.c, f);
    }

    /// Collects the fully projected render pass into `out` (clears `out` first).
    pub fn collect_render_cards(&self, out: &mut Vec<RenderCard<K>>) {
        collect_render_cards(&self.c, out);
    }
}

impl<K: fmt::Debug> fmt::Debug for Controller<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("carousel", &self.c)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}
