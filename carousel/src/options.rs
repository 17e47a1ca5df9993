use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{Geometry, ItemKey, SideCounts};

/// A callback fired when a carousel state update occurs.
pub type OnChangeCallback<K> = Arc<dyn Fn(&Carousel<K>) + Send + Sync>;

/// Initial centered index configuration.
#[derive(Clone)]
pub enum InitialIndex {
    /// A fixed initial index (any integer; normalized via wrap-around).
    Value(i64),
    /// A lazily evaluated initial index provider (called by `Carousel::new`).
    ///
    /// Useful when the starting card comes from a route/deep link resolved at mount.
    Provider(Arc<dyn Fn() -> i64 + Send + Sync>),
}

impl InitialIndex {
    pub(crate) fn resolve(&self) -> i64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialIndex {
    fn default() -> Self {
        Self::Value(0)
    }
}

impl core::fmt::Debug for InitialIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s so
/// adapters can update a few fields and call `Carousel::set_options` without
/// reallocating closures.
pub struct CarouselOptions<K = ItemKey> {
    /// Total number of items. The carousel never inspects item payloads, only indices.
    pub count: usize,
    pub get_item_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Visual geometry consumed by transform projection and the drag threshold.
    pub geometry: Geometry,

    /// Explicit side counts. When set, responsive window sizing is bypassed and
    /// viewport width changes produce no recomputation.
    pub side_counts: Option<SideCounts>,

    /// Viewport width applied at construction; resize events update it afterwards via
    /// `Carousel::set_viewport_width`.
    pub initial_viewport_width: Option<u32>,

    /// Initial centered index (normalized via wrap-around).
    pub initial_index: InitialIndex,

    /// Enables/disables the carousel. When disabled, the visible window is empty and
    /// navigation is a no-op.
    pub enabled: bool,

    /// Optional callback fired when the carousel's internal state changes.
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            get_item_key: Arc::clone(&self.get_item_key),
            geometry: self.geometry,
            side_counts: self.side_counts,
            initial_viewport_width: self.initial_viewport_width,
            initial_index: self.initial_index.clone(),
            enabled: self.enabled,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions<ItemKey> {
    /// Creates options for a carousel keyed by index (`ItemKey = u64`).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            get_item_key: Arc::new(|i| i as u64),
            geometry: Geometry::default(),
            side_counts: None,
            initial_viewport_width: None,
            initial_index: InitialIndex::default(),
            enabled: true,
            on_change: None,
        }
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_item_key(i)` should return a stable identity for the item at index `i`,
    /// e.g. a slug the selection callback can route on.
    pub fn new_with_key(count: usize, get_item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        Self {
            count,
            get_item_key: Arc::new(get_item_key),
            geometry: Geometry::default(),
            side_counts: None,
            initial_viewport_width: None,
            initial_index: InitialIndex::default(),
            enabled: true,
            on_change: None,
        }
    }

    pub fn with_get_item_key(mut self, get_item_key: impl Fn(usize) -> K + Send + Sync + 'static) -> Self {
        self.get_item_key = Arc::new(get_item_key);
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_card_width(mut self, card_width: f32) -> Self {
        self.geometry.card_width = card_width;
        self
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.geometry.gap = gap;
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.geometry.depth = depth;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.geometry.tilt = tilt;
        self
    }

    /// Pins explicit side counts, bypassing responsive window sizing.
    pub fn with_side_counts(mut self, side_counts: Option<SideCounts>) -> Self {
        self.side_counts = side_counts;
        self
    }

    pub fn with_initial_viewport_width(mut self, width: Option<u32>) -> Self {
        self.initial_viewport_width = width;
        self
    }

    pub fn with_initial_index(mut self, initial_index: InitialIndex) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_initial_index_value(mut self, initial_index: i64) -> Self {
        self.initial_index = InitialIndex::Value(initial_index);
        self
    }

    pub fn with_initial_index_provider(
        mut self,
        initial_index: impl Fn() -> i64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_index = InitialIndex::Provider(Arc::new(initial_index));
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("geometry", &self.geometry)
            .field("side_counts", &self.side_counts)
            .field("initial_viewport_width", &self.initial_viewport_width)
            .field("initial_index", &self.initial_index)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
