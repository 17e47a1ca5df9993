use crate::*;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

static INITIAL_INDEX_PROVIDER_CALLED: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i64(&mut self, start: i64, end_exclusive: i64) -> i64 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive - start) as u64;
        start + (self.next_u64() % span) as i64
    }
}

fn geometry(card_width: f32, gap: f32) -> Geometry {
    Geometry {
        card_width,
        gap,
        ..Geometry::default()
    }
}

#[test]
fn wrap_index_stays_in_range_and_is_periodic() {
    for total in 1..10usize {
        for i in -100i64..100 {
            let w = wrap_index(i, total);
            assert!(w < total, "wrap_index({i}, {total}) = {w}");
            assert_eq!(w, wrap_index(i + total as i64, total));
            assert_eq!(w, wrap_index(i - total as i64, total));
        }
    }
}

#[test]
fn wrap_index_degenerate_total_maps_to_zero() {
    assert_eq!(wrap_index(0, 0), 0);
    assert_eq!(wrap_index(-7, 0), 0);
    assert_eq!(wrap_index(i64::MAX, 0), 0);
}

#[test]
fn next_and_previous_round_trip() {
    for total in 1..9usize {
        let mut c = Carousel::new(CarouselOptions::new(total));
        for _ in 0..total {
            c.next();
        }
        assert_eq!(c.current(), 0);
        for _ in 0..total {
            c.previous();
        }
        assert_eq!(c.current(), 0);
    }
}

#[test]
fn previous_from_zero_wraps_to_last() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.previous();
    assert_eq!(c.current(), 7);
    assert_eq!(c.nav_direction(), Some(NavDirection::Backward));
}

#[test]
fn go_to_normalizes_any_integer() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.go_to(-1);
    assert_eq!(c.index_at_offset(0), 7);
    c.go_to(19);
    assert_eq!(c.index_at_offset(0), 3);
    c.go_to(3);
    assert_eq!(c.current(), 3);
}

#[test]
fn go_to_reports_shorter_wrap_path_direction() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.go_to(7); // one step backward beats seven forward
    assert_eq!(c.nav_direction(), Some(NavDirection::Backward));
    c.go_to(1); // wraps forward past the end
    assert_eq!(c.nav_direction(), Some(NavDirection::Forward));
}

#[test]
fn index_at_offset_wraps_both_sides() {
    let c = Carousel::new(CarouselOptions::new(8));
    assert_eq!(c.index_at_offset(-1), 7);
    assert_eq!(c.index_at_offset(-2), 6);
    assert_eq!(c.index_at_offset(1), 1);
    assert_eq!(c.index_at_offset(9), 1);
}

#[test]
fn is_centered_accepts_unnormalized_indices() {
    let mut c = Carousel::new(CarouselOptions::new(5));
    c.go_to(2);
    assert!(c.is_centered(2));
    assert!(c.is_centered(7));
    assert!(c.is_centered(-3));
    assert!(!c.is_centered(3));
}

#[test]
fn z_index_strictly_decreases_with_distance() {
    let g = Geometry::default();
    let mut prev = transform_for_offset(0, &g).z_index;
    for k in 1..=6 {
        let t = transform_for_offset(k, &g);
        assert!(t.z_index < prev);
        assert_eq!(t.z_index, transform_for_offset(-k, &g).z_index);
        prev = t.z_index;
    }
}

#[test]
fn center_card_has_max_scale_and_opacity() {
    let g = Geometry::default();
    let center = transform_for_offset(0, &g);
    assert_eq!(center.scale, 1.0);
    assert_eq!(center.opacity, 1.0);
    assert_eq!(center.translate_x, 0.0);
    assert_eq!(center.translate_z, 0.0);
    assert_eq!(center.rotate_y, 0.0);
    for k in 1..=6 {
        let t = transform_for_offset(k, &g);
        assert!(t.scale < center.scale);
        assert!(t.opacity < center.opacity);
    }
}

#[test]
fn translate_x_is_antisymmetric() {
    let g = Geometry::default();
    for k in 1..=6 {
        let pos = transform_for_offset(k, &g);
        let neg = transform_for_offset(-k, &g);
        assert_eq!(pos.translate_x, -neg.translate_x);
        assert_eq!(pos.rotate_y, -neg.rotate_y);
    }
}

#[test]
fn scale_and_opacity_bottom_out_at_their_floors() {
    let g = Geometry::default();
    let far = transform_for_offset(20, &g);
    assert_eq!(far.scale, 0.82);
    assert_eq!(far.opacity, 0.25);
    assert_eq!(far.max_width, g.card_width);
}

#[test]
fn transform_numbers_match_geometry() {
    let g = geometry(560.0, 64.0);
    let t = transform_for_offset(2, &g);
    // translate_x = k * (gap + 0.32 * card_width) = 2 * (64 + 179.2)
    assert!((t.translate_x - 486.4).abs() < 1e-3);
    assert_eq!(t.translate_z, -2.0 * g.depth);
    assert_eq!(t.rotate_y, -2.0 * g.tilt);
    assert_eq!(t.z_index, 998);
}

#[test]
fn default_geometry_and_drag_threshold() {
    let g = Geometry::default();
    assert_eq!(g.card_width, 420.0);
    assert_eq!(g.gap, 32.0);
    assert_eq!(g.depth, 120.0);
    assert_eq!(g.tilt, 14.0);

    let g = geometry(560.0, 64.0);
    assert!((g.drag_threshold() - 218.4).abs() < 1e-3);
}

#[test]
fn responsive_sizing_for_wide_viewport() {
    // usable = 1920 - 112 = 1808; per-side unit = 560 * 0.6 + 64 = 400.
    // k=4 needs 560 + 1600 = 2160 (too wide); k=3 needs 560 + 1200 = 1760.
    let g = geometry(560.0, 64.0);
    assert_eq!(side_count_for_viewport(1920, &g), 3);
    assert_eq!(side_count_for_viewport(2272, &g), 4);
    assert_eq!(side_count_for_viewport(2271, &g), 3);
}

#[test]
fn responsive_sizing_bottoms_out_at_zero() {
    let g = geometry(560.0, 64.0);
    // k=1 needs usable >= 960, i.e. viewport >= 1072.
    assert_eq!(side_count_for_viewport(1072, &g), 1);
    assert_eq!(side_count_for_viewport(1071, &g), 0);
    assert_eq!(side_count_for_viewport(0, &g), 0);
}

#[test]
fn viewport_width_drives_auto_side_counts() {
    let mut c = Carousel::new(CarouselOptions::new(8).with_card_width(560.0).with_gap(64.0));
    assert_eq!(c.side_counts(), SideCounts::symmetric(0));

    c.set_viewport_width(1920);
    assert_eq!(c.side_counts(), SideCounts::symmetric(3));
    assert_eq!(c.viewport_width(), 1920);

    c.set_viewport_width(800);
    assert_eq!(c.side_counts(), SideCounts::symmetric(0));
}

#[test]
fn pinned_side_counts_bypass_resize() {
    let pinned = SideCounts { left: 4, right: 3 };
    let mut c = Carousel::new(CarouselOptions::new(8).with_side_counts(Some(pinned)));
    c.set_viewport_width(320);
    assert_eq!(c.side_counts(), pinned);
    c.set_viewport_width(5000);
    assert_eq!(c.side_counts(), pinned);

    // Unpinning falls back to the responsive counts for the current width.
    c.set_side_counts(None);
    assert_eq!(c.side_counts(), SideCounts::symmetric(4));
}

#[test]
fn offset_window_is_ascending_and_sized_by_side_counts() {
    let c = Carousel::new(
        CarouselOptions::new(8).with_side_counts(Some(SideCounts { left: 2, right: 2 })),
    );
    let mut offsets = Vec::new();
    c.for_each_offset(|k| offsets.push(k));
    assert_eq!(offsets, [-2, -1, 0, 1, 2]);
    assert_eq!(c.side_counts().visible_count(), offsets.len());
}

#[test]
fn cards_resolve_wrapped_indices_and_center_flag() {
    let c = Carousel::new(
        CarouselOptions::new(8).with_side_counts(Some(SideCounts { left: 2, right: 2 })),
    );
    let mut cards = Vec::new();
    c.collect_cards(&mut cards);

    let indices: Vec<usize> = cards.iter().map(|s| s.index).collect();
    assert_eq!(indices, [6, 7, 0, 1, 2]);
    let centers: Vec<bool> = cards.iter().map(|s| s.is_center).collect();
    assert_eq!(centers, [false, false, true, false, false]);
}

#[test]
fn keyed_cards_follow_the_key_mapping() {
    let c = Carousel::new(
        CarouselOptions::new_with_key(4, |i| 100u64 + i as u64)
            .with_side_counts(Some(SideCounts { left: 1, right: 1 })),
    );
    let mut cards = Vec::new();
    c.collect_cards_keyed(&mut cards);
    let keys: Vec<u64> = cards.iter().map(|s| s.key).collect();
    assert_eq!(keys, [103, 100, 101]);
}

#[test]
fn window_wider_than_collection_repeats_indices() {
    let c = Carousel::new(
        CarouselOptions::new(3).with_side_counts(Some(SideCounts { left: 2, right: 2 })),
    );
    let mut cards = Vec::new();
    c.collect_cards(&mut cards);
    let indices: Vec<usize> = cards.iter().map(|s| s.index).collect();
    assert_eq!(indices, [1, 2, 0, 1, 2]);
    // Only the true center offset carries the flag for duplicated neighbors,
    // but a repeat of the centered index is still reported as centered.
    let centers: Vec<bool> = cards.iter().map(|s| s.is_center).collect();
    assert_eq!(centers, [false, false, true, false, false]);
}

#[test]
fn single_item_collection_is_centered_at_every_offset() {
    let c = Carousel::new(
        CarouselOptions::new(1).with_side_counts(Some(SideCounts { left: 1, right: 1 })),
    );
    let mut cards = Vec::new();
    c.collect_cards(&mut cards);
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|s| s.index == 0 && s.is_center));
}

#[test]
fn empty_collection_renders_nothing_and_never_panics() {
    let mut c = Carousel::new(CarouselOptions::new(0));
    c.next();
    c.previous();
    c.go_to(-42);
    assert_eq!(c.current(), 0);

    let mut cards = Vec::new();
    c.collect_cards(&mut cards);
    assert!(cards.is_empty());
}

#[test]
fn disabled_carousel_ignores_navigation_and_renders_nothing() {
    let mut c = Carousel::new(
        CarouselOptions::new(8).with_side_counts(Some(SideCounts { left: 1, right: 1 })),
    );
    c.go_to(3);
    c.set_enabled(false);
    assert_eq!(c.current(), 0);

    c.next();
    c.go_to(5);
    assert_eq!(c.current(), 0);

    let mut cards = Vec::new();
    c.collect_cards(&mut cards);
    assert!(cards.is_empty());

    c.set_enabled(true);
    assert_eq!(c.current(), 0);
    c.collect_cards(&mut cards);
    assert_eq!(cards.len(), 3);
}

#[test]
fn set_count_rewraps_the_centered_index() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.go_to(7);
    c.set_count(5);
    assert_eq!(c.current(), 2);
    c.set_count(0);
    assert_eq!(c.current(), 0);
}

#[test]
fn initial_index_value_is_wrapped() {
    let c = Carousel::new(CarouselOptions::new(8).with_initial_index_value(-1));
    assert_eq!(c.current(), 7);
}

#[test]
fn initial_index_provider_is_used() {
    INITIAL_INDEX_PROVIDER_CALLED.store(0, Ordering::Relaxed);
    let c = Carousel::new(CarouselOptions::new(8).with_initial_index_provider(|| {
        INITIAL_INDEX_PROVIDER_CALLED.fetch_add(1, Ordering::Relaxed);
        10
    }));
    assert_eq!(c.current(), 2);
    assert!(INITIAL_INDEX_PROVIDER_CALLED.load(Ordering::Relaxed) >= 1);
}

#[test]
fn on_change_fires_per_navigation() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let mut c = Carousel::new(CarouselOptions::new(8).with_on_change(Some(move |_: &Carousel| {
        counter.fetch_add(1, Ordering::Relaxed);
    })));

    let before = hits.load(Ordering::Relaxed);
    c.next();
    c.previous();
    c.go_to(4);
    assert_eq!(hits.load(Ordering::Relaxed), before + 3);
}

#[test]
fn batch_update_coalesces_notifications() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let mut c = Carousel::new(CarouselOptions::new(8).with_on_change(Some(move |_: &Carousel| {
        counter.fetch_add(1, Ordering::Relaxed);
    })));

    let before = hits.load(Ordering::Relaxed);
    c.batch_update(|c| {
        c.set_viewport_width(1920);
        c.next();
        c.next();
    });
    assert_eq!(hits.load(Ordering::Relaxed), before + 1);
    assert_eq!(c.current(), 2);
}

#[test]
fn frame_state_round_trips() {
    let mut c = Carousel::new(CarouselOptions::new(8).with_card_width(560.0).with_gap(64.0));
    c.set_viewport_width(1920);
    c.go_to(5);
    let frame = c.frame_state();
    assert_eq!(frame.nav.index, 5);
    assert_eq!(frame.viewport.width, 1920);

    let mut fresh = Carousel::new(CarouselOptions::new(8).with_card_width(560.0).with_gap(64.0));
    fresh.restore_frame_state(frame);
    assert_eq!(fresh.current(), 5);
    assert_eq!(fresh.viewport_width(), 1920);
    assert_eq!(fresh.side_counts(), SideCounts::symmetric(3));
    assert_eq!(fresh.nav_direction(), None);
}

#[test]
fn update_options_rewraps_after_count_change() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.go_to(6);
    c.update_options(|o| o.count = 4);
    assert_eq!(c.current(), 2);
    assert_eq!(c.count(), 4);
}

#[test]
fn randomized_navigation_never_leaves_range() {
    let mut rng = Lcg::new(0x5eed);
    for total in 1..12usize {
        let mut c = Carousel::new(CarouselOptions::new(total));
        for _ in 0..200 {
            match rng.next_u64() % 3 {
                0 => c.next(),
                1 => c.previous(),
                _ => c.go_to(rng.gen_range_i64(-1000, 1000)),
            }
            assert!(c.current() < total);
            assert_eq!(c.index_at_offset(0), c.current());
        }
    }
}
