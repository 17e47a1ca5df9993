use crate::Geometry;

/// Upper bound for the responsive per-side neighbor count.
pub const MAX_SIDE_COUNT: u8 = 4;

/// Lateral padding reserved on each side of the viewport (nav buttons, shadows).
const SIDE_PADDING: f32 = 56.0;

/// Computes how many neighbor cards fit on each side of the center for a viewport width.
///
/// Lateral cards overlap the center visually, so each one costs less than a full card
/// width: the per-side unit is `0.6 × card_width + gap`. Returns the largest
/// `k ∈ {4, 3, 2, 1, 0}` such that `usable >= card_width + k × per_side_unit`, where
/// `usable` is the viewport width minus two lateral paddings. `0` means only the
/// centered card fits.
///
/// The heuristic is symmetric; callers apply the result to both sides. It is bypassed
/// entirely when explicit side counts are pinned in the options.
pub fn side_count_for_viewport(viewport_width: u32, geometry: &Geometry) -> u8 {
    if !(geometry.card_width > 0.0) || !(geometry.gap >= 0.0) {
        cwarn!(
            card_width = geometry.card_width,
            gap = geometry.gap,
            "side_count_for_viewport: degenerate geometry"
        );
        debug_assert!(
            geometry.card_width > 0.0 && geometry.gap >= 0.0,
            "side_count_for_viewport: degenerate geometry (card_width={}, gap={})",
            geometry.card_width,
            geometry.gap
        );
        return 0;
    }

    let usable = (viewport_width as f32 - SIDE_PADDING * 2.0).max(0.0);
    let per_side_unit = geometry.card_width * 0.6 + geometry.gap;

    let mut k = MAX_SIDE_COUNT;
    while k > 0 {
        if usable >= geometry.card_width + per_side_unit * k as f32 {
            return k;
        }
        k -= 1;
    }
    0
}
