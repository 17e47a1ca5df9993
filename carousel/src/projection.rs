use crate::{CardTransform, Geometry};

/// Projects a signed window offset into a 3D card transform.
///
/// Pure function of `offset` and the geometry: lateral translation grows linearly with
/// the offset, depth/scale/opacity fall off with its absolute value (scale floored at
/// 0.82, opacity at 0.25 so far cards stay legible), and tilt is sign-reversed so both
/// sides lean toward the center. The centered card always wins the stacking order.
///
/// `max_width` stays at `card_width` for every offset; the scale handles the visual
/// size reduction.
pub fn transform_for_offset(offset: i32, geometry: &Geometry) -> CardTransform {
    let abs = offset.unsigned_abs() as f32;
    let k = offset as f32;

    CardTransform {
        translate_x: k * (geometry.gap + geometry.card_width * 0.32),
        translate_z: -abs * geometry.depth,
        rotate_y: -k * geometry.tilt,
        scale: (1.0 - abs * 0.08).max(0.82),
        z_index: 1000 - offset.abs(),
        opacity: (1.0 - abs * 0.18).max(0.25),
        max_width: geometry.card_width,
    }
}
