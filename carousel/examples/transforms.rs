// Example: projecting window offsets into coverflow transforms.
use carousel::{Geometry, transform_for_offset};

fn main() {
    let geometry = Geometry::default();
    for offset in -3..=3 {
        let t = transform_for_offset(offset, &geometry);
        println!(
            "offset={offset:+}: x={:+7.1} z={:+7.1} rot={:+5.1} scale={:.2} opacity={:.2} z_index={}",
            t.translate_x, t.translate_z, t.rotate_y, t.scale, t.opacity, t.z_index
        );
    }
}
