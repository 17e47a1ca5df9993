// Example: viewport width driving how many cards show per side.
use carousel::{Carousel, CarouselOptions, Geometry, side_count_for_viewport};

fn main() {
    let geometry = Geometry::default();
    for width in [480u32, 768, 1072, 1280, 1920, 2560] {
        let k = side_count_for_viewport(width, &geometry);
        println!("viewport={width:>4} -> {k} per side ({} visible)", 2 * k + 1);
    }

    // The carousel recomputes automatically on resize unless side counts are pinned.
    let mut c = Carousel::new(CarouselOptions::new(12));
    c.set_viewport_width(2560);
    println!("auto sides at 2560: {:?}", c.side_counts());
    c.set_viewport_width(900);
    println!("auto sides at  900: {:?}", c.side_counts());
}
