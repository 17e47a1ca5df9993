// Example: minimal usage and circular navigation.
use carousel::{Carousel, CarouselOptions};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.set_viewport_width(1920);

    println!("current={} sides={:?}", c.current(), c.side_counts());

    c.next();
    c.next();
    println!("after 2x next: current={}", c.current());

    c.previous();
    c.previous();
    c.previous();
    println!(
        "after 3x previous: current={} direction={:?}",
        c.current(),
        c.nav_direction()
    );

    let mut cards = Vec::new();
    c.collect_cards(&mut cards);
    println!("visible window:");
    for card in &cards {
        println!(
            "  offset={:+} index={} center={}",
            card.offset, card.index, card.is_center
        );
    }
}
