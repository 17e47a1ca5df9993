use carousel::CarouselOptions;
use carousel_adapter::{ClickAction, Controller, NavKey};

fn main() {
    // Example: one controller reconciling keyboard, clicks, and the render pass.
    let mut c = Controller::new(CarouselOptions::new_with_key(8, |i| 100u64 + i as u64))
        .with_on_select(|key, index| println!("selected key={key} index={index}"));
    c.on_viewport_width(1920);

    c.on_key(NavKey::ArrowRight);
    c.on_key(NavKey::ArrowRight);
    println!("after 2x ArrowRight: current={}", c.carousel().current());

    // Clicking an off-center card navigates to it.
    match c.on_card_click(-1) {
        ClickAction::Navigated(index) => println!("navigated to {index}"),
        other => println!("unexpected: {other:?}"),
    }

    // Clicking the centered card selects it and fires on_select.
    let action = c.on_card_click(0);
    println!("center click -> {action:?}");

    let mut cards = Vec::new();
    c.collect_render_cards(&mut cards);
    println!("render pass ({} cards):", cards.len());
    for card in &cards {
        println!(
            "  key={} offset={:+} center={} scale={:.2}",
            card.key, card.offset, card.is_center, card.transform.scale
        );
    }
}
