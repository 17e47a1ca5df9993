use carousel::CarouselOptions;
use carousel_adapter::Controller;

fn main() {
    // Example: feeding a pointer gesture through the controller.
    //
    // An adapter would:
    // - call on_pointer_down on mousedown/touchstart
    // - call on_pointer_move with each clientX while dragging
    // - call on_pointer_up on mouseup/touchend/mouseleave
    // - re-render whenever a move returns Some(direction)
    let mut c = Controller::new(CarouselOptions::new(8));
    c.on_viewport_width(1280);

    c.on_pointer_down(800.0);
    let mut x = 800.0f32;
    while x > -800.0 {
        x -= 40.0;
        if let Some(dir) = c.on_pointer_move(x) {
            println!("x={x:>6.0} -> {dir:?}, current={}", c.carousel().current());
        }
    }
    c.on_pointer_up();

    println!("done: current={}", c.carousel().current());
}
