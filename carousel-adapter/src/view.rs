use alloc::vec::Vec;

use carousel::{CardTransform, Carousel};

/// A fully resolved card for one visible offset: identity, centeredness, and the
/// projected 3D transform.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderCard<K> {
    pub key: K,
    pub index: usize,
    /// Signed distance from the centered position (`0` = center).
    pub offset: i32,
    pub is_center: bool,
    pub transform: CardTransform,
}

/// Iterates the carousel's render pass in ascending-offset order.
///
/// For each offset in the visible window this resolves the real item index, its key,
/// whether it is the centered card, and the projected transform. A view layer renders
/// the cards in this order and wires each one's click through
/// `Controller::on_card_click(offset)`.
pub fn for_each_render_card<K>(c: &Carousel<K>, mut f: impl FnMut(RenderCard<K>)) {
    c.for_each_card_keyed(|slot| {
        f(RenderCard {
            transform: c.transform_for_offset(slot.offset),
            key: slot.key,
            index: slot.index,
            offset: slot.offset,
            is_center: slot.is_center,
        });
    });
}

/// Collects the render pass into `out` (clears `out` first).
///
/// This is a convenience wrapper around [`for_each_render_card`]. For maximum
/// performance, prefer the iteration API and reuse a scratch buffer in your adapter.
pub fn collect_render_cards<K>(c: &Carousel<K>, out: &mut Vec<RenderCard<K>>) {
    out.clear();
    for_each_render_card(c, |card| out.push(card));
}
