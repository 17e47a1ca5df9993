/// Maps any integer to a valid item index under circular wrap-around.
///
/// The result is congruent to `i mod total` and always in `[0, total)`, no matter how
/// far out of range (or how negative) `i` is. `total == 0` is a degenerate collection
/// and always maps to `0`.
///
/// This is the foundation every navigation and indexing operation funnels through.
pub fn wrap_index(i: i64, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    let t = total as i64;
    (((i % t) + t) % t) as usize
}
