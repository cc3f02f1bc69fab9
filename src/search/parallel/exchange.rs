//! Rank exchange between adjacent chain slots.
//!
//! One compare-and-swap pass over neighbouring slots per round. A swap carries
//! the worse state forward, so it is compared again with the next slot, but
//! the pass never restarts. Better states drift toward the cool end of the
//! ladder and worse states toward the hot end over many rounds.

use crate::model::SearchState;

/// Run a single adjacent-pair pass over `slots`, returning the swap count.
///
/// Slot `i` and `i + 1` swap when slot `i` scores strictly worse. This is
/// deliberately not a full sort.
pub fn rank_exchange<S: SearchState>(slots: &mut [S]) -> usize {
    let mut swaps = 0;
    for i in 0..slots.len().saturating_sub(1) {
        if slots[i].score() > slots[i + 1].score() {
            slots.swap(i, i + 1);
            swaps += 1;
        }
    }
    swaps
}
