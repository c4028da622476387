use crate::models::RawCard;
use std::num::NonZeroUsize;

/// A contiguous, order-preserving slice of a card set. `index` is 1-based;
/// `start..end` is the global 0-based range covered.
#[derive(Clone, Copy, Debug)]
pub struct Batch<'a> {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub cards: &'a [RawCard],
}

/// Partitions `cards` into `ceil(len / batch_size)` batches. Every card lands
/// in exactly one batch and concatenating the batches in index order
/// reproduces the input order. Empty input yields no batches.
pub fn split(cards: &[RawCard], batch_size: NonZeroUsize) -> Vec<Batch<'_>> {
    let size = batch_size.get();
    let total = cards.len().div_ceil(size);
    (0..total)
        .map(|i| {
            let start = i * size;
            let end = ((i + 1) * size).min(cards.len());
            Batch {
                index: i + 1,
                start,
                end,
                cards: &cards[start..end],
            }
        })
        .collect()
}
