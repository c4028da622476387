use deckpacker_core::{split, RawCard};
use std::num::NonZeroUsize;

fn cards(n: usize) -> Vec<RawCard> {
    (0..n)
        .map(|i| RawCard {
            front: Some(format!("front {i}")),
            back: Some(format!("back {i}")),
            tags: Vec::new(),
        })
        .collect()
}

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn splits_120_by_50_into_three() {
    let v = cards(120);
    let batches = split(&v, size(50));

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].cards.len(), 50);
    assert_eq!(batches[1].cards.len(), 50);
    assert_eq!(batches[2].cards.len(), 20);

    assert_eq!(batches[0].index, 1);
    assert_eq!(batches[2].index, 3);
    assert_eq!(batches[1].start, 50);
    assert_eq!(batches[1].end, 100);
    assert_eq!(batches[2].end, 120);
}

#[test]
fn exact_division_keeps_full_last_batch() {
    let v = cards(100);
    let batches = split(&v, size(50));
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].cards.len(), 50);
}

#[test]
fn short_input_yields_single_batch() {
    let v = cards(30);
    let batches = split(&v, size(50));
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].index, 1);
    assert_eq!(batches[0].start, 0);
    assert_eq!(batches[0].end, 30);
    assert_eq!(batches[0].cards.len(), 30);
}

#[test]
fn empty_input_yields_no_batches() {
    let batches = split(&[], size(50));
    assert!(batches.is_empty());
}

#[test]
fn concatenation_reproduces_input_order() {
    let v = cards(23);
    let batches = split(&v, size(7));
    assert_eq!(batches.len(), 4);

    let rebuilt: Vec<_> = batches
        .iter()
        .flat_map(|b| b.cards.iter())
        .map(|c| c.front.clone())
        .collect();
    let original: Vec<_> = v.iter().map(|c| c.front.clone()).collect();
    assert_eq!(rebuilt, original);
}

#[test]
fn batches_cover_disjoint_ranges() {
    let v = cards(17);
    let batches = split(&v, size(5));
    for pair in batches.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert_eq!(pair[0].index + 1, pair[1].index);
    }
    assert_eq!(batches.first().unwrap().start, 0);
    assert_eq!(batches.last().unwrap().end, 17);
}

#[test]
fn batch_size_one() {
    let v = cards(3);
    let batches = split(&v, size(1));
    assert_eq!(batches.len(), 3);
    assert!(batches.iter().all(|b| b.cards.len() == 1));
}
