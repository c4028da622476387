use crate::errors::{InvalidCardError, InvalidNameError};
use crate::models::{CardRecord, RawCard};

/// Characters Windows refuses in file names; deck names become file names.
pub const FORBIDDEN_CHARACTERS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Windows device names. Matched as substrings, not whole names, so any name
/// embedding one is rejected.
pub const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

pub fn validate_deck_name(name: &str) -> Result<(), InvalidNameError> {
    let has_forbidden = name.chars().any(|c| FORBIDDEN_CHARACTERS.contains(&c));
    let has_reserved = RESERVED_NAMES.iter().any(|r| name.contains(r));
    if has_forbidden || has_reserved {
        return Err(InvalidNameError {
            name: name.to_string(),
            forbidden: &FORBIDDEN_CHARACTERS,
            reserved: &RESERVED_NAMES,
        });
    }
    Ok(())
}

/// The single normalization step: a raw card either becomes a fully-typed
/// `CardRecord` or a structured failure carrying the original values.
/// `position` is 1-based and global to the card set.
pub fn validate_card(card: &RawCard, position: usize) -> Result<CardRecord, InvalidCardError> {
    let front = card.front.as_deref().filter(|s| !s.is_empty());
    let back = card.back.as_deref().filter(|s| !s.is_empty());
    match (front, back) {
        (Some(front), Some(back)) => Ok(CardRecord {
            front: front.to_string(),
            back: back.to_string(),
            tags: card.tags.clone(),
        }),
        _ => Err(InvalidCardError {
            position,
            front: card.front.clone(),
            back: card.back.clone(),
            tags: card.tags.clone(),
        }),
    }
}
