use async_trait::async_trait;
use deckpacker_core::{BatchEncoder, CardRecord, EncodeError, EncoderFactory};
use genanki_rs::{Deck, Field, Model, Note, Template};
use tokio::task;

const MODEL_ID: i64 = 1_824_096_731_205;

fn front_back_model() -> Model {
    Model::new(
        MODEL_ID,
        "deckpacker front/back",
        vec![Field::new("Front"), Field::new("Back")],
        vec![Template::new("Card 1")
            .qfmt("{{Front}}")
            .afmt(r#"{{FrontSide}}<hr id="answer">{{Back}}"#)],
    )
}

/// Anki deck ids have to be stable across runs so a re-import updates the
/// existing deck instead of duplicating it; derive the id from the name.
fn deck_id(name: &str) -> i64 {
    // FNV-1a, folded into the positive i64 range
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in name.bytes() {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash & 0x7fff_ffff_ffff_ffff) as i64
}

#[derive(Default)]
pub struct ApkgEncoderFactory;

impl ApkgEncoderFactory {
    pub fn new() -> Self {
        Self
    }
}

impl EncoderFactory for ApkgEncoderFactory {
    fn encoder_for(&self, deck_name: &str) -> Box<dyn BatchEncoder> {
        Box::new(ApkgEncoder::new(deck_name))
    }
}

/// One batch's package under construction.
pub struct ApkgEncoder {
    model: Model,
    deck: Deck,
}

impl ApkgEncoder {
    fn new(deck_name: &str) -> Self {
        Self {
            model: front_back_model(),
            deck: Deck::new(deck_id(deck_name), deck_name, ""),
        }
    }
}

#[async_trait]
impl BatchEncoder for ApkgEncoder {
    fn add_card(&mut self, card: &CardRecord) -> Result<(), EncodeError> {
        let tags: Vec<&str> = card.tags.iter().map(String::as_str).collect();
        let note = Note::new_with_options(
            self.model.clone(),
            vec![card.front.as_str(), card.back.as_str()],
            None,
            if tags.is_empty() { None } else { Some(tags) },
            None,
        )
        .map_err(|e| EncodeError {
            message: e.to_string(),
        })?;
        self.deck.add_note(note);
        Ok(())
    }

    async fn finalize(self: Box<Self>) -> Result<Vec<u8>, EncodeError> {
        // genanki-rs only writes to a path; stage the package through a temp
        // directory and hand the bytes back so the sink decides where
        // packages live.
        let ApkgEncoder { mut deck, .. } = *self;
        task::spawn_blocking(move || {
            let dir = tempfile::tempdir().map_err(|e| EncodeError {
                message: e.to_string(),
            })?;
            let path = dir.path().join("batch.apkg");
            let path_str = path.to_str().ok_or_else(|| EncodeError {
                message: "temp path is not valid UTF-8".to_string(),
            })?;
            deck.write_to_file(path_str).map_err(|e| EncodeError {
                message: e.to_string(),
            })?;
            std::fs::read(&path).map_err(|e| EncodeError {
                message: e.to_string(),
            })
        })
        .await
        .map_err(|_| EncodeError {
            message: "encode task failed".to_string(),
        })?
    }
}
