use deckpacker_apkg::ApkgEncoderFactory;
use deckpacker_core::{BatchEncoder, CardRecord, EncoderFactory};

fn record(front: &str, back: &str, tags: &[&str]) -> CardRecord {
    CardRecord {
        front: front.to_string(),
        back: back.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
async fn encodes_batch_to_package_bytes() {
    let factory = ApkgEncoderFactory::new();
    let mut encoder = factory.encoder_for("Capitals");
    encoder
        .add_card(&record("Argentina", "Buenos Aires", &["geo"]))
        .unwrap();
    encoder.add_card(&record("France", "Paris", &[])).unwrap();

    let bytes = encoder.finalize().await.unwrap();
    assert!(!bytes.is_empty());
    // an .apkg is a zip archive
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn same_input_yields_a_package_every_time() {
    let factory = ApkgEncoderFactory::new();
    for _ in 0..2 {
        let mut encoder = factory.encoder_for("Repeat");
        encoder.add_card(&record("a", "b", &[])).unwrap();
        let bytes = encoder.finalize().await.unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
