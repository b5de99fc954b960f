#![cfg(feature = "derive")]

use bosun::Registry;
use csv::ReaderBuilder;

#[test]
fn parse_fixture_table() {
    const PATH: &str = "fixtures/sentences.csv";

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    let registry = Registry::default();
    let mut rows = 0;

    for record in reader.records() {
        let record = record.unwrap();
        let (sentence, expected) = (&record[0], &record[1]);

        let outcome = match registry.parse(sentence) {
            Ok(_) => "ok".to_string(),
            Err(rejection) => rejection.to_string(),
        };

        assert_eq!(outcome, expected, "{sentence}");
        rows += 1;
    }

    assert!(rows > 0);
}

#[test]
fn decoding_again_is_idempotent() {
    const PATH: &str = "fixtures/sentences.csv";

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    let registry = Registry::default();

    for record in reader.records() {
        let record = record.unwrap();
        if &record[1] != "ok" {
            continue;
        }

        let mut decoded = registry.parse(&record[0]).unwrap();
        let first = format!("{decoded:?}");

        bosun::decode(&mut *decoded, &record[0]).unwrap();
        assert_eq!(format!("{decoded:?}"), first);
    }
}
