use std::path::PathBuf;
use widget_test_support::parse_cases::{Channel, load_parse_cases, mode_from_label};
use widgets::number::{parse, parse_entry};

fn corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("parse_cases.json")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn parse_corpus_matches_expectations() {
    let cases = load_parse_cases(&corpus_path());
    assert!(!cases.is_empty(), "parse corpus is empty");

    let mut failures = Vec::new();
    for case in &cases {
        let Ok(mode) = mode_from_label(&case.mode) else {
            failures.push(format!("{}: bad mode '{}'", case.id, case.mode));
            continue;
        };
        let actual = match case.channel {
            Channel::Value => parse(&case.input, mode),
            Channel::Entry => parse_entry(&case.input, mode),
        };
        let ok = match (actual, case.expected) {
            (None, None) => true,
            (Some(a), Some(b)) => close(a, b),
            _ => false,
        };
        if !ok {
            failures.push(format!(
                "{}: input {:?} in {:?} ({:?}) gave {actual:?}, expected {:?}",
                case.id, case.input, mode, case.channel, case.expected
            ));
        }
    }
    assert!(
        failures.is_empty(),
        "{} of {} parse cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn corpus_covers_every_mode_and_channel() {
    let cases = load_parse_cases(&corpus_path());
    for prefix in ["plain", "decimal", "currency", "percentage"] {
        assert!(
            cases.iter().any(|c| c.mode.starts_with(prefix)),
            "no parse case for {prefix}"
        );
    }
    assert!(cases.iter().any(|c| c.channel == Channel::Entry));
    assert!(cases.iter().any(|c| c.expected.is_none()));
}
