use std::path::PathBuf;
use widget_test_support::env::ScenarioFilter;
use widget_test_support::scenario::{check_scenario, load_scenarios};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run_file(name: &str) {
    let scenarios = load_scenarios(&fixture(name));
    let filter = ScenarioFilter::from_env();
    let mut ran = 0usize;
    let mut failures = Vec::new();
    for scenario in &scenarios {
        if !filter.matches(&scenario.id) {
            continue;
        }
        ran += 1;
        if let Err(err) = check_scenario(scenario) {
            failures.push(err);
        }
    }
    assert!(
        ran > 0 || !filter.matches(""),
        "no scenarios ran from {name}"
    );
    assert!(
        failures.is_empty(),
        "{} of {ran} scenarios failed in {name}:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn number_scenarios() {
    run_file("number_scenarios.toml");
}

#[test]
fn text_scenarios() {
    run_file("text_scenarios.toml");
}
