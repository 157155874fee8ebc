// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn estimator() -> Command {
    let mut cmd = Command::cargo_bin("endless-gas-estimator").unwrap();
    cmd.env_remove("ENDLESS_ESTIMATOR_CONFIG")
        .env_remove("ENDLESS_NATIVE_GAS_PRICE")
        .env_remove("ENDLESS_NATIVE_USD_PRICE")
        .env_remove("ENDLESS_COMPARISON_USD_PRICE")
        .env_remove("ENDLESS_COMPARISON_GAS_PRICE_GWEI");
    cmd
}

#[test]
fn estimate_call_contract_moderate() {
    estimator()
        .args(["estimate", "call-contract", "--set", "complexity=moderate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75,000"))
        .stdout(predicate::str::contains("0.075000 EDS"));
}

#[test]
fn estimate_json_output() {
    let output = estimator()
        .args(["estimate", "deploy-contract", "-s", "contractSize=medium", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["native"]["gas_units"], 700_000.0);
    assert_eq!(report["comparison"]["gas_units"], 800_000);
}

#[test]
fn estimate_unknown_action_fails() {
    estimator()
        .args(["estimate", "warp-drive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown action: warp-drive"));
}

#[test]
fn price_override_from_env() {
    estimator()
        .env("ENDLESS_COMPARISON_GAS_PRICE_GWEI", "0")
        .args(["estimate", "send-eds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(n/a)"));
}

#[test]
fn list_filters_by_category() {
    estimator()
        .args(["list", "--category", "defi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stake-eds"))
        .stdout(predicate::str::contains("swap-tokens"))
        .stdout(predicate::str::contains("send-eds").not());
}

#[test]
fn builtin_catalog_lints_clean_but_not_strict() {
    estimator()
        .arg("lint")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 errors"));
    estimator().args(["lint", "--strict"]).assert().failure();
}

#[test]
fn custom_catalog_with_broken_select_fails_lint() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{ "id": "broken", "name": "Broken", "description": "", "category": "nft",
             "baseGas": 1000, "ethEquivalentGas": 2000,
             "inputs": [{{ "id": "size", "label": "Size", "type": "select", "required": true }}] }}]"#
    )
    .unwrap();

    estimator()
        .arg("--catalog")
        .arg(file.path())
        .arg("lint")
        .assert()
        .failure()
        .stdout(predicate::str::contains("select input has no options"));

    // Laden selbst prüft nichts; die Schätzung funktioniert trotzdem.
    estimator()
        .arg("--catalog")
        .arg(file.path())
        .args(["estimate", "broken", "--set", "size=large"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,000"));
}

#[test]
fn export_contains_catalog_and_table() {
    let output = estimator().args(["export", "--compact"]).output().unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["actions"].as_array().map(|a| a.len()), Some(8));
    assert_eq!(doc["multipliers"]["upgrade"], 1.8);
    assert_eq!(doc["network"]["native_symbol"], "EDS");
    assert!(doc["generated_at"].is_string());
}
