mod common;

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::{
    prelude::PredicateBooleanExt,
    str::{contains, is_empty},
};

const BIN_NAME: &str = "ledger_core_cli";

/// Command isolated from the user's home, pointed at a throwaway ledger file.
fn ledger_command(ledger: &PathBuf) -> Command {
    let mut cmd = home_command(&common::temp_dir());
    cmd.arg("--ledger").arg(ledger);
    cmd
}

/// Command sharing an app directory across invocations, without `--ledger`.
fn home_command(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("LEDGER_CORE_HOME", home)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn fresh_ledger() -> PathBuf {
    common::temp_dir().join("ledger.json")
}

fn add(ledger: &PathBuf, args: &[&str]) {
    ledger_command(ledger)
        .arg("add")
        .args(args)
        .assert()
        .success();
}

#[test]
fn add_then_summary_reports_totals() {
    let ledger = fresh_ledger();
    ledger_command(&ledger)
        .args(["add", "100", "salary", "--income"])
        .assert()
        .success()
        .stdout(contains("Transaction (Salary income of $100.00) added"));
    add(&ledger, &["40", "groceries", "--expense", "-d", "Weekly Shop"]);
    add(&ledger, &["15", "GROCERIES", "--expense"]);

    ledger_command(&ledger)
        .arg("summary")
        .assert()
        .success()
        .stderr(is_empty())
        .stdout(
            contains("=== SUMMARY ===")
                .and(contains("Income Total: $100.00 - Income Count: 1"))
                .and(contains("Expense Total: $55.00 - Expense Count: 2"))
                .and(contains("Current Balance: $45.00")),
        );
}

#[test]
fn list_shows_normalized_records() {
    let ledger = fresh_ledger();
    ledger_command(&ledger)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No transactions recorded yet."));

    add(
        &ledger,
        &["12.5", "eating out", "--expense", "-d", "Pizza NIGHT", "--at", "2024-02-10 20:15:00"],
    );
    ledger_command(&ledger)
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("Eating Out")
                .and(contains("pizza night"))
                .and(contains("2024-02-10 20:15:00"))
                .and(contains("$12.50")),
        );
}

#[test]
fn categories_and_months_break_down_totals() {
    let ledger = fresh_ledger();
    add(&ledger, &["20", "rent", "--expense", "--at", "2024-01-05 09:00:00"]);
    add(&ledger, &["10", "food", "--expense", "--at", "2024-03-05 09:00:00"]);
    add(&ledger, &["50", "salary", "--income", "--at", "2024-03-01 09:00:00"]);

    ledger_command(&ledger)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Rent").and(contains("66.67%")).and(contains("33.33%")));

    ledger_command(&ledger)
        .args(["categories", "--income"])
        .assert()
        .success()
        .stdout(contains("Salary").and(contains("100.00%")));

    ledger_command(&ledger)
        .arg("months")
        .assert()
        .success()
        .stdout(
            contains("2024-01")
                .and(contains("2024-03"))
                .and(contains("2024-02").not())
                .and(contains("$40.00")),
        );
}

#[test]
fn negative_amount_is_rejected_with_validation_status() {
    let ledger = fresh_ledger();
    ledger_command(&ledger)
        .args(["add", "-5", "misc", "--expense"])
        .assert()
        .code(2)
        .stderr(contains("amount"));
    assert!(!ledger.exists(), "rejected input must not create the store");
}

#[test]
fn malformed_timestamp_is_rejected() {
    let ledger = fresh_ledger();
    ledger_command(&ledger)
        .args(["add", "5", "misc", "--expense", "--at", "yesterday"])
        .assert()
        .code(2)
        .stderr(contains("created_at"));
}

#[test]
fn kind_flags_are_mutually_exclusive() {
    let ledger = fresh_ledger();
    ledger_command(&ledger)
        .args(["add", "5", "misc", "--expense", "--income"])
        .assert()
        .failure();
    ledger_command(&ledger)
        .args(["add", "5", "misc"])
        .assert()
        .failure();
}

#[test]
fn corrupt_store_fails_without_touching_file() {
    let ledger = fresh_ledger();
    fs::write(&ledger, "{ not json").unwrap();
    ledger_command(&ledger)
        .arg("summary")
        .assert()
        .code(1)
        .stderr(contains("could not be read"));
    assert_eq!(fs::read_to_string(&ledger).unwrap(), "{ not json");
}

#[test]
fn import_appends_legacy_export() {
    let ledger = fresh_ledger();
    let export = common::temp_dir().join("export.json");
    fs::write(
        &export,
        r#"{
            "total": 65.5,
            "transactions": [
                {"amount": 100, "creation_datetime": "2023-12-01 08:00:00", "transaction_type": 1, "category": "Salary", "description": "december"},
                {"amount": 34.5, "creation_datetime": "2023-12-02 18:30:00", "transaction_type": 0, "category": "Groceries", "description": ""}
            ]
        }"#,
    )
    .unwrap();

    ledger_command(&ledger)
        .arg("import")
        .arg(&export)
        .assert()
        .success()
        .stdout(contains("Imported 2 transactions; balance is now $65.50"));

    ledger_command(&ledger)
        .arg("months")
        .assert()
        .success()
        .stdout(contains("2023-12"));
}

#[test]
fn version_prints_build_information() {
    let ledger = fresh_ledger();
    ledger_command(&ledger)
        .arg("version")
        .assert()
        .success()
        .stdout(contains("ledger_core").and(contains(env!("CARGO_PKG_VERSION"))));
}

#[test]
fn config_set_changes_symbol_and_default_ledger() {
    let home = common::temp_dir();
    let ledger = common::temp_dir().join("household.json");

    home_command(&home)
        .args(["config", "set", "currency_symbol", "€"])
        .assert()
        .success()
        .stdout(contains("Configuration updated."));
    home_command(&home)
        .args(["config", "set", "ledger_file"])
        .arg(&ledger)
        .assert()
        .success();

    home_command(&home)
        .args(["add", "12", "books", "--expense"])
        .assert()
        .success()
        .stdout(contains("of €12.00"));
    assert!(ledger.exists(), "configured ledger file receives the snapshot");

    home_command(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(
            contains("currency_symbol: €")
                .and(contains("household.json"))
                .and(contains("color_enabled: on")),
        );
}

#[test]
fn config_rejects_unknown_key() {
    let home = common::temp_dir();
    home_command(&home)
        .args(["config", "set", "theme", "dark"])
        .assert()
        .code(2)
        .stderr(contains("theme"));
    assert!(!home.join("config").join("config.json").exists());
}

#[test]
fn unreadable_store_is_reported_not_shown_as_empty() {
    let ledger = fresh_ledger();
    fs::create_dir_all(&ledger).unwrap();
    ledger_command(&ledger)
        .arg("summary")
        .assert()
        .code(1)
        .stdout(contains("Current Balance").not())
        .stderr(contains("could not be read"));
}
