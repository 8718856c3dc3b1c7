//! Integration tests for the cardstmt CLI.
//!
//! These run the actual binary against extracted-text fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get path to test data file
fn test_data_path(filename: &str) -> String {
    format!("tests/data/{}", filename)
}

/// Binary with an isolated config directory
fn cardstmt(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardstmt").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

fn run_json(home: &TempDir, dialect: &str, file: &str) -> serde_json::Value {
    let assert = cardstmt(home)
        .args(["process", &test_data_path(file), "--dialect", dialect])
        .assert()
        .success();
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

#[test]
fn test_process_hdfc_json() {
    let home = TempDir::new().unwrap();
    let json = run_json(&home, "hdfc", "hdfc_statement.txt");

    assert_eq!(json["bank_name"], "HDFC");
    assert_eq!(json["cardholder_name"], "JOHN DOE");
    assert_eq!(json["statement_date"], "12/05/2023");
    assert_eq!(json["fields"]["payment_due_date"], "15/06/2023");
    assert_eq!(json["fields"]["credit_limit"], 100000);
    assert_eq!(json["transactions"].as_array().unwrap().len(), 3);
    assert_eq!(json["transactions"][1]["type"], "credit");
    assert_eq!(json["transactions"][2]["description"], "ZOMATO BANGALORE");
}

#[test]
fn test_process_chase_json() {
    let home = TempDir::new().unwrap();
    let json = run_json(&home, "chase", "chase_statement.txt");

    assert_eq!(json["bank_name"], "Chase");
    assert_eq!(json["cardholder_name"], "JANE Q PUBLIC");
    assert_eq!(json["statement_date"], "04/30/24");
    assert_eq!(json["account_last4"], "1234");
    assert_eq!(json["fields"]["cash_access_line"], 1000);
    assert_eq!(json["transactions"][0]["type"], "debit");
    assert_eq!(json["transactions"][1]["type"], "credit");
}

#[test]
fn test_process_auto_detects_dialect() {
    let home = TempDir::new().unwrap();

    let json = run_json(&home, "auto", "chase_statement.txt");
    assert_eq!(json["bank_name"], "Chase");

    let json = run_json(&home, "AUTO", "hdfc_statement.txt");
    assert_eq!(json["bank_name"], "HDFC");
}

#[test]
fn test_process_text_format() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args([
            "process",
            &test_data_path("chase_statement.txt"),
            "-d",
            "chase",
            "-f",
            "text",
            "--rows",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card Info:"))
        .stdout(predicate::str::contains("Transactions (showing 1 of 3):"))
        .stdout(predicate::str::contains("COFFEE SHOP"))
        .stdout(predicate::str::contains("AIRLINE TICKET").not())
        .stdout(predicate::str::contains("Debits:  1,254.50"));
}

#[test]
fn test_process_csv_to_file() {
    let home = TempDir::new().unwrap();
    let output = home.path().join("out.csv");

    cardstmt(&home)
        .args(["process", &test_data_path("hdfc_statement.txt"), "-d", "hdfc", "-f", "csv", "-o"])
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,description,amount,type");
    assert_eq!(lines[1], "01/05/2023,AMAZON RETAIL,1999.00,debit");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_process_unsupported_dialect() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args(["process", &test_data_path("chase_statement.txt"), "-d", "citibank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported dialect 'citibank'"))
        .stderr(predicate::str::contains("hdfc, chase"));
}

#[test]
fn test_process_malformed_value_row() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args(["process", &test_data_path("malformed_hdfc.txt"), "-d", "hdfc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_process_missing_input() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args(["process", "tests/data/nope.txt", "-d", "hdfc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_process_uses_config_default_dialect() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.json");
    fs::write(
        &config,
        r#"{ "extraction": { "default_dialect": "chase" }, "output": { "pretty_json": false } }"#,
    )
    .unwrap();

    let assert = cardstmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["process", &test_data_path("chase_statement.txt")])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.trim().lines().count(), 1);
    assert!(stdout.contains(r#""bank_name":"Chase""#));
}

#[test]
fn test_batch_with_summary() {
    let home = TempDir::new().unwrap();
    let out_dir = home.path().join("out");

    cardstmt(&home)
        .args(["batch", "tests/data/*_statement.txt", "-d", "auto", "--summary", "-o"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful"));

    assert!(out_dir.join("chase_statement.json").exists());
    assert!(out_dir.join("hdfc_statement.json").exists());

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,bank_name"));
    assert!(summary.contains("hdfc_statement.txt,success,HDFC,JOHN DOE,12/05/2023,3,"));
}

#[test]
fn test_batch_stops_on_error() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args(["batch", "tests/data/*.txt", "-d", "hdfc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Processing failed"));
}

#[test]
fn test_dialects_listing() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .arg("dialects")
        .assert()
        .success()
        .stdout(predicate::str::contains("hdfc"))
        .stdout(predicate::str::contains("HDFC"))
        .stdout(predicate::str::contains("chase"))
        .stdout(predicate::str::contains("Chase"));
}

#[test]
fn test_config_init_get_set() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("cfg").join("config.json");

    cardstmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    cardstmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cardstmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.default_dialect", "hdfc"])
        .assert()
        .success();

    cardstmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.default_dialect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hdfc\""));

    cardstmt(&home)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "pdf.dpi", "300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn test_process_unsupported_dialect_before_reading_pdf() {
    let home = TempDir::new().unwrap();
    let bad_pdf = home.path().join("broken.pdf");
    fs::write(&bad_pdf, "this is not a pdf").unwrap();

    cardstmt(&home)
        .arg("process")
        .arg(&bad_pdf)
        .args(["-d", "citibank"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported dialect 'citibank'"))
        .stderr(predicate::str::contains("PDF").not());
}

#[test]
fn test_batch_unsupported_dialect_fails_fast() {
    let home = TempDir::new().unwrap();

    cardstmt(&home)
        .args([
            "batch",
            "tests/data/*_statement.txt",
            "-d",
            "citibank",
            "--continue-on-error",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("files to process").not())
        .stderr(predicate::str::contains("unsupported dialect 'citibank'"));
}

#[test]
fn test_batch_empty_file_is_not_an_error() {
    let home = TempDir::new().unwrap();
    let input_dir = home.path().join("in");
    let out_dir = home.path().join("out");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("empty.txt"), "").unwrap();
    fs::copy(
        test_data_path("hdfc_statement.txt"),
        input_dir.join("hdfc_statement.txt"),
    )
    .unwrap();

    let pattern = format!("{}/*.txt", input_dir.display());
    cardstmt(&home)
        .args(["batch", &pattern, "-d", "hdfc", "--summary", "-o"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful, 0 failed"));

    let empty: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("empty.json")).unwrap()).unwrap();
    assert_eq!(empty["bank_name"], "HDFC");
    assert_eq!(empty["fields"], serde_json::json!({}));
    assert_eq!(empty["transactions"], serde_json::json!([]));

    let summary = fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert!(summary.contains("empty.txt,success,HDFC,,,0,0,0,"));
}
