use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD: &str = "Jane Smith\n\
                    Chief Marketing Officer\n\
                    Flow Power Pty Ltd\n\
                    45B/2 Park Street, Sydney NSW 2000 Australia\n\
                    m: 0432 123 456\n\
                    e: jane.smith@flowpower.com.au\n\
                    w: www.flowpower.com.au\n";

/// Command with a config file inside `dir`, so the user's config is never read.
fn cardscan(dir: &Path) -> Command {
    let config = dir.join("config.json");
    if !config.exists() {
        fs::write(&config, "{}").unwrap();
    }

    let mut cmd = Command::cargo_bin("cardscan").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_parse_file_as_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, CARD).unwrap();

    let output = cardscan(dir.path()).arg("parse").arg(&input).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fullName"], "Jane Smith");
    assert_eq!(json["companyName"], "Flow Power Pty Ltd");
    assert_eq!(json["website"], "https://www.flowpower.com.au");
    assert!(json.get("linkedinUrl").is_none());
}

#[test]
fn test_parse_stdin_as_vcard() {
    let dir = TempDir::new().unwrap();

    cardscan(dir.path())
        .args(["parse", "-", "--format", "vcard"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCARD"))
        .stdout(predicate::str::contains("ORG:Flow Power Pty Ltd"));
}

#[test]
fn test_parse_split_address_text() {
    let dir = TempDir::new().unwrap();

    cardscan(dir.path())
        .args(["parse", "--format", "text", "--split-address"])
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Jane Smith"))
        .stdout(predicate::str::contains("Postcode: 2000"));
}

#[test]
fn test_parse_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("jane.csv");

    cardscan(dir.path())
        .args(["parse", "-f", "csv", "-o"])
        .arg(&output)
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("full_name,job_title,company_name"));
    assert!(csv.contains("Jane Smith,Chief Marketing Officer,Flow Power Pty Ltd"));
}

#[test]
fn test_parse_missing_file() {
    let dir = TempDir::new().unwrap();

    cardscan(dir.path())
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_batch_with_summary() {
    let dir = TempDir::new().unwrap();
    let cards = dir.path().join("cards");
    fs::create_dir(&cards).unwrap();
    fs::write(cards.join("jane.txt"), CARD).unwrap();
    fs::write(cards.join("john.txt"), "John Doe\nSenior Engineer\njohn.doe@acme.com\n").unwrap();
    fs::write(cards.join("notes.md"), "ignored").unwrap();

    let out = dir.path().join("out");
    let pattern = format!("{}/*", cards.display());

    cardscan(dir.path())
        .args(["batch", &pattern, "--summary", "-j", "2", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    let jane: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("jane.json")).unwrap()).unwrap();
    assert_eq!(jane["email"], "jane.smith@flowpower.com.au");

    let john: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("john.json")).unwrap()).unwrap();
    assert_eq!(john["website"], "https://www.acme.com");

    assert!(!out.join("notes.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
    assert!(summary.contains("jane.txt,success,Jane Smith"));
}

#[test]
fn test_batch_empty_file_fails_unless_continuing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "   \n").unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    cardscan(dir.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File is empty"));

    cardscan(dir.path())
        .args(["batch", &pattern, "--continue-on-error"])
        .assert()
        .success()
        .stderr(predicate::str::contains("0 successful, 1 failed").or(predicate::str::contains("Failed files")));
}

#[test]
fn test_batch_no_matches() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.txt", dir.path().display());

    cardscan(dir.path())
        .args(["batch", &pattern])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();

    cardscan(dir.path())
        .args(["config", "set", "extraction.company_lookahead", "3"])
        .assert()
        .success();

    cardscan(dir.path())
        .args(["config", "get", "extraction.company_lookahead"])
        .assert()
        .success()
        .stdout("3\n");

    cardscan(dir.path())
        .args(["config", "set", "output.format", "vcard"])
        .assert()
        .success();

    cardscan(dir.path())
        .arg("parse")
        .write_stdin(CARD)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BEGIN:VCARD"));
}

#[test]
fn test_config_rejects_unknown_key_and_bad_value() {
    let dir = TempDir::new().unwrap();

    cardscan(dir.path())
        .args(["config", "set", "extraction.nope", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));

    cardscan(dir.path())
        .args(["config", "set", "extraction.company_lookahead", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.json");

    cardscan(dir.path())
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .success();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["extraction"]["default_country"], "Australia");

    cardscan(dir.path())
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
