use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUDGET: &str = r#"{
  "lang": "en",
  "sections": {
    "income": [{ "type": "salary", "amount": 3000.0 }],
    "daily_expenses": [{ "type": "food", "amount": 400.0 }],
    "loans": [{ "type": "mortgage", "amount": 900.0 }]
  },
  "totals": {
    "income": 3000.0,
    "expenses": 1300.0,
    "savings_capacity": 1700.0,
    "daily_expenses": 400.0,
    "admin_expenses": 0.0,
    "family_expenses": 0.0,
    "loans": 900.0,
    "taxes": 0.0
  }
}"#;

fn finanthrope(config: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("finanthrope").unwrap();
    cmd.arg("--config-dir").arg(config.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn budget_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("budget.json");
    std::fs::write(&path, BUDGET).unwrap();
    path
}

#[test]
fn test_categories_in_english() {
    let config = TempDir::new().unwrap();
    finanthrope(&config)
        .args(["categories", "income", "--lang", "en"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("housing_allowance"));
}

#[test]
fn test_categories_default_to_french() {
    let config = TempDir::new().unwrap();
    finanthrope(&config)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Crédit immobilier"));
}

#[test]
fn test_summary_of_document() {
    let config = TempDir::new().unwrap();
    let budget = budget_file(&config);

    finanthrope(&config)
        .arg("summary")
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mortgage"))
        .stdout(predicate::str::contains("1,700.00 €"))
        .stdout(predicate::str::contains("Positive capacity"));
}

#[test]
fn test_export_pdf_from_document() {
    let config = TempDir::new().unwrap();
    let budget = budget_file(&config);
    let output = config.path().join("out").join("summary.pdf");

    finanthrope(&config)
        .arg("export")
        .arg(&budget)
        .args(["--format", "pdf", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to:"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
}

#[test]
fn test_export_json_in_another_language() {
    let config = TempDir::new().unwrap();
    let budget = budget_file(&config);
    let output = config.path().join("fr.json");

    finanthrope(&config)
        .arg("export")
        .arg(&budget)
        .args(["--format", "json", "--lang", "fr", "--output"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["lang"], "fr");
    assert_eq!(json["totals"]["savings_capacity"], 1700.0);
    assert_eq!(json["sections"]["loans"][0]["type"], "mortgage");
}

#[test]
fn test_export_rejects_tampered_totals() {
    let config = TempDir::new().unwrap();
    let budget = config.path().join("bad.json");
    std::fs::write(&budget, BUDGET.replace("1700.0", "9999.0")).unwrap();

    finanthrope(&config)
        .arg("export")
        .arg(&budget)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}

#[test]
fn test_export_rejects_rows_beyond_cents() {
    let config = TempDir::new().unwrap();
    let budget = config.path().join("huge.json");
    std::fs::write(
        &budget,
        r#"{
          "lang": "en",
          "sections": { "income": [
            { "type": "salary", "amount": 6e16 },
            { "type": "salary_bonus", "amount": 6e16 }
          ] },
          "totals": { "income": 0, "expenses": 0, "savings_capacity": 0,
                      "daily_expenses": 0, "admin_expenses": 0, "family_expenses": 0,
                      "loans": 0, "taxes": 0 }
        }"#,
    )
    .unwrap();

    finanthrope(&config)
        .arg("export")
        .arg(&budget)
        .args(["--format", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"))
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_shell_session_from_stdin() {
    let config = TempDir::new().unwrap();
    finanthrope(&config)
        .args(["shell", "--lang", "en"])
        .write_stdin(
            "add income\n\
             amount income 0 2000\n\
             add family\n\
             type family 0 Canteen\n\
             amount family 0 150\n\
             amount family 7 10\n\
             show\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Row 7 is out of range"))
        .stdout(predicate::str::contains("Canteen"))
        .stdout(predicate::str::contains("1,850.00 €"));
}

#[test]
fn test_config_writes_defaults() {
    let config = TempDir::new().unwrap();
    finanthrope(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Language:        fr"));
    assert!(config.path().join("config.json").exists());
}
