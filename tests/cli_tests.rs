//! Integration tests for the CLI interface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command running in an empty directory with no `PORTFOLIO_*` overrides.
fn portfolio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("portfolio").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("PORTFOLIO_LOG_LEVEL")
        .env_remove("PORTFOLIO_HOST")
        .env_remove("PORTFOLIO_PORT")
        .env_remove("PORTFOLIO_CATALOG");
    cmd
}

#[test]
fn test_cli_help_flag() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("check-contact"));
}

#[test]
fn test_projects_lists_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let output = portfolio(&dir).arg("projects").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let slugs: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        slugs,
        vec![
            "ecommerce-customer-segmentation",
            "telecom-churn-prediction",
            "retail-sales-forecasting",
            "healthcare-readmission-analysis",
            "fraud-detection-system",
            "supply-chain-optimization",
        ]
    );
}

#[test]
fn test_projects_filtering() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .args(["projects", "--category", "business-intelligence", "--search", "plotly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("supply-chain-optimization"))
        .stdout(predicate::str::contains("retail-sales-forecasting").not());
}

#[test]
fn test_projects_no_matches() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .args(["projects", "--search", "blockchain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects match"));
}

#[test]
fn test_projects_strict_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .args(["projects", "--category", "astrology", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category 'astrology'"));

    portfolio(&dir)
        .args(["projects", "--category", "astrology", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fraud-detection-system"));
}

#[test]
fn test_show_project_and_next() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .args(["show", "supply-chain-optimization"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supply Chain Optimization Dashboard"))
        .stdout(predicate::str::contains(
            "Next project: E-commerce Customer Segmentation Analysis",
        ));
}

#[test]
fn test_show_unknown_project_fails() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .args(["show", "missing-project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_categories() {
    let dir = TempDir::new().unwrap();
    portfolio(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("all"))
        .stdout(predicate::str::contains("Business Intelligence"));
}

#[test]
fn test_check_contact_valid() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("submission.json");
    std::fs::write(
        &file,
        r#"{"name": "Al", "email": "a@b.co", "subject": "Hello there", "message": "This is a long enough message."}"#,
    )
    .unwrap();

    portfolio(&dir)
        .args(["check-contact", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\": \"a@b.co\""))
        .stdout(predicate::str::contains("budget").not());
}

#[test]
fn test_check_contact_invalid() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("submission.json");
    std::fs::write(
        &file,
        r#"{"name": "A", "email": "not-an-email", "subject": "Hi", "message": "short"}"#,
    )
    .unwrap();

    portfolio(&dir)
        .args(["check-contact", file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("name: Name must be at least 2 characters"))
        .stdout(predicate::str::contains("email: Please enter a valid email address"))
        .stderr(predicate::str::contains("4 invalid field(s)"));
}

#[test]
fn test_check_contact_wrong_typed_field_is_field_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("submission.json");
    std::fs::write(
        &file,
        r#"{"name": 5, "email": "a@b.co", "subject": "Hello there", "message": "This is a long enough message."}"#,
    )
    .unwrap();

    portfolio(&dir)
        .args(["check-contact", file.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("name: Name must be at least 2 characters"))
        .stderr(predicate::str::contains("1 invalid field(s)"));
}

#[test]
fn test_catalog_override_from_config_file() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.yaml");
    std::fs::write(
        &catalog,
        r#"
- id: "a"
  slug: only-project
  title: Only Project
  description: A single custom record
  excerpt: Custom
  category: data-strategy
  image: https://example.com/a.png
  tags: [Strategy]
  client: Someone
  duration: 1 week
  date: "2024-06-01"
  challenge: c
  solution: s
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("portfolio.toml"),
        "[catalog]\npath = \"catalog.yaml\"\n",
    )
    .unwrap();

    portfolio(&dir)
        .args(["show", "only-project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next project: Only Project (only-project)"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("portfolio.toml"), "log_level = \"loud\"\n").unwrap();

    portfolio(&dir)
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("log_level must be one of"));
}
