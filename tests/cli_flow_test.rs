//! CLI end-to-end tests against a temporary data directory

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn qm(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("qm").unwrap();
    cmd.env("QM_HOME", home)
        .env_remove("QM_SYNC_URL")
        .env_remove("QM_LOG");
    cmd
}

fn list_json(home: &Path) -> Vec<serde_json::Value> {
    let output = qm(home).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ========================================
// 初期状態
// ========================================

#[test]
fn test_fresh_home_lists_seed_quotes() {
    let home = TempDir::new().unwrap();

    let quotes = list_json(home.path());

    assert_eq!(quotes.len(), 3);
    assert_eq!(quotes[0]["category"], "Motivation");
}

#[test]
fn test_show_prints_a_quote() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("—"));
}

#[test]
fn test_corrupt_storage_is_set_aside() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("storage.json"), "{ not json").unwrap();

    let quotes = list_json(home.path());

    assert_eq!(quotes.len(), 3);
    assert!(home.path().join("storage.json.corrupt").exists());
}

// ========================================
// 追加
// ========================================

#[test]
fn test_add_persists_across_runs() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .args(["add", "Do or do not.", "--category", "Motivation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote added successfully!"));

    let quotes = list_json(home.path());
    assert_eq!(quotes.len(), 4);
    assert_eq!(quotes[3]["text"], "Do or do not.");
}

#[test]
fn test_add_empty_category_fails() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .args(["add", "Text", "--category", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please enter both quote text and category.",
        ));

    assert_eq!(list_json(home.path()).len(), 3);
}

// ========================================
// カテゴリ
// ========================================

#[test]
fn test_categories_simple_lists_all_first() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .args(["categories", "--simple"])
        .assert()
        .success()
        .stdout("all\nMotivation\nAction\nLife\n");
}

#[test]
fn test_list_category_is_remembered() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .args(["list", "--category", "Life", "--simple"])
        .assert()
        .success();

    let quotes = list_json(home.path());
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0]["category"], "Life");

    qm(home.path())
        .args(["list", "--category", "all", "--simple"])
        .assert()
        .success();
    assert_eq!(list_json(home.path()).len(), 3);
}

// ========================================
// インポート / エクスポート
// ========================================

#[test]
fn test_export_then_import_appends_without_dedup() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("backup").join("quotes.json");

    qm(home.path())
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 quote(s)"));

    qm(home.path())
        .arg("import")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 quote(s) imported"))
        .stdout(predicate::str::contains("Quotes imported successfully!").not());

    assert_eq!(list_json(home.path()).len(), 6);
}

#[test]
fn test_import_malformed_file_fails_without_changes() {
    let home = TempDir::new().unwrap();
    let bad = home.path().join("bad.json");
    std::fs::write(&bad, r#"[{"text": "missing category"}]"#).unwrap();

    qm(home.path())
        .arg("import")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid import file"));

    assert_eq!(list_json(home.path()).len(), 3);
}

// ========================================
// 同期
// ========================================

#[test]
fn test_sync_without_endpoint_fails() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not configured"));
}

#[test]
fn test_invalid_endpoint_is_rejected() {
    let home = TempDir::new().unwrap();

    qm(home.path())
        .env("QM_SYNC_URL", "ftp://example.com/quotes")
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
