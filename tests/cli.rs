use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Every invocation gets its own HOME so settings and data files never
/// leak between tests (or into the real user profile).
fn daftar(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("daftar").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_list_shows_seed_invoices() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["list", "invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-001"))
        .stdout(predicate::str::contains("شركة الأمل التجارية"))
        .stdout(predicate::str::contains("5 من 5 سجل"));
}

#[test]
fn test_list_filter_narrows_records() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["list", "invoices", "--filter", "مدفوعة"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INV-001"))
        .stdout(predicate::str::contains("INV-002").not())
        .stdout(predicate::str::contains("2 من 5 سجل"));
}

#[test]
fn test_list_query_matches_case_insensitively() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["list", "invoices", "--query", "inv-004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("مكتب الهندسة المتقدمة"))
        .stdout(predicate::str::contains("1 من 5 سجل"));
}

#[test]
fn test_unknown_page_fails() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["list", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown page"));
}

#[test]
fn test_unknown_filter_value_fails() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["list", "invoices", "--filter", "قيمة غير موجودة"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("قيمة فلتر غير معروفة"));
}

#[test]
fn test_summary_prints_cards() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["summary", "invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("عدد الفواتير"))
        .stdout(predicate::str::contains("63,450 ريال"));
}

#[test]
fn test_export_writes_bom_prefixed_csv() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("invoices.csv");
    daftar(&home)
        .args(["export", "invoices", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("تم تصدير 5 سجل"));
    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..3], b"\xef\xbb\xbf");
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.lines().next().unwrap().contains("العميل"));
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_report_guards_margin() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("هامش الربح"))
        .stdout(predicate::str::contains("يناير"));
}

#[test]
fn test_status_lists_every_page() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("الفواتير"))
        .stdout(predicate::str::contains("التقارير"))
        .stdout(predicate::str::contains("افتراضي"));
}

#[test]
fn test_config_roundtrip() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["config", "--user-name", "سارة"])
        .assert()
        .success();
    daftar(&home)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("سارة"));
}

#[test]
fn test_reset_restores_seed_data() {
    let home = TempDir::new().unwrap();
    daftar(&home)
        .args(["reset", "invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invoices"));
    daftar(&home)
        .args(["list", "invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 من 5 سجل"));
}
