use assert_cmd::Command;
use predicates::prelude::*;

/// Commands pointed at a throwaway data dir via TFSAID_DATA_DIR, so the
/// tests never touch the user's settings or database.
fn tfsaid(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tfsaid").unwrap();
    cmd.env("TFSAID_DATA_DIR", dir.path());
    cmd
}

#[test]
fn test_help_lists_command_groups() {
    let mut cmd = Command::cargo_bin("tfsaid").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("accounts"))
        .stdout(predicate::str::contains("txn"))
        .stdout(predicate::str::contains("room"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_account_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Questrade TFSA", "--cra-name", "TFSA - Questrade"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added account: Questrade TFSA"));

    tfsaid(&dir)
        .args(["accounts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Questrade TFSA"))
        .stdout(predicate::str::contains("TFSA - Questrade"));
}

#[test]
fn test_txn_add_rejects_unknown_account() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Nope", "--date", "2024-01-15", "--type", "deposit", "--amount", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account: Nope"));
}

#[test]
fn test_txn_add_rejects_bad_amounts() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA Main"])
        .assert()
        .success();

    for bad in ["0", "-10", "10.005", "ten"] {
        tfsaid(&dir)
            .args(["txn", "add", "--account", "Main", "--date", "2024-01-15", "--type", "deposit", "--amount", bad])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid input"));
    }
}

#[test]
fn test_txn_add_rejects_bad_date_and_kind() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA Main"])
        .assert()
        .success();

    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "15/01/2024", "--type", "deposit", "--amount", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YYYY-MM-DD"));

    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2024-01-15", "--type", "transfer", "--amount", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("deposit"));
}

#[test]
fn test_room_add_rejects_duplicate_year() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir).args(["room", "add", "2024", "7000"]).assert().success();
    tfsaid(&dir)
        .args(["room", "add", "2024", "6500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2024 already exists"));
}

#[test]
fn test_summary_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA Main"])
        .assert()
        .success();
    tfsaid(&dir).args(["room", "add", "2022", "6000"]).assert().success();
    tfsaid(&dir).args(["room", "add", "2023", "6500"]).assert().success();
    tfsaid(&dir).args(["room", "add", "2024", "7000"]).assert().success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2022-02-15", "--type", "deposit", "--amount", "6000"])
        .assert()
        .success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2023-06-01", "--type", "withdrawal", "--amount", "2000"])
        .assert()
        .success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2024-01-10", "--type", "deposit", "--amount", "9000"])
        .assert()
        .success();

    // 2024 starts at 7000 new + 6500 carried + 2000 recaptured = 15500.
    tfsaid(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$15,500.00"))
        .stdout(predicate::str::contains("No over-contribution"));
}

#[test]
fn test_summary_report_flags_overcontribution() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA Main"])
        .assert()
        .success();
    tfsaid(&dir).args(["room", "add", "2023", "6000"]).assert().success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2023-03-01", "--type", "deposit", "--amount", "7000"])
        .assert()
        .success();

    tfsaid(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$1,000.00"))
        .stdout(predicate::str::contains("Over-contribution in year(s): 2023"));
}

#[test]
fn test_cra_report_groups_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA - Bank A"])
        .assert()
        .success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2023-03-01", "--type", "deposit", "--amount", "1000"])
        .assert()
        .success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2023-05-01", "--type", "withdrawal", "--amount", "250"])
        .assert()
        .success();

    tfsaid(&dir)
        .args(["report", "cra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TOTALS: TFSA - Bank A"))
        .stdout(predicate::str::contains("REPORT TOTALS"))
        .stdout(predicate::str::contains("750.00"));
}

#[test]
fn test_export_summary_writes_csv() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir).args(["room", "add", "2024", "7000"]).assert().success();

    let out = dir.path().join("summary.csv");
    tfsaid(&dir)
        .args(["export", "summary", "--output", out.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Year,New Room,Total Start Room"));
    assert!(content.contains("2024,7000.00,7000.00,0.00,0.00,7000.00,no"));
}

#[test]
fn test_account_delete_cascades_transactions() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA Main"])
        .assert()
        .success();
    tfsaid(&dir)
        .args(["txn", "add", "--account", "Main", "--date", "2024-01-15", "--type", "deposit", "--amount", "100"])
        .assert()
        .success();

    tfsaid(&dir)
        .args(["accounts", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 transaction(s)"));

    tfsaid(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions (0)"));
}

#[test]
fn test_status_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    tfsaid(&dir)
        .args(["accounts", "add", "Main", "--cra-name", "TFSA Main"])
        .assert()
        .success();

    tfsaid(&dir)
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts:      1"))
        .stdout(predicate::str::contains("Room years:    0"));
}
