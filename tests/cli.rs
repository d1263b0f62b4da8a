use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn passbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passbook").unwrap();
    cmd.env("PASSBOOK_DATA_DIR", data_dir.path())
        .env_remove("PASSBOOK_NO_AUDIT");
    cmd
}

#[test]
fn simulate_prints_history_and_summary() {
    let data_dir = TempDir::new().unwrap();

    passbook(&data_dir)
        .args([
            "simulate",
            "1001",
            "Alice",
            "--balance",
            "1000",
            "--rate",
            "5",
            "deposit=200",
            "withdraw=300",
            "withdraw=10000",
            "history",
            "summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Transaction History:\n\
             Description: Deposit\n\
             Amount: $200.00\n\
             Description: Withdrawal\n\
             Amount: $-300.00\n",
        ))
        .stdout(predicate::str::contains("Withdrawal failed: Insufficient balance"))
        .stdout(predicate::str::contains(
            "Account Number: 1001\n\
             Account Holder Name: Alice\n\
             Balance: $900.00\n\
             Interest Rate: 5.00%\n\
             Interest Value: $0.00\n\
             Age of Account: 0.00 years\n",
        ));
}

#[test]
fn simulate_uses_configured_default_rate() {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(
        data_dir.path().join("config.json"),
        r#"{"default_interest_rate": 10.0}"#,
    )
    .unwrap();

    passbook(&data_dir)
        .args(["simulate", "3", "Carl", "-b", "1000", "age=1", "compound", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compound interest applied: $100.00"))
        .stdout(predicate::str::contains("Interest Rate: 10.00%"))
        .stdout(predicate::str::contains("Balance: $1100.00"));
}

#[test]
fn simulate_rejects_unknown_step() {
    let data_dir = TempDir::new().unwrap();

    passbook(&data_dir)
        .args(["simulate", "1", "Bob", "transfer=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown step"));
}

#[test]
fn demo_writes_audit_trail() {
    let data_dir = TempDir::new().unwrap();

    passbook(&data_dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simple interest applied: $90.00"))
        .stdout(predicate::str::contains("Balance: $990.00"));

    assert!(data_dir.path().join("audit.log").exists());

    passbook(&data_dir)
        .args(["audit", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WITHDRAW_REJECTED").not())
        .stdout(predicate::str::contains("SIMPLE_INTEREST"))
        .stdout(predicate::str::contains("#1001 (Alice)"));
}

#[test]
fn no_audit_flag_skips_log() {
    let data_dir = TempDir::new().unwrap();

    passbook(&data_dir)
        .args(["demo", "--no-audit"])
        .assert()
        .success();

    assert!(!data_dir.path().join("audit.log").exists());

    passbook(&data_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries found."));
}

#[test]
fn init_writes_settings() {
    let data_dir = TempDir::new().unwrap();

    passbook(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let contents = std::fs::read_to_string(data_dir.path().join("config.json")).unwrap();
    assert!(contents.contains("\"audit_enabled\": true"));
}
