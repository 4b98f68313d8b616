use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn command() -> Command {
    let mut cmd = Command::new(cargo_bin!("scheme-payments"));
    cmd.env_remove("DATA_STORE_TYPE").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = command();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--accounts")
        .arg("tests/fixtures/accounts.csv");

    cmd.assert().success().stdout(predicate::eq(
        "account_number,balance,allowed_payment_schemes,status\n\
         BACS123,300,Bacs,Live\n\
         CH124,500,Chaps,Disabled\n\
         CHAPS123,700,Chaps,Live\n\
         FP123,500,FasterPayments,Live\n\
         FP124,100,FasterPayments,Live\n",
    ));

    Ok(())
}

#[test]
fn test_cli_logs_outcomes() {
    let mut cmd = command();
    cmd.arg("tests/fixtures/payments.csv")
        .arg("--accounts")
        .arg("tests/fixtures/accounts.csv");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("payment approved"))
        .stderr(predicate::str::contains("payment rejected by scheme rule"))
        .stderr(predicate::str::contains("debtor account not found"));
}

#[test]
fn test_malformed_payment_rows_are_skipped() {
    let mut accounts = tempfile::NamedTempFile::new().unwrap();
    writeln!(accounts, "account_number,balance,allowed_payment_schemes,status").unwrap();
    writeln!(accounts, "BACS1,10,Bacs,Live").unwrap();

    let mut payments = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        payments,
        "debtor_account_number,creditor_account_number,amount,payment_scheme"
    )
    .unwrap();
    writeln!(payments, "BACS1,CR1,4,Bacs").unwrap();
    writeln!(payments, "BACS1,CR1,4,Swift").unwrap();
    writeln!(payments, "BACS1,CR1,not_a_number,Bacs").unwrap();
    writeln!(payments, "BACS1,CR1,0,Bacs").unwrap();
    writeln!(payments, "BACS1,CR1,10,Bacs").unwrap();

    let mut cmd = command();
    cmd.arg(payments.path()).arg("--accounts").arg(accounts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment"))
        .stdout(predicate::str::contains("BACS1,-4,Bacs,Live"));
}

#[test]
fn test_missing_payments_file_fails() {
    let mut cmd = command();
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
