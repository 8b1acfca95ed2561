use assert_cmd::Command;
use predicates::prelude::*;

fn cabinet(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cabinet").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn contacts_round_trip_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["contacts", "add", "Ada Lovelace", "555-0100"])
        .arg("--email")
        .arg("ada@example.com")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact added"));

    // A fresh process must see the saved record.
    cabinet(temp_dir.path())
        .args(["contacts", "search", "Ada"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ada Lovelace"))
        .stdout(predicates::str::contains("555-0100"));

    cabinet(temp_dir.path())
        .args(["contacts", "delete", "Ada"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["contacts", "search", "Ada"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No contacts found"));
}

#[test]
fn contacts_search_is_case_sensitive() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["contacts", "add", "Ada Lovelace", "555-0100"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["contacts", "search", "ada"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No contacts found"));
}

#[test]
fn bank_transfer_between_sessions() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["bank", "open", "Alice", "1 Main St", "555"])
        .args(["--deposit", "100"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1000"));

    cabinet(temp_dir.path())
        .args(["bank", "open", "Bob", "2 Side St", "556"])
        .args(["--account-type", "current"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1001"));

    cabinet(temp_dir.path())
        .args(["bank", "transfer", "1000", "1001", "40"])
        .assert()
        .success()
        .stdout(predicates::str::contains("$60.00"));

    cabinet(temp_dir.path())
        .args(["bank", "show", "1001"])
        .assert()
        .success()
        .stdout(predicates::str::contains("$40.00"));
}

#[test]
fn bank_rejects_overdraft_with_nonzero_exit() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["bank", "open", "Alice", "1 Main St", "555"])
        .args(["--deposit", "10"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["bank", "withdraw", "1000", "50"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Insufficient balance"));

    // The failed withdrawal must not have been persisted.
    cabinet(temp_dir.path())
        .args(["bank", "show", "1000"])
        .assert()
        .success()
        .stdout(predicates::str::contains("$10.00"));
}

#[test]
fn unknown_account_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["bank", "show", "9999"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn student_marks_produce_a_grade() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["students", "enroll", "42", "Ada", "20", "F", "CS", "3"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["students", "marks", "42", "95", "92", "88", "91", "97"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Grade: A"));

    cabinet(temp_dir.path())
        .args(["students", "report", "42"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Math"))
        .stdout(predicates::str::contains("Programming"));

    // Duplicate roll numbers are refused.
    cabinet(temp_dir.path())
        .args(["students", "enroll", "42", "Grace", "21", "F", "EE", "1"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("already enrolled"));
}

#[test]
fn library_borrow_and_return() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["library", "add-book", "SICP", "Abelson", "1985"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Id: 1"));

    cabinet(temp_dir.path())
        .args(["library", "borrow", "1", "7", "Ada"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Due:"));

    // Already on loan.
    cabinet(temp_dir.path())
        .args(["library", "borrow", "1", "8", "Grace"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not available"));

    cabinet(temp_dir.path())
        .args(["library", "return", "1"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["library", "list-books"])
        .assert()
        .success()
        .stdout(predicates::str::contains("available"));
}

#[test]
fn clinic_appointment_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["clinic", "add-patient", "Ada", "30", "F"])
        .assert()
        .success()
        .stdout(predicates::str::contains("1000"));

    cabinet(temp_dir.path())
        .args(["clinic", "add-doctor", "Dr. Grey", "Cardiology"])
        .args(["--fee", "150"])
        .assert()
        .success()
        .stdout(predicates::str::contains("2000"));

    cabinet(temp_dir.path())
        .args(["clinic", "schedule", "1000", "2000", "01/09/2026", "10:00"])
        .assert()
        .success()
        .stdout(predicates::str::contains("4000"));

    cabinet(temp_dir.path())
        .args(["clinic", "complete", "4000", "Flu", "Rest"])
        .args(["--extra", "25"])
        .assert()
        .success()
        .stdout(predicates::str::contains("$175.00"));

    cabinet(temp_dir.path())
        .args(["clinic", "bill", "4000"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ada"))
        .stdout(predicates::str::contains("Dr. Grey"))
        .stdout(predicates::str::contains("$175.00"));

    // Completed appointments cannot be cancelled.
    cabinet(temp_dir.path())
        .args(["clinic", "cancel", "4000"])
        .assert()
        .failure();
}

#[test]
fn clinic_rosters_can_be_listed() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["clinic", "add-patient", "Ada", "30", "F"])
        .assert()
        .success();
    cabinet(temp_dir.path())
        .args(["clinic", "add-patient", "Grace", "28", "F"])
        .assert()
        .success();
    cabinet(temp_dir.path())
        .args(["clinic", "add-doctor", "Dr. Grey", "Cardiology"])
        .assert()
        .success();
    cabinet(temp_dir.path())
        .args([
            "clinic",
            "add-medicine",
            "Aspirin",
            "Bayer",
            "3.5",
            "100",
            "01/01/2028",
        ])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["clinic", "list-patients"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ada"))
        .stdout(predicates::str::contains("Grace"));

    cabinet(temp_dir.path())
        .args(["clinic", "list-doctors"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Dr. Grey"));

    cabinet(temp_dir.path())
        .args(["clinic", "list-medicines"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Aspirin"));

    // No appointments booked yet.
    cabinet(temp_dir.path())
        .args(["clinic", "list-appointments"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No appointments found"));

    cabinet(temp_dir.path())
        .args(["clinic", "schedule", "1000", "2000", "01/09/2026", "10:00"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["clinic", "list-appointments"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Scheduled"));
}

#[test]
fn config_capacity_is_persisted_and_enforced() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["config", "capacity.contacts", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("capacity.contacts = 1"));

    cabinet(temp_dir.path())
        .args(["contacts", "add", "Ada", "555"])
        .assert()
        .success();

    cabinet(temp_dir.path())
        .args(["contacts", "add", "Grace", "556"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("full"));
}

#[test]
fn check_reports_snapshot_shapes() {
    let temp_dir = tempfile::tempdir().unwrap();

    cabinet(temp_dir.path())
        .args(["contacts", "add", "Ada", "555"])
        .assert()
        .success();

    // Append garbage that is not a whole record.
    let path = temp_dir.path().join("address_book.dat");
    let mut bytes = std::fs::read(&path).unwrap();
    bytes.extend_from_slice(b"xx");
    std::fs::write(&path, bytes).unwrap();

    cabinet(temp_dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicates::str::contains("1 records"))
        .stdout(predicates::str::contains("2 trailing bytes"))
        .stdout(predicates::str::contains("absent"));

    // Loading tolerates the trailing bytes.
    cabinet(temp_dir.path())
        .args(["contacts", "search", "Ada"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ada"));
}
