use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shelf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("NO_COLOR", "1").arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn add_and_list_books() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["add-book", "Dune", "Frank Herbert", "9780441013593"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B001"));

    shelf(&dir)
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("Available"));
}

#[test]
fn empty_fields_are_rejected() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["add-book", "  ", "Author", "isbn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));

    shelf(&dir)
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books"));
}

#[test]
fn issue_and_return_flow() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["add-book", "Dune", "Frank Herbert", "111"])
        .assert()
        .success();
    shelf(&dir)
        .args(["add-member", "Alice", "alice@example.com", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("M001"));

    // Lowercase ids are accepted at the desk.
    shelf(&dir)
        .args(["issue", "b001", "m001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due:"));

    shelf(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Books issued:    1"));

    shelf(&dir)
        .args(["return", "B001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book returned"));

    shelf(&dir)
        .arg("loans")
        .assert()
        .success()
        .stdout(predicate::str::contains("T001"))
        .stdout(predicate::str::contains("Returned"));
}

#[test]
fn removing_an_issued_book_fails() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["add-book", "Dune", "Frank Herbert", "111"])
        .assert()
        .success();
    shelf(&dir)
        .args(["add-member", "Alice", "alice@example.com", "555-0100"])
        .assert()
        .success();
    shelf(&dir).args(["issue", "B001", "M001"]).assert().success();

    shelf(&dir)
        .args(["remove-book", "B001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be deleted"));

    shelf(&dir)
        .arg("books")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn issuing_an_unknown_book_fails() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["issue", "B042", "M001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book not found"));
}

#[test]
fn register_and_login() {
    let dir = TempDir::new().unwrap();

    shelf(&dir)
        .args(["register", "alice", "s3cret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created"));

    shelf(&dir)
        .args(["login", "alice", "s3cret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, alice"));

    shelf(&dir)
        .args(["login", "alice", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));

    shelf(&dir)
        .args(["register", "alice", "again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn export_writes_an_archive() {
    let dir = TempDir::new().unwrap();
    let dest = dir.path().join("backup.tar.gz");

    shelf(&dir)
        .args(["add-book", "Dune", "Frank Herbert", "111"])
        .assert()
        .success();
    shelf(&dir)
        .args(["export", dest.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    assert!(dest.exists());
}
