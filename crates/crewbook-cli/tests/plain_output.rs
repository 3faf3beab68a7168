use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn crewbook(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("crewbook").unwrap();
    cmd.env_remove("CREWBOOK_PATH").arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn test_plain_company_list() {
    let dir = TempDir::new().unwrap();

    crewbook(dir.path())
        .args(["company", "add", "Acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("company saved"));

    crewbook(dir.path())
        .args(["company", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 companies\n\n"))
        .stdout(predicate::str::contains("Acme"));
}

#[test]
fn test_plain_error_goes_to_stderr() {
    let dir = TempDir::new().unwrap();

    crewbook(dir.path())
        .args(["worker", "show", "42"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Not found: worker 42"));
}

#[allow(deprecated)]
#[test]
fn test_main_help() {
    let output = Command::cargo_bin("crewbook")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    let help = String::from_utf8(output.stdout).unwrap();
    assert!(help.contains("Keep HR records for field crews"));
    assert!(help.contains("roster"));
}
