use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn bookshelf(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.current_dir(home)
        .env("BOOKSHELF_CONFIG_DIR", home.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

fn read_catalog(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn first_run_creates_default_file_on_add() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The catalog is empty."));
    assert!(!temp_dir.path().join("library.json").exists());

    bookshelf(temp_dir.path())
        .write_stdin("1\nWar and Peace\nTolstoy\n1869\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (1): War and Peace"));

    let catalog = read_catalog(&temp_dir.path().join("library.json"));
    assert_eq!(catalog[0]["title"], "War and Peace");
    assert_eq!(catalog[0]["status"], "available");
}

#[test]
fn session_state_persists_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("books.json");

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .write_stdin("1\nWar and Peace\nTolstoy\n1869\n1\n1984\nOrwell\n1949\n5\n2\nlent\n0\n")
        .assert()
        .success();

    bookshelf(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .write_stdin("3\n1869\n4\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Title: War and Peace, Author: Tolstoy, Year: 1869, Status: available",
        ))
        .stdout(predicate::str::contains(
            "ID: 2, Title: 1984, Author: Orwell, Year: 1949, Status: lent",
        ));
}

#[test]
fn not_found_and_invalid_input_do_not_stop_the_loop() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("2\n3\n7\n5\nabc\n1\nA\nX\n2000\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book with id 3 not found"))
        .stdout(predicate::str::contains("Invalid choice '7'"))
        .stdout(predicate::str::contains("Invalid number: 'abc'"))
        .stdout(predicate::str::contains("Book added (1): A"));
}

#[test]
fn non_ascii_is_written_literally() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nМастер и Маргарита\nБулгаков\n1967\n0\n")
        .assert()
        .success();

    let raw = fs::read_to_string(temp_dir.path().join("library.json")).unwrap();
    assert!(raw.contains("Мастер и Маргарита"));
    assert!(raw.contains("    {"));
}

#[test]
fn malformed_catalog_fails_at_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("library.json"), "[{\"id\": 1}]").unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("0\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Catalog file is malformed"));
}

#[test]
fn config_file_selects_monotonic_ids() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{"file": "shelf.json", "id_policy": "monotonic"}"#,
    )
    .unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nA\nX\n2000\n1\nB\nY\n2001\n2\n1\n1\nC\nZ\n2002\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (3): C"));

    let catalog = read_catalog(&temp_dir.path().join("shelf.json"));
    let ids: Vec<_> = catalog
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
    assert!(temp_dir.path().join("shelf.seq.json").exists());
}

#[test]
fn sequential_ids_reuse_after_delete() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookshelf(temp_dir.path())
        .write_stdin("1\nA\nX\n2000\n1\nB\nY\n2001\n2\n1\n1\nC\nZ\n2002\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added (2): C"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let temp_dir = tempfile::tempdir().unwrap();

    bookshelf(temp_dir.path())
        .arg("--verbose")
        .write_stdin("0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("catalog loaded"))
        .stdout(predicate::str::contains("catalog loaded").not());
}
