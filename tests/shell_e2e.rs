use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn jotmark(notes_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jotmark").unwrap();
    cmd.env("JOTMARK_FILE", notes_file);
    cmd
}

#[test]
fn first_run_seeds_and_lists_the_default_note() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    jotmark(&file)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("First note"));
}

#[test]
fn add_and_save_persist_across_runs() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    jotmark(&file)
        .write_stdin("add\nsave\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Note created.")
                .and(predicate::str::contains("Saved: New note")),
        );

    // The collection (new note in front of the seed) survives into a
    // second process.
    jotmark(&file)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("New note").and(predicate::str::contains("First note")),
        );
}

#[test]
fn delete_asks_for_confirmation() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    // add selects the new note; the first delete is declined, the second
    // confirmed, which reselects the seed note.
    jotmark(&file)
        .write_stdin("add\ndelete\nn\ndelete\ny\nlist\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Operation cancelled.")
                .and(predicate::str::contains("Note deleted: Untitled"))
                .and(predicate::str::contains("First note")),
        );
}

#[test]
fn deleting_the_last_note_leaves_an_empty_list() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    jotmark(&file)
        .write_stdin("delete\ny\nlist\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Note deleted: First note")
                .and(predicate::str::contains("No notes.")),
        );
}

#[test]
fn corrupt_notes_file_recovers_to_the_seed() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");
    std::fs::write(&file, "definitely not json").unwrap();

    jotmark(&file)
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("First note"));
}

#[test]
fn preview_renders_the_draft_as_html() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("notes.json");

    jotmark(&file)
        .write_stdin("preview\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Getting started</h1>"));
}

#[test]
fn file_flag_overrides_the_notes_location() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("elsewhere.json");

    let mut cmd = Command::cargo_bin("jotmark").unwrap();
    cmd.arg("--file")
        .arg(&file)
        .write_stdin("add\nquit\n")
        .assert()
        .success();

    assert!(file.exists());
}
