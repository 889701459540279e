mod common;
use assert_cmd::cargo::cargo_bin_cmd;
use hiveprefix::history::load_history;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_assign_no_edit_remembers_suggestions() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());
    common::seed_history(&history, &[("/old/z.csv", "Z")]);

    // WHEN accepting suggestions as-is
    cargo_bin_cmd!("hiveprefix")
        .env("HIVEPREFIX_COLUMNS", "200")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--no-edit", "/data/a.csv", "/data/year=2021/b.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/2021"));

    // THEN both files are remembered next to the unrelated entry
    let stored = load_history(&history);
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.get("/data/a.csv"), Some("a"));
    assert_eq!(stored.get("/data/year=2021/b.csv"), Some("/2021"));
    assert_eq!(stored.get("/old/z.csv"), Some("Z"));
}

#[test]
fn test_assign_reads_edits_from_stdin() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    // GIVEN the user edits a.csv to X and b.csv to Y
    let output = cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--json", "a.csv", "b.csv"])
        .write_stdin("a.csv\tX\nb.csv\tY\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // THEN the final mapping holds the edits
    let mapping: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(mapping, serde_json::json!({"a.csv": "X", "b.csv": "Y"}));

    // AND the next suggestion uses them
    let output = cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["suggest", "--json", "a.csv"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(rows[0]["prefix"], "X");
}

#[test]
fn test_assign_empty_stdin_keeps_suggestions() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--json", "/data/readings.csv"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"readings\""));

    assert_eq!(load_history(&history).get("/data/readings.csv"), Some("readings"));
}

#[test]
fn test_assign_set_overrides_before_review() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args([
            "assign",
            "--no-edit",
            "/lake/k=v/f.csv",
            "--set",
            "/lake/k=v/f.csv",
            "custom",
        ])
        .assert()
        .success();

    assert_eq!(load_history(&history).get("/lake/k=v/f.csv"), Some("custom"));
}

#[test]
fn test_assign_set_outside_batch_fails() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--no-edit", "a.csv", "--set", "b.csv", "B"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not one of the files being assigned"));

    assert!(!history.exists());
}

#[test]
fn test_assign_rejects_unknown_row_and_keeps_history() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());
    common::seed_history(&history, &[("a.csv", "A")]);

    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "a.csv"])
        .write_stdin("other.csv\tX\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not part of this batch"));

    let stored = load_history(&history);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored.get("a.csv"), Some("A"));
}

#[test]
fn test_assign_refuses_to_overwrite_unreadable_history() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());
    std::fs::create_dir_all(history.parent().unwrap()).unwrap();
    let broken = r#"{"previous_prefixes": ["/keep/me.csv", "KEEP"],}"#;
    std::fs::write(&history, broken).unwrap();

    // WHEN assigning against a history file that cannot be parsed
    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--no-edit", "x.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("History error"));

    // THEN the file is left exactly as it was
    assert_eq!(std::fs::read_to_string(&history).unwrap(), broken);
}

#[test]
fn test_assign_repeated_file_through_stdin() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    // GIVEN the same file twice and the untouched form piped back
    let suggested = hiveprefix::resolver::resolve(
        &["a.csv".to_string(), "a.csv".to_string()],
        &hiveprefix::models::PrefixHistory::new(),
    );
    let form = hiveprefix::editor::render_form(&suggested);

    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--json", "a.csv", "a.csv"])
        .write_stdin(form)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a.csv\": \"a\""));

    assert_eq!(load_history(&history).get("a.csv"), Some("a"));
}

#[test]
fn test_assign_partition_wins_over_remembered_prefix() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());
    let path = "/data/year=2021/month=03/temp.csv";
    common::seed_history(&history, &[(path, "stale")]);

    cargo_bin_cmd!("hiveprefix")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "--no-edit", path])
        .assert()
        .success();

    assert_eq!(load_history(&history).get(path), Some("/2021/03"));
}

#[test]
#[cfg(unix)]
fn test_assign_with_editor_accepting_form() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    // GIVEN an editor that leaves the form untouched
    cargo_bin_cmd!("hiveprefix")
        .env("HIVEPREFIX_FORCE_EDITOR", "1")
        .env("EDITOR", "true")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "/data/readings.csv"])
        .write_stdin("")
        .assert()
        .success();

    assert_eq!(load_history(&history).get("/data/readings.csv"), Some("readings"));
}

#[test]
#[cfg(target_os = "linux")]
fn test_assign_with_editor_changes() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    // GIVEN an editor that rewrites the prefix column
    cargo_bin_cmd!("hiveprefix")
        .env("HIVEPREFIX_FORCE_EDITOR", "1")
        .env("EDITOR", r"sed -i 's/\treadings$/\tedited/'")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "/data/readings.csv"])
        .write_stdin("")
        .assert()
        .success();

    assert_eq!(load_history(&history).get("/data/readings.csv"), Some("edited"));
}

#[test]
#[cfg(unix)]
fn test_assign_aborts_when_editor_fails() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    cargo_bin_cmd!("hiveprefix")
        .env("HIVEPREFIX_FORCE_EDITOR", "1")
        .env("EDITOR", "false")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "a.csv"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Editor closed with exit code"));

    assert!(!history.exists());
}

#[test]
fn test_assign_reports_missing_editor() {
    let temp = tempdir().unwrap();
    let history = common::history_path(temp.path());

    cargo_bin_cmd!("hiveprefix")
        .env("HIVEPREFIX_FORCE_EDITOR", "1")
        .env("EDITOR", "definitely-not-an-editor-binary")
        .arg("--history-file")
        .arg(&history)
        .args(["assign", "a.csv"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
