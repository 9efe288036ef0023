//! Integration tests for list and item commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::checklist_cmd;

fn init_store() -> TempDir {
    let temp = TempDir::new().unwrap();
    checklist_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn run(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    checklist_cmd().current_dir(root).args(args).assert()
}

fn record(root: &Path, name: &str) -> serde_json::Value {
    let content = fs::read_to_string(root.join(format!("{}.json", name))).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_no_lists() {
    let temp = init_store();

    run(temp.path(), &["lists"])
        .success()
        .stdout(predicate::str::contains("No lists found"));
}

#[test]
fn test_new_list_writes_empty_record() {
    let temp = init_store();

    run(temp.path(), &["new", "Groceries"])
        .success()
        .stdout(predicate::str::contains("Created list 'Groceries'"));

    assert_eq!(
        fs::read_to_string(temp.path().join("Groceries.json")).unwrap(),
        "[]"
    );
    run(temp.path(), &["lists"])
        .success()
        .stdout(predicate::str::contains("* 1. Groceries (0 of 0 open)"));
}

#[test]
fn test_blank_list_name_is_skipped() {
    let temp = init_store();

    run(temp.path(), &["new", "   "])
        .success()
        .stdout(predicate::str::contains("Skipped: list name is empty"));

    run(temp.path(), &["lists"])
        .success()
        .stdout(predicate::str::contains("No lists found"));
}

#[test]
fn test_duplicate_list_name_is_skipped() {
    let temp = init_store();

    run(temp.path(), &["new", "Groceries"]).success();
    run(temp.path(), &["add", "Milk"]).success();
    run(temp.path(), &["new", "groceries"])
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(record(temp.path(), "Groceries").as_array().unwrap().len(), 1);
}

#[test]
fn test_add_toggle_show_walkthrough() {
    let temp = init_store();

    run(temp.path(), &["new", "Groceries"]).success();
    run(temp.path(), &["add", "Milk"])
        .success()
        .stdout(predicate::str::contains("Added 'Milk' to Groceries"));

    assert_eq!(
        record(temp.path(), "Groceries"),
        serde_json::json!([{"text": "Milk", "checked": false}])
    );

    run(temp.path(), &["toggle", "1"])
        .success()
        .stdout(predicate::str::contains("Checked 'Milk'"));
    assert_eq!(
        record(temp.path(), "Groceries"),
        serde_json::json!([{"text": "Milk", "checked": true}])
    );

    run(temp.path(), &["add", "Eggs"]).success();
    assert_eq!(
        record(temp.path(), "Groceries"),
        serde_json::json!([
            {"text": "Milk", "checked": true},
            {"text": "Eggs", "checked": false}
        ])
    );

    run(temp.path(), &["show"])
        .success()
        .stdout("Groceries\n  2. [ ] Eggs\n  1. [x] Milk\n");
}

#[test]
fn test_add_several_items_at_once() {
    let temp = init_store();

    run(temp.path(), &["new", "Chores"]).success();
    run(temp.path(), &["add", "Dishes", "", "Laundry"])
        .success()
        .stdout(predicate::str::contains("Skipped: item text is empty"));

    assert_eq!(
        record(temp.path(), "Chores"),
        serde_json::json!([
            {"text": "Dishes", "checked": false},
            {"text": "Laundry", "checked": false}
        ])
    );
}

#[test]
fn test_deferred_policy_writes_final_state() {
    let temp = init_store();
    run(temp.path(), &["config", "write_policy", "deferred"]).success();

    run(temp.path(), &["new", "Chores"]).success();
    run(temp.path(), &["add", "Dishes", "Laundry", "Sweep"]).success();
    run(temp.path(), &["toggle", "1", "3"]).success();

    assert_eq!(
        record(temp.path(), "Chores"),
        serde_json::json!([
            {"text": "Dishes", "checked": true},
            {"text": "Laundry", "checked": false},
            {"text": "Sweep", "checked": true}
        ])
    );
}

#[test]
fn test_toggle_out_of_range_fails() {
    let temp = init_store();

    run(temp.path(), &["new", "Groceries"]).success();
    run(temp.path(), &["add", "Milk"]).success();

    run(temp.path(), &["toggle", "2"])
        .code(4)
        .stderr(predicate::str::contains("has 1 items"));
    run(temp.path(), &["toggle", "0"]).code(4);

    assert_eq!(
        record(temp.path(), "Groceries"),
        serde_json::json!([{"text": "Milk", "checked": false}])
    );
}

#[test]
fn test_item_commands_need_a_selection() {
    let temp = init_store();

    fs::write(temp.path().join("Chores.json"), "[]").unwrap();

    run(temp.path(), &["add", "Dishes"])
        .failure()
        .stderr(predicate::str::contains("No list selected"));

    run(temp.path(), &["add", "--list", "Chores", "Dishes"]).success();
    assert_eq!(record(temp.path(), "Chores").as_array().unwrap().len(), 1);
}

#[test]
fn test_selection_survives_between_runs() {
    let temp = init_store();

    run(temp.path(), &["new", "Work"]).success();
    run(temp.path(), &["new", "Home"]).success();
    run(temp.path(), &["select", "Work"])
        .success()
        .stdout(predicate::str::contains("Selected 'Work'"));

    run(temp.path(), &["add", "Report"]).success();

    assert_eq!(record(temp.path(), "Work").as_array().unwrap().len(), 1);
    assert_eq!(record(temp.path(), "Home").as_array().unwrap().len(), 0);
}

#[test]
fn test_delete_by_name_and_position() {
    let temp = init_store();

    run(temp.path(), &["new", "Alpha"]).success();
    run(temp.path(), &["new", "Beta"]).success();

    run(temp.path(), &["delete", "Beta"])
        .success()
        .stdout(predicate::str::contains("Deleted list 'Beta'"));
    assert!(!temp.path().join("Beta.json").exists());

    run(temp.path(), &["delete", "1"])
        .success()
        .stdout(predicate::str::contains("Deleted list 'Alpha'"));
    assert!(!temp.path().join("Alpha.json").exists());

    run(temp.path(), &["lists"])
        .success()
        .stdout(predicate::str::contains("No lists found"));
}

#[test]
fn test_delete_selected_clears_selection() {
    let temp = init_store();

    run(temp.path(), &["new", "Groceries"]).success();
    run(temp.path(), &["delete", "Groceries"]).success();
    run(temp.path(), &["new", "Chores"]).success();
    run(temp.path(), &["delete", "Chores"]).success();

    run(temp.path(), &["show"])
        .failure()
        .stderr(predicate::str::contains("No list selected"));
}

#[test]
fn test_unknown_list_fails() {
    let temp = init_store();

    run(temp.path(), &["show", "--list", "Nope"])
        .code(3)
        .stderr(predicate::str::contains("List not found: 'Nope'"));
}

#[test]
fn test_unsafe_list_name_stays_inside_store() {
    let temp = init_store();

    run(temp.path(), &["new", "../escape"]).success();

    assert!(temp.path().join("%2E.%2Fescape.json").exists());
    assert!(!temp.path().parent().unwrap().join("escape.json").exists());
    run(temp.path(), &["lists"])
        .success()
        .stdout(predicate::str::contains("1. ../escape"));
}

#[test]
fn test_corrupt_record_shows_as_empty_list() {
    let temp = init_store();

    fs::write(temp.path().join("Broken.json"), "{oops").unwrap();
    fs::write(temp.path().join("notes.txt"), "not a list").unwrap();

    run(temp.path(), &["lists"])
        .success()
        .stdout(predicate::str::contains("1. Broken (0 of 0 open)"))
        .stdout(predicate::str::contains("notes").not());

    assert_eq!(
        fs::read_to_string(temp.path().join("Broken.json")).unwrap(),
        "{oops"
    );

    run(temp.path(), &["add", "--list", "Broken", "Fixed"]).success();
    assert_eq!(
        record(temp.path(), "Broken"),
        serde_json::json!([{"text": "Fixed", "checked": false}])
    );
}

#[test]
fn test_pretty_json_records() {
    let temp = init_store();
    run(temp.path(), &["config", "pretty_json", "true"]).success();

    run(temp.path(), &["new", "Groceries"]).success();
    run(temp.path(), &["add", "Milk"]).success();

    let content = fs::read_to_string(temp.path().join("Groceries.json")).unwrap();
    assert!(content.contains('\n'));
    assert_eq!(
        record(temp.path(), "Groceries"),
        serde_json::json!([{"text": "Milk", "checked": false}])
    );
}

#[test]
fn test_write_failure_is_reported_on_stderr() {
    let temp = init_store();
    fs::create_dir(temp.path().join("Groceries.json")).unwrap();

    run(temp.path(), &["new", "Groceries"])
        .success()
        .stderr(predicate::str::contains("event=save status=error"))
        .stderr(predicate::str::contains("Groceries.json"));
}

#[test]
fn test_write_failure_is_reported_without_log_files() {
    let temp = init_store();
    fs::write(temp.path().join(".checklist").join("logs"), "not a directory").unwrap();
    fs::create_dir(temp.path().join("Groceries.json")).unwrap();

    run(temp.path(), &["new", "Groceries"])
        .success()
        .stderr(predicate::str::contains("log files disabled"))
        .stderr(predicate::str::contains("event=save status=error"));
}
