use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

fn phonedir(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonedir").unwrap();
    cmd.current_dir(dir)
        .env("PHONEDIR_CONFIG_DIR", dir.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("PHONEDIR_FILE");
    cmd
}

fn contact(last: &str, first: &str) -> Value {
    json!({
        "last_name": last,
        "first_name": first,
        "middle_name": "Петрович",
        "organization": "Яндекс",
        "work_phone": "495-333-4444",
        "personal_phone": "916-222-3333"
    })
}

fn seed(dir: &Path, records: Vec<Value>) {
    let content = serde_json::to_string_pretty(&Value::Array(records)).unwrap();
    fs::write(dir.join("phone_directory.json"), content).unwrap();
}

fn stored(dir: &Path) -> Vec<Value> {
    let content = fs::read_to_string(dir.join("phone_directory.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn add_then_display() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .arg("add")
        .write_stdin("Соколов\nСергей\nАнатольевич\nСберБанк\n495-555-6666\n+7(916)6667777\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last Name: "))
        .stdout(predicate::str::contains("Personal Phone: "))
        .stdout(predicate::str::contains("Entry added successfully."));

    let records = stored(temp.path());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["last_name"], "Соколов");
    assert_eq!(records[0]["personal_phone"], "+7(916)6667777");

    let log = fs::read_to_string(temp.path().join("phone_directory.log")).unwrap();
    assert!(log.contains("event=record_added total=1"));

    phonedir(temp.path())
        .arg("display")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 1\nLast name: Соколов\nFirst name: Сергей"))
        .stdout(predicate::str::contains("Personal phone: +7(916)6667777"))
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn add_reports_every_invalid_field() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .arg("add")
        .write_stdin("1\nСергей\nАнатольевич\nСберБанк\nтест\n916-666-7777\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to create record"))
        .stdout(predicate::str::contains("2 validation errors for Record"))
        .stdout(predicate::str::contains("last_name"))
        .stdout(predicate::str::contains("work_phone"));

    assert!(!temp.path().join("phone_directory.json").exists());
}

#[test]
fn add_with_closed_input_fails() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .arg("add")
        .write_stdin("Соколов\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn display_pages_keep_absolute_ids() {
    let temp = tempfile::tempdir().unwrap();
    let names = ["Иванов", "Петров", "Сидоров", "Козлов", "Морозов", "Лебедев", "Новиков"];
    seed(temp.path(), names.iter().map(|n| contact(n, "Андрей")).collect());

    phonedir(temp.path())
        .args(["display", "-p", "2", "--records_per_page", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 6\nLast name: Лебедев"))
        .stdout(predicate::str::contains("ID 7\nLast name: Новиков"))
        .stdout(predicate::str::contains("ID 5").not())
        .stdout(predicate::str::contains("Page 2/2"));
}

#[test]
fn bare_invocation_displays_first_page() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), vec![contact("Лебедев", "Андрей")]);

    phonedir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 1\nLast name: Лебедев"))
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn zero_page_size_is_rejected() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .args(["display", "-r", "0"])
        .assert()
        .failure();
}

#[test]
fn search_by_field_ignores_case() {
    let temp = tempfile::tempdir().unwrap();
    seed(
        temp.path(),
        vec![contact("Иванов", "Алексей"), contact("Лебедев", "Андрей")],
    );

    phonedir(temp.path())
        .args(["search", "first_name=андрей"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 1\nLast name: Лебедев"))
        .stdout(predicate::str::contains("Иванов").not())
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn search_by_substring_spans_fields() {
    let temp = tempfile::tempdir().unwrap();
    seed(
        temp.path(),
        vec![contact("Иванов", "Алексей"), contact("Лебедев", "Андрей")],
    );

    phonedir(temp.path())
        .args(["search", "ЯНДЕКС"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 2\nLast name: Лебедев"))
        .stdout(predicate::str::contains("Page 1/1"));
}

#[test]
fn search_unknown_field_is_reported() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), vec![contact("Лебедев", "Андрей")]);

    phonedir(temp.path())
        .args(["search", "first_nam=андрей"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field 'first_nam' does not exist."))
        .stdout(predicate::str::contains("ID 1").not());

    let log = fs::read_to_string(temp.path().join("phone_directory.log")).unwrap();
    assert!(log.contains("Field 'first_nam' does not exist."));
}

#[test]
fn search_without_matches() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), vec![contact("Лебедев", "Андрей")]);

    phonedir(temp.path())
        .args(["search", "Сидоров"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found."))
        .stdout(predicate::str::contains("Page").not());
}

#[test]
fn edit_replaces_one_field() {
    let temp = tempfile::tempdir().unwrap();
    seed(
        temp.path(),
        vec![contact("Иванов", "Алексей"), contact("Лебедев", "Андрей")],
    );
    let before = stored(temp.path());

    phonedir(temp.path())
        .args(["edit", "2"])
        .write_stdin("2\nДмитрий\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current values:\nLast name: Лебедев"))
        .stdout(predicate::str::contains("Choose a field to edit:\n1. Last name"))
        .stdout(predicate::str::contains("Enter the new value for First name: "))
        .stdout(predicate::str::contains("Entry edited successfully."));

    let after = stored(temp.path());
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1]["first_name"], "Дмитрий");
    assert_eq!(after[1]["last_name"], before[1]["last_name"]);
    assert_eq!(after[1]["personal_phone"], before[1]["personal_phone"]);
}

#[test]
fn edit_rejects_invalid_value() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), vec![contact("Лебедев", "Андрей")]);
    let before = fs::read_to_string(temp.path().join("phone_directory.json")).unwrap();

    phonedir(temp.path())
        .args(["edit", "1"])
        .write_stdin("5\nтест\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid phone number"))
        .stdout(predicate::str::contains("Entry edited successfully.").not());

    let after = fs::read_to_string(temp.path().join("phone_directory.json")).unwrap();
    assert_eq!(after, before);
}

#[test]
fn edit_out_of_range_index() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), vec![contact("Лебедев", "Андрей")]);

    phonedir(temp.path())
        .args(["edit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid index."))
        .stdout(predicate::str::contains("Current values:").not());
}

#[test]
fn edit_unknown_menu_number() {
    let temp = tempfile::tempdir().unwrap();
    seed(temp.path(), vec![contact("Лебедев", "Андрей")]);

    phonedir(temp.path())
        .args(["edit", "1"])
        .write_stdin("9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a valid field number.",
        ));
}

#[test]
fn corrupt_file_loads_empty_and_logs() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("phone_directory.json"), "{not json").unwrap();

    phonedir(temp.path())
        .arg("display")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID").not())
        .stdout(predicate::str::contains("Page 1/0"));

    let log = fs::read_to_string(temp.path().join("phone_directory.log")).unwrap();
    assert!(log.contains("Error decoding JSON in the file"));

    let content = fs::read_to_string(temp.path().join("phone_directory.json")).unwrap();
    assert_eq!(content, "{not json");
}

#[test]
fn unreadable_data_file_exits_with_error() {
    let temp = tempfile::tempdir().unwrap();
    fs::create_dir(temp.path().join("phone_directory.json")).unwrap();

    phonedir(temp.path())
        .arg("display")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn file_flag_overrides_configured_path() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .args(["--file", "work.json", "add"])
        .write_stdin("Соколов\nСергей\nАнатольевич\nСберБанк\n495-555-6666\n916-666-7777\n")
        .assert()
        .success();

    assert!(temp.path().join("work.json").exists());
    assert!(!temp.path().join("phone_directory.json").exists());

    phonedir(temp.path())
        .arg("display")
        .env("PHONEDIR_FILE", temp.path().join("work.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Last name: Соколов"));
}

#[test]
fn config_changes_default_page_size() {
    let temp = tempfile::tempdir().unwrap();
    let names = ["Иванов", "Петров", "Сидоров"];
    seed(temp.path(), names.iter().map(|n| contact(n, "Андрей")).collect());

    phonedir(temp.path())
        .args(["config", "records-per-page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records-per-page set to 2"));

    phonedir(temp.path())
        .args(["config", "records-per-page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records-per-page = 2"));

    phonedir(temp.path())
        .arg("display")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 2"))
        .stdout(predicate::str::contains("ID 3").not())
        .stdout(predicate::str::contains("Page 1/2"));
}

#[test]
fn config_lists_all_keys() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = phone_directory.json"))
        .stdout(predicate::str::contains("load-policy = all-or-nothing"));
}

#[test]
fn config_unknown_key() {
    let temp = tempfile::tempdir().unwrap();

    phonedir(temp.path())
        .args(["config", "bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: bogus"));
}

#[test]
fn skip_invalid_policy_keeps_valid_records() {
    let temp = tempfile::tempdir().unwrap();
    let mut broken = contact("Сидоров", "Иван");
    broken["work_phone"] = json!("тест");
    seed(temp.path(), vec![contact("Лебедев", "Андрей"), broken]);

    phonedir(temp.path())
        .arg("display")
        .assert()
        .success()
        .stdout(predicate::str::contains("Лебедев").not());

    phonedir(temp.path())
        .args(["config", "load-policy", "skip-invalid"])
        .assert()
        .success();

    phonedir(temp.path())
        .arg("display")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID 1\nLast name: Лебедев"))
        .stdout(predicate::str::contains("Сидоров").not());
}
