use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

fn declog() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("declog").unwrap();
    cmd.env_remove("DECLOG_DIR").env_remove("DECLOG_LOG");
    cmd
}

fn init(dir: &TempDir) {
    declog().arg("init").current_dir(dir.path()).assert().success();
}

/// Add a decision and return its id.
fn add(dir: &TempDir, title: &str) -> String {
    let output = declog()
        .args([
            "add",
            "--title",
            title,
            "--context",
            "Need a database",
            "--option",
            "Postgres|JSONB;extensions|migration effort",
            "--option",
            "MySQL|already running|licensing",
            "--chosen",
            "Postgres",
            "--date",
            "2024-01-01",
            "--json",
        ])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    value["id"].as_str().unwrap().to_string()
}

fn list_json(dir: &TempDir, status: &str) -> Vec<Value> {
    let output = declog()
        .args(["list", "--status", status, "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn init_creates_journal_dir() {
    let dir = TempDir::new().unwrap();
    declog()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains(".declog"));

    assert!(dir.path().join(".declog").is_dir());
    assert!(dir.path().join(".declog/config.json").exists());
}

#[test]
fn init_twice_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    declog()
        .arg("init")
        .current_dir(dir.path())
        .assert()
        .failure();
}

#[test]
fn commands_outside_journal_fail() {
    let dir = TempDir::new().unwrap();
    declog()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("declog init"));
}

#[test]
fn list_empty_journal() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    declog()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No decisions yet"));
}

#[test]
fn add_and_show() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "Pick a database");

    declog()
        .args(["show", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Pick a database"))
        .stdout(predicates::str::contains("Status: PENDING"))
        .stdout(predicates::str::contains("* Postgres"))
        .stdout(predicates::str::contains("+ JSONB"));

    let output = declog()
        .args(["show", &id, "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "PENDING");
    assert!(value["evaluation"].is_null());
    assert_eq!(value["options"].as_array().unwrap().len(), 2);
    assert_eq!(value["options"][0]["pros"][1], "extensions");
}

#[test]
fn add_reports_every_validation_error() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    declog()
        .args([
            "add",
            "--title",
            "",
            "--context",
            "ctx",
            "--option",
            "Only",
            "--chosen",
            "Other",
        ])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("Title is required"))
        .stderr(predicates::str::contains("At least 2 options"))
        .stderr(predicates::str::contains("one of the listed options"));

    assert!(list_json(&dir, "all").is_empty());
}

#[test]
fn newest_decision_listed_first() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, "First");
    add(&dir, "Second");

    let output = declog()
        .arg("list")
        .current_dir(dir.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.find("Second").unwrap() < stdout.find("First").unwrap());
}

#[test]
fn full_lifecycle() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "Lifecycle");

    // Cannot evaluate before executing
    declog()
        .args(["evaluate", &id, "--result", "positive", "--learnings", "early"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot be evaluated"));

    declog()
        .args(["execute", &id])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("as executed"));

    declog()
        .args(["execute", &id])
        .current_dir(dir.path())
        .assert()
        .failure();

    declog()
        .args(["evaluate", &id, "--result", "positive", "--learnings", "Good call"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("POSITIVE"));

    let output = declog()
        .args(["show", &id, "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "EVALUATED");
    assert_eq!(value["evaluation"]["result"], "POSITIVE");
    assert_eq!(value["evaluation"]["learnings"], "Good call");
    assert!(value["evaluation"]["evaluatedAt"].is_string());
}

#[test]
fn evaluate_validates_input() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "Eval");
    declog()
        .args(["execute", &id])
        .current_dir(dir.path())
        .assert()
        .success();

    declog()
        .args(["evaluate", &id, "--result", "maybe", "--learnings", "  "])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("valid result"))
        .stderr(predicates::str::contains("Learnings are required"));
}

#[test]
fn status_filter_and_stats() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let a = add(&dir, "A");
    let b = add(&dir, "B");
    add(&dir, "C");

    for id in [&a, &b] {
        declog()
            .args(["execute", id])
            .current_dir(dir.path())
            .assert()
            .success();
    }
    declog()
        .args(["evaluate", &a, "--result", "neutral", "--learnings", "meh"])
        .current_dir(dir.path())
        .assert()
        .success();

    let executed = list_json(&dir, "executed");
    assert_eq!(executed.len(), 1);
    assert_eq!(executed[0]["id"], b.as_str());
    assert_eq!(list_json(&dir, "pending").len(), 1);
    assert_eq!(list_json(&dir, "all").len(), 3);

    let output = declog()
        .args(["stats", "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["pending"], 1);
    assert_eq!(stats["executed"], 1);
    assert_eq!(stats["evaluated"], 1);
}

#[test]
fn unknown_filter_fails() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    declog()
        .args(["list", "--status", "done"])
        .current_dir(dir.path())
        .assert()
        .failure();
}

#[test]
fn edit_updates_fields_and_guards_chosen() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "Before");

    declog()
        .args(["edit", &id, "--title", "After", "--chosen", "MySQL"])
        .current_dir(dir.path())
        .assert()
        .success();

    // Replacing the options so the chosen one disappears is rejected
    declog()
        .args(["edit", &id, "--option", "SQLite", "--option", "Redis"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("one of the listed options"));

    let output = declog()
        .args(["show", &id, "--json"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "After");
    assert_eq!(value["chosen"], "MySQL");
    assert_eq!(value["options"][0]["name"], "Postgres");
}

#[test]
fn delete_and_missing_ids() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let id = add(&dir, "Doomed");

    declog()
        .args(["delete", "no-such-id"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
    assert_eq!(list_json(&dir, "all").len(), 1);

    declog()
        .args(["delete", &id])
        .current_dir(dir.path())
        .assert()
        .success();
    assert!(list_json(&dir, "all").is_empty());

    declog()
        .args(["show", &id])
        .current_dir(dir.path())
        .assert()
        .failure();
}

#[test]
fn clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    add(&dir, "Keep?");

    declog()
        .arg("clear")
        .current_dir(dir.path())
        .assert()
        .failure();
    assert_eq!(list_json(&dir, "all").len(), 1);

    declog()
        .args(["clear", "--yes"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Removed 1 decisions"));
    assert!(list_json(&dir, "all").is_empty());
    assert!(!dir.path().join(".declog/decision-log.decisions").exists());
}

#[test]
fn dir_flag_and_subdirectory_discovery() {
    let journal = TempDir::new().unwrap();
    declog()
        .args(["init", "--dir"])
        .arg(journal.path())
        .assert()
        .success();

    let elsewhere = TempDir::new().unwrap();
    declog()
        .args([
            "add", "--title", "Remote", "--context", "c", "--option", "A", "--option", "B",
            "--chosen", "A", "--dir",
        ])
        .arg(journal.path())
        .current_dir(elsewhere.path())
        .assert()
        .success();

    let sub = journal.path().join("nested").join("deeper");
    std::fs::create_dir_all(&sub).unwrap();
    declog()
        .arg("list")
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicates::str::contains("Remote"));
}

#[test]
fn corrupt_storage_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    std::fs::write(dir.path().join(".declog/decision-log.decisions"), "{broken").unwrap();

    declog()
        .arg("list")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No decisions yet"));
}
