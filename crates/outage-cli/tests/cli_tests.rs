use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn outage_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("outage").expect("Failed to find outage binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

#[test]
fn test_cli_add_step_success() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args([
            "step",
            "add",
            "Main circuit drainage",
            "--start",
            "2025-03-10",
            "--end",
            "2025-03-12",
            "--duration",
            "3",
            "--responsible",
            "Mechanical team",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created step with ID: 1"))
        .stdout(predicate::str::contains("Main circuit drainage"))
        .stdout(predicate::str::contains("Mechanical team"));
}

#[test]
fn test_cli_list_empty_steps() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["step", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No steps found."))
        .stdout(predicate::str::contains("No shutdown window set."));
}

#[test]
fn test_cli_add_then_list() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["step", "add", "Preparation", "--start", "2025-03-10"])
        .assert()
        .success();
    outage_cmd(db)
        .args(["step", "add", "Drainage", "--start", "2025-03-12"])
        .assert()
        .success();

    outage_cmd(db)
        .args(["step", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Protocol Steps"))
        .stdout(predicate::str::contains("Preparation"))
        .stdout(predicate::str::contains("Drainage"));
}

#[test]
fn test_cli_update_duration_unit() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["step", "add", "Tests and trials", "--start", "2025-03-20"])
        .assert()
        .success();

    outage_cmd(db)
        .args([
            "step", "update", "1", "--duration", "12", "--unit", "hours",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated step 1"))
        .stdout(predicate::str::contains("12h"));
}

#[test]
fn test_cli_update_unknown_step_reports_not_found() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["step", "update", "9", "--name", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 9 not found"));
}

#[test]
fn test_cli_dependency_flow() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["step", "add", "A", "--start", "2025-01-01", "--duration", "2"])
        .assert()
        .success();
    outage_cmd(db)
        .args([
            "step",
            "add",
            "B",
            "--start",
            "2025-01-03",
            "--depends-on",
            "1",
        ])
        .assert()
        .success();

    outage_cmd(db)
        .args(["step", "can-start", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cannot start yet"));

    outage_cmd(db)
        .args(["step", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status set to done"));

    outage_cmd(db)
        .args(["step", "can-start", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("can start"));

    outage_cmd(db)
        .args(["step", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted step 1"));

    outage_cmd(db)
        .args(["step", "can-start", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("can start"));
}

#[test]
fn test_cli_window_set_and_show() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["window", "set", "2025-03-01", "2025-04-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shutdown window"));

    outage_cmd(db)
        .args(["window", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-01"))
        .stdout(predicate::str::contains("2025-04-15"));
}

#[test]
fn test_cli_demo_seeds_protocol_and_protects_existing() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["demo", "--start", "2025-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 9 example step(s)"));

    // Second run without --force refuses
    outage_cmd(db)
        .args(["demo", "--start", "2025-03-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pass --force"));

    outage_cmd(db)
        .args(["demo", "--start", "2025-03-10", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 9 example step(s)"));
}

#[test]
fn test_cli_gantt_renders_chart() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args(["demo", "--start", "2025-03-10"])
        .assert()
        .success();

    outage_cmd(db)
        .args(["gantt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preparation and securing"))
        .stdout(predicate::str::contains("Legend:"))
        .stdout(predicate::str::contains("Dependencies:"));
}

#[test]
fn test_cli_gantt_svg_export() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();
    let svg_path = temp_dir.path().join("gantt.svg");

    outage_cmd(db)
        .args(["demo", "--start", "2025-03-10"])
        .assert()
        .success();

    outage_cmd(db)
        .args(["gantt", "--svg", svg_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("SVG written to"));

    let svg = std::fs::read_to_string(&svg_path).expect("SVG file exists");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("arrowhead"));
}

#[test]
fn test_cli_move_shifts_dates() {
    let temp_dir = create_cli_test_environment();
    let db = temp_dir.path().join("cli_test.db");
    let db = db.to_str().unwrap();

    outage_cmd(db)
        .args([
            "step", "add", "Drainage", "--start", "2025-03-10", "--end", "2025-03-12",
            "--duration", "3",
        ])
        .assert()
        .success();

    outage_cmd(db)
        .args(["step", "move", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-12"))
        .stdout(predicate::str::contains("2025-03-14"));
}
