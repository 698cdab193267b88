use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add, init_db, init_db_with_data, rsp, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rsp()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_reports_effective_hours_and_percentage() {
    let db_path = setup_test_db("add_report");
    init_db(&db_path);

    rsp()
        .args([
            "--db", &db_path, "add", "2025-04-02", "--perf", "7.25", "--hours", "8", "--in", "05:45",
        ])
        .assert()
        .success()
        .stdout(contains("[normal]"))
        .stdout(contains("05:45 → 13:45"))
        .stdout(contains("7.25 effective hours"))
        .stdout(contains("100%"));
}

#[test]
fn test_add_derives_hours_from_night_shift() {
    let db_path = setup_test_db("add_night");
    init_db(&db_path);

    rsp()
        .args([
            "--db", &db_path, "add", "2025-04-03", "--perf", "7.5", "--in", "21:45", "--out", "06:15",
        ])
        .assert()
        .success()
        .stdout(contains("8.50h"));
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("add_invalid");
    init_db(&db_path);

    rsp()
        .args(["--db", &db_path, "add", "2025-04-02", "--perf", "abc", "--hours", "8"])
        .assert()
        .failure()
        .stderr(contains("Invalid numeric input"));

    rsp()
        .args(["--db", &db_path, "add", "2025-04-02", "--perf=-5", "--hours", "8"])
        .assert()
        .failure()
        .stderr(contains("Invalid numeric input"));

    rsp()
        .args(["--db", &db_path, "add", "2025-04-02", "--perf", "7", "--hours", "17"])
        .assert()
        .failure()
        .stderr(contains("Hours out of range"));

    rsp()
        .args([
            "--db", &db_path, "add", "2025-04-02", "--perf", "7", "--hours", "0.5", "--overtime",
        ])
        .assert()
        .failure()
        .stderr(contains("Hours out of range"));

    rsp()
        .args(["--db", &db_path, "add", "2025-04-02", "--perf", "7", "--in", "7h30"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rsp()
        .args(["--db", &db_path, "add", "2025-04-02", "--perf", "7", "--track", "crane"])
        .assert()
        .failure()
        .stderr(contains("Invalid track"));

    rsp()
        .args(["--db", &db_path, "add", "02/04/2025", "--perf", "7", "--hours", "8"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_month_shows_both_tracks() {
    let db_path = setup_test_db("list_month");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("2025-03-03"))
        .stdout(contains("2025-03-20"))
        .stdout(contains("forklift"))
        .stdout(contains("16-end"))
        .stdout(contains("150%"));
}

#[test]
fn test_list_filters_by_track_and_day() {
    let db_path = setup_test_db("list_filter");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "list", "--period", "2025-03-10", "--track", "forklift"])
        .assert()
        .success()
        .stdout(contains("2025-03-10"))
        .stdout(contains("forklift"))
        .stdout(contains("normal").not())
        .stdout(contains("2025-03-03").not());
}

#[test]
fn test_resubmission_replaces_entry() {
    let db_path = setup_test_db("replace");
    init_db(&db_path);

    add(&db_path, "2025-05-05", "normal", "5", "8", &[]);
    add(&db_path, "2025-05-05", "normal", "8.7", "8", &[]);

    rsp()
        .args(["--db", &db_path, "list", "--period", "2025-05"])
        .assert()
        .success()
        .stdout(contains("8.70"))
        .stdout(contains("5.00").not());
}

#[test]
fn test_summary_halves() {
    let db_path = setup_test_db("summary");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "summary", "--month", "2025-03", "--track", "normal"])
        .assert()
        .success()
        .stdout(contains("2025-03 (1-15)"))
        .stdout(contains("2025-03 (16-end)"))
        .stdout(contains("7.25"))
        .stdout(contains("100%"))
        .stdout(contains("10.88"))
        .stdout(contains("150%"));
}

#[test]
fn test_summary_single_half() {
    let db_path = setup_test_db("summary_half");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "summary", "--month", "2025-03", "--half", "second"])
        .assert()
        .success()
        .stdout(contains("2025-03 (16-end)"))
        .stdout(contains("(1-15)").not());

    rsp()
        .args(["--db", &db_path, "summary", "--month", "2025-03", "--half", "third"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_delete_track_then_date() {
    let db_path = setup_test_db("delete");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "del", "2025-03-10", "--track", "forklift", "--yes"])
        .assert()
        .success();

    rsp()
        .args(["--db", &db_path, "list", "--period", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("normal"))
        .stdout(contains("forklift").not());

    rsp()
        .args(["--db", &db_path, "del", "2025-03-10", "--yes"])
        .assert()
        .success();

    rsp()
        .args(["--db", &db_path, "del", "2025-03-10", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No record found for date 2025-03-10"));
}

#[test]
fn test_shift_classification() {
    rsp()
        .args(["shift", "--at", "14:00"])
        .assert()
        .success()
        .stdout(contains("morning"))
        .stdout(contains("sign-in 05:45"));

    rsp()
        .args(["shift", "--at", "22:15"])
        .assert()
        .success()
        .stdout(contains("night"))
        .stdout(contains("sign-in 21:45"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("2025-03-10 forklift"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rsp()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("normal 3, forklift 1"))
        .stdout(contains("2025-03-03 → 2025-03-20"))
        .stdout(contains("Integrity check passed"));
}
