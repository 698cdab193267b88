#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsp() -> Command {
    cargo_bin_cmd!("rshiftperf")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rshiftperf.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    rsp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI with explicit hours.
pub fn add(db_path: &str, date: &str, track: &str, perf: &str, hours: &str, extra: &[&str]) {
    let mut args = vec![
        "--db", db_path, "add", date, "--track", track, "--perf", perf, "--hours", hours,
    ];
    args.extend_from_slice(extra);
    rsp().args(&args).assert().success();
}

/// Initialize DB and add a small March 2025 dataset
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add(db_path, "2025-03-03", "normal", "7.25", "8", &[]);
    add(db_path, "2025-03-10", "normal", "7.25", "8", &[]);
    add(db_path, "2025-03-10", "forklift", "3", "3", &[]);
    add(db_path, "2025-03-20", "normal", "10.88", "8", &[]);
}
