#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at a scratch dir so the user's
/// own configuration is never read.
pub fn rtg() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtogether_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rtogether");
    cmd.env("HOME", &home)
        .env("APPDATA", &home)
        .env_remove("RTOGETHER_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtogether.sqlite", name));
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
    rtg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add(db_path: &str, args: &[&str]) {
    rtg()
        .args(["--db", db_path, "add"])
        .args(args)
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add(
        db_path,
        &[
            "1995-03-15",
            "--kind",
            "birthday",
            "--title",
            "Mai's birthday",
            "--author",
            "an",
        ],
    );
    add(
        db_path,
        &[
            "2025-09-03",
            "--kind",
            "anniversary",
            "--title",
            "First date",
            "--author",
            "mai",
        ],
    );
    add(
        db_path,
        &["2025-12-24", "--title", "Christmas eve dinner", "--note", "Hanoi"],
    );
}
