#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use tablat::Table;

pub fn tablat() -> Command {
    cargo_bin_cmd!("tablat")
}

/// Unique scratch path inside the system temp dir; any existing file is removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tablat.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `contents` to a fresh scratch file and return its path
pub fn temp_file(name: &str, ext: &str, contents: &str) -> PathBuf {
    let path = temp_path(name, ext);
    fs::write(&path, contents).expect("write scratch file");
    path
}

/// Path of a config file that does not exist, so defaults are used
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_noconf"), "conf")
        .to_string_lossy()
        .to_string()
}

/// Headers A, BB, CCC with two rows: 1 22 333 / 4 5 6
pub fn abc_table() -> Table {
    Table::new(["A", "BB", "CCC"], [1, 22, 333, 4, 5, 6], None)
}

pub const SAMPLE_JSON: &str = r#"{
    "name": ["alpha", "beta", "gamma"],
    "size": [1, 22, 333],
    "ok": [true, false, null]
}"#;
