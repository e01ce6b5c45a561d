//! Common test utilities for integration tests

use jung::Jung;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a session backed by a fresh data file in a temporary directory
#[allow(dead_code)]
pub fn get_test_session() -> (Jung, TempDir) {
    let dir = TempDir::new().unwrap();
    let jung = Jung::with_data_file(data_path(&dir));
    (jung, dir)
}

/// Location of the data file inside a test directory
pub fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("jung.txt")
}

/// Run each command, failing the test on any error reply
#[allow(dead_code)]
pub fn run_all(jung: &mut Jung, commands: &[&str]) {
    for command in commands {
        let reply = jung.process_command(command);
        assert!(!reply.is_error, "{:?} failed: {}", command, reply.message);
    }
}

/// Lines of the data file, as stored on disk
#[allow(dead_code)]
pub fn stored_lines(dir: &TempDir) -> Vec<String> {
    fs::read_to_string(data_path(dir))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
