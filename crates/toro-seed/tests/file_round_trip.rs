//! File loading integration tests.
//!
//! Each test writes under the system temp directory with a name unique
//! to the test and process, then removes the file.

use std::fs;
use std::path::PathBuf;

use toro_core::FormatError;
use toro_seed::{load_from_file, save_to_file, SeedError};
use toro_test_utils::{glider, grid_from_rows};

// ── Helpers ─────────────────────────────────────────────────────

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("toro-seed-{}-{name}.txt", std::process::id()))
}

struct TempFile(PathBuf);

impl TempFile {
    fn with_contents(name: &str, contents: &[u8]) -> Self {
        let path = temp_path(name);
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

// ── Tests ───────────────────────────────────────────────────────

#[test]
fn saved_grid_loads_back_identically() {
    let file = TempFile(temp_path("saved"));
    let grid = glider();
    save_to_file(&file.0, &grid).unwrap();
    assert_eq!(load_from_file(&file.0).unwrap(), grid);
}

#[test]
fn load_reads_hand_written_file() {
    let file = TempFile::with_contents("hand", b".x.\r\n.x.\r\n.x.\r\n");
    let grid = load_from_file(&file.0).unwrap();
    assert_eq!(grid, grid_from_rows(&[".x.", ".x.", ".x."]));
}

#[test]
fn missing_file_is_io_error() {
    let path = temp_path("does-not-exist");
    match load_from_file(&path) {
        Err(SeedError::Io { path: p, source }) => {
            assert_eq!(p, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn short_second_row_is_format_error() {
    let file = TempFile::with_contents("short", b"x.x\nx.\n...\n");
    assert!(matches!(
        load_from_file(&file.0),
        Err(SeedError::Format(FormatError::RowLength { line: 2, .. }))
    ));
}

#[test]
fn io_error_message_names_the_path() {
    let path = temp_path("missing-for-message");
    let err = load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains(&path.display().to_string()));
}
