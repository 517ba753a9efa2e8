//! Log file path resolution.
//!
//! # Responsibilities
//! - Derive today's log file path from the configured directory
//! - Ensure the directory exists
//!
//! # Design Decisions
//! - Date stamps use `%Y-%m-%d`: sortable, and the file name doubles as
//!   the rotation comparator
//! - Directory creation errors are deferred: the subsequent file open is
//!   the authoritative failure point

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Format of the date stamp embedded in log file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date stamp.
pub fn today_stamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// Path of today's log file under `directory`, creating the directory if
/// needed (idempotent).
pub fn current_path(directory: &Path) -> PathBuf {
    let _ = fs::create_dir_all(directory);
    directory.join(today_stamp())
}

/// Date stamp embedded in a log file path.
pub fn date_stamp_of(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_path_is_idempotent_within_a_day() {
        let dir = tempfile::tempdir().unwrap();
        let first = current_path(dir.path());
        let second = current_path(dir.path());
        assert_eq!(first, second);
    }

    #[test]
    fn test_current_path_creates_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = current_path(&nested);
        assert!(nested.is_dir());
        assert_eq!(path.parent(), Some(nested.as_path()));
    }

    #[test]
    fn test_stamp_round_trips_through_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = current_path(dir.path());
        assert_eq!(date_stamp_of(&path), Some(today_stamp().as_str()));
    }

    #[test]
    fn test_distinct_dates_produce_distinct_paths() {
        let dir = Path::new("logs");
        assert_ne!(dir.join("2026-08-26"), dir.join("2026-08-27"));
        assert_eq!(date_stamp_of(&dir.join("2026-08-26")), Some("2026-08-26"));
    }
}
