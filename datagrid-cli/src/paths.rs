//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "datagrid";
const APPLICATION: &str = "datagrid";

/// Name of the log file written by the current run.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/datagrid` or `~/.cache/datagrid`
/// - macOS: `~/Library/Caches/dev.datagrid.datagrid`
/// - Windows: `C:\Users\<User>\AppData\Local\datagrid\datagrid\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file for this run.
///
/// Falls back to the working directory when no home directory is known.
pub fn log_file() -> PathBuf {
    match cache_dir() {
        Some(dir) if fs::create_dir_all(&dir).is_ok() => dir.join(LATEST_LOG),
        _ => PathBuf::from("datagrid.log"),
    }
}

/// Rotate logs: rename latest.log to a timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }

    cleanup_old_logs(&cache, MAX_OLD_LOGS);
}

/// Remove old log files, keeping only the most recent `keep`.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::time::Duration;
    use std::time::SystemTime;

    use super::*;

    fn touch(dir: &Path, name: &str, age_secs: u64) {
        let file = File::create(dir.join(name)).expect("create log");
        let modified = SystemTime::now() - Duration::from_secs(age_secs);
        file.set_modified(modified).expect("set mtime");
    }

    #[test]
    fn test_cleanup_keeps_newest_logs() {
        let tmp = tempfile::tempdir().expect("tempdir");
        touch(tmp.path(), "20240101_000000.log", 300);
        touch(tmp.path(), "20240102_000000.log", 200);
        touch(tmp.path(), "20240103_000000.log", 100);
        touch(tmp.path(), LATEST_LOG, 400);
        touch(tmp.path(), "notes.txt", 500);

        cleanup_old_logs(tmp.path(), 2);

        let mut left: Vec<String> = fs::read_dir(tmp.path())
            .expect("read dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(
            left,
            ["20240102_000000.log", "20240103_000000.log", "latest.log", "notes.txt"]
        );
    }

    #[test]
    fn test_cleanup_under_limit_removes_nothing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        touch(tmp.path(), "a.log", 10);
        cleanup_old_logs(tmp.path(), MAX_OLD_LOGS);
        assert!(tmp.path().join("a.log").exists());
    }
}
