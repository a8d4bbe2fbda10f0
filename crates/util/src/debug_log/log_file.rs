//! The log file every log line gets appended to once [init] has been called.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use thiserror::Error;

/// The name of the log file inside the log directory. It's truncated every
/// time the app starts.
pub const FILE_NAME: &str = "latest.log";

#[derive(Debug)]
struct LogFile {
    path: PathBuf,
    file: Mutex<File>,
}

static LOG_FILE: OnceLock<LogFile> = OnceLock::new();

/// Indicates that the log file couldn't be set up.
#[derive(Error, Debug)]
pub enum LogFileError {
    #[error("The log file is already open at `{}`.", .0.display())]
    AlreadyInitialized(PathBuf),
    #[error("Failed to create the log directory `{}`: {source}", .dir.display())]
    CreateDir { dir: PathBuf, source: io::Error },
    #[error("Failed to open the log file `{}`: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },
}

/// Creates (or truncates) the log file inside `dir`, creating `dir` if needed,
/// and starts mirroring log lines to it. The file's path is returned.
///
/// This can only succeed once per process.
pub fn init(dir: &Path) -> Result<&'static Path, LogFileError> {
    if let Some(log_file) = LOG_FILE.get() {
        return Err(LogFileError::AlreadyInitialized(log_file.path.clone()));
    }

    fs::create_dir_all(dir).map_err(|source| LogFileError::CreateDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let file_path = dir.join(FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&file_path)
        .map_err(|source| LogFileError::Open {
            path: file_path.clone(),
            source,
        })?;

    let mut set_here = false;
    let log_file = LOG_FILE.get_or_init(|| {
        set_here = true;
        LogFile {
            path: file_path,
            file: Mutex::new(file),
        }
    });

    // Another thread won the race, our file handle was dropped.
    if !set_here {
        return Err(LogFileError::AlreadyInitialized(log_file.path.clone()));
    }
    Ok(log_file.path.as_path())
}

/// The path of the active log file, or [None] if [init] hasn't succeeded.
pub fn path() -> Option<&'static Path> {
    LOG_FILE.get().map(|log_file| log_file.path.as_path())
}

/// Appends a line to the log file. Does nothing before [init].
///
/// Write failures are dropped since there's nowhere left to report them.
pub(super) fn append(line: &str) {
    let Some(log_file) = LOG_FILE.get() else {
        return;
    };

    let mut file = log_file
        .file
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    _ = writeln!(file, "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    // `LOG_FILE` is process-wide so everything that initializes it lives in one
    // test.
    #[test]
    fn init_once_then_lines_are_appended() {
        let dir = std::env::temp_dir()
            .join(format!("pano-stitcher-log-test-{}", std::process::id()));
        _ = fs::remove_dir_all(&dir);

        let log_path = init(&dir).expect("Creating the log file should work.");
        assert_eq!(log_path, dir.join(FILE_NAME));
        assert_eq!(path(), Some(log_path));

        assert!(matches!(
            init(&dir),
            Err(LogFileError::AlreadyInitialized(existing)) if existing == log_path
        ));

        crate::debug_log_info!("written to the log file");

        let contents = fs::read_to_string(log_path).expect("The log file should be readable.");
        assert!(contents.contains("[INFO] written to the log file"));

        _ = fs::remove_dir_all(&dir);
    }
}
