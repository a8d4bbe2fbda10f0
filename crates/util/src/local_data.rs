//! Functions for finding OS-specific paths to local app data.

use std::env;
use std::path::PathBuf;

use crate::APP_NAME;

/// The name of the folder that will store app data.
pub const ROOT_DIR_NAME: &str = APP_NAME;

/// The name of the folder inside [root_path] that holds log files.
pub const LOGS_DIR_NAME: &str = "Logs";

/// The path to the root of the app's data directory, unique for each user.
///
/// [None] is returned when the OS doesn't tell us where the user's data lives
/// (the environment variable is missing). Nothing is created on disk.
pub fn root_path() -> Option<PathBuf> {
    let mut local_data = PathBuf::from(env::var_os(LOCAL_DATA_ROOT_ENV_VAR)?);
    local_data.extend(LOCAL_APP_DATA_SUFFIX);
    Some(local_data)
}

/// The directory the log file is written to by default.
pub fn logs_path() -> Option<PathBuf> {
    root_path().map(|root| root.join(LOGS_DIR_NAME))
}

#[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
compile_error!("Unsupported platform.");

#[cfg(target_os = "windows")]
const LOCAL_DATA_ROOT_ENV_VAR: &str = "LOCALAPPDATA";

#[cfg(any(target_os = "macos", target_os = "linux"))]
const LOCAL_DATA_ROOT_ENV_VAR: &str = "HOME";

#[cfg(target_os = "windows")]
const LOCAL_APP_DATA_SUFFIX: &[&str] = &[ROOT_DIR_NAME];

#[cfg(target_os = "macos")]
const LOCAL_APP_DATA_SUFFIX: &[&str] = &["Library", "Application Support", ROOT_DIR_NAME];

#[cfg(target_os = "linux")]
const LOCAL_APP_DATA_SUFFIX: &[&str] = &[".local", "share", ROOT_DIR_NAME];
