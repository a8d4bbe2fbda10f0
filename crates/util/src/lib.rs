//! Utilities shared by the Pano Stitcher crates: debug logging (with a log
//! file the bug report window can point at), local data paths and small egui
//! helpers.

pub mod debug_log;
pub mod local_data;
pub mod ui;

/// The name of the app.
pub const APP_NAME: &str = "Pano Stitcher";
