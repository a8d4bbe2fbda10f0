//! The "Report a bug" window: where to send reports and where the log file
//! is, each with a button to copy it.

use std::path::{Path, PathBuf};

use egui::{Context, RichText, Window};
use egui_phosphor::regular;

use util::debug_log::log_file;

/// Finds the log file that should be attached to bug reports.
#[cfg_attr(test, mockall::automock)]
pub trait LogFileLocator {
    /// The log file's path, or [None] if no log file is being written.
    fn log_file_path(&self) -> Option<PathBuf>;
}

/// The log file opened with [log_file::init].
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveLogFile;

impl LogFileLocator for ActiveLogFile {
    fn log_file_path(&self) -> Option<PathBuf> {
        log_file::path().map(Path::to_path_buf)
    }
}

/// Somewhere text can be copied to.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn copy(&self, text: &str);
}

/// Copies to the OS clipboard at the end of the frame.
impl ClipboardSink for Context {
    fn copy(&self, text: &str) {
        self.copy_text(text.to_owned());
    }
}

/// Where bug reports should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub issues_url: String,
    pub email: String,
}

/// Shown in place of the log file's path when there isn't one.
pub const NO_LOG_FILE_TEXT: &str = "No log file is being written.";

/// A paragraph of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub intro: &'static str,
    pub text: String,
    /// The label of the button that copies `text`, if it can be copied.
    pub copy_button: Option<&'static str>,
}

#[derive(Debug)]
pub struct BugReportPanel {
    visible: bool,
    contact: ContactInfo,
}

impl BugReportPanel {
    /// A hidden panel.
    pub fn new(contact: ContactInfo) -> Self {
        Self {
            visible: false,
            contact,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// What the window lists, top to bottom.
    pub fn sections(&self, log_path: Option<&Path>) -> [Section; 3] {
        let log_section = match log_path {
            Some(path) => Section {
                intro: "The log file is located at:",
                text: path.display().to_string(),
                copy_button: Some("Copy path to clipboard"),
            },
            None => Section {
                intro: "The log file is located at:",
                text: NO_LOG_FILE_TEXT.into(),
                copy_button: None,
            },
        };

        [
            Section {
                intro: "Report bugs here:",
                text: self.contact.issues_url.clone(),
                copy_button: Some("Copy link to clipboard"),
            },
            Section {
                intro: "You can also send the bug report by email:",
                text: self.contact.email.clone(),
                copy_button: Some("Copy email to clipboard"),
            },
            log_section,
        ]
    }

    /// Draws the window if it's visible. Closing the window hides the panel.
    pub fn draw(&mut self, ctx: &Context, log: &dyn LogFileLocator, clipboard: &dyn ClipboardSink) {
        if !self.visible {
            return;
        }

        let log_path = log.log_file_path();
        let sections = self.sections(log_path.as_deref());

        Window::new("Report a bug")
            .open(&mut self.visible)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                for (i, section) in sections.iter().enumerate() {
                    if i > 0 {
                        ui.add_space(12.0);
                    }

                    ui.label(section.intro);
                    ui.label(RichText::new(&section.text).monospace());

                    if let Some(label) = section.copy_button
                        && ui.button(format!("{} {label}", regular::COPY)).clicked()
                    {
                        clipboard.copy(&section.text);
                        util::debug_log_info!("Copied `{}` to the clipboard.", section.text);
                    }
                }
            });
    }
}
