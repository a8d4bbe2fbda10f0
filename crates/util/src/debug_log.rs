//! Contains tools for logging.
//!
//! Terminal output only happens when `cfg!(debug_assertions)` is true (and
//! [enabled] hasn't been turned off). Every line is also kept in [history] and,
//! once [log_file::init] has been called, appended to the log file. Those two
//! sinks work in release builds too so a bug report always has something to
//! go on.

pub mod history;
pub mod log_file;
pub mod panic_on_errors;

use std::fmt::{self, Display, Formatter};
use std::panic::Location;
#[cfg(debug_assertions)]
use std::sync::atomic::{AtomicBool, Ordering};

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Log some info. Printed to stdout if both `cfg!(debug_assertions)` and
/// [enabled] are true.
#[macro_export]
macro_rules! debug_log_info {
    ($($arg:tt)*) => {{
        $crate::debug_log::log($crate::debug_log::Level::Info, ::std::format!($($arg)*));
    }};
}

/// Log a warning. Printed to stderr if both `cfg!(debug_assertions)` and
/// [enabled] are true.
#[macro_export]
macro_rules! debug_log_warning {
    ($($arg:tt)*) => {{
        $crate::debug_log::log($crate::debug_log::Level::Warning, ::std::format!($($arg)*));
    }};
}

/// Log an error. Printed to stderr if both `cfg!(debug_assertions)` and
/// [enabled] are true, in which case it will also panic if
/// [panic_on_errors::enabled] is true.
#[macro_export]
macro_rules! debug_log_error {
    ($($arg:tt)*) => {{
        $crate::debug_log::log($crate::debug_log::Level::Error, ::std::format!($($arg)*));
    }};
}

/// How severe a log line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    /// The ANSI color used for the level's tag in a terminal.
    #[cfg(debug_assertions)]
    const fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[35m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// Records a log line in every sink.
///
/// This function gets called by the debug log macros (e.g. [debug_log_info])
/// and generally shouldn't be called directly.
#[track_caller]
pub fn log(level: Level, msg: String) {
    let loc = Location::caller();
    let where_ = format!("{}:{}:{}", loc.file(), loc.line(), loc.column());
    let when = now_rfc3339();

    let line = format!("{when} [{level}] {msg} ({where_})");
    log_file::append(&line);
    history::push(line);

    #[cfg(debug_assertions)]
    if enabled() {
        print_to_terminal(level, &msg, &where_, &when);

        if level == Level::Error && panic_on_errors::enabled() {
            panic!("Panicking on error logging enabled.");
        }
    }
}

#[cfg(debug_assertions)]
fn print_to_terminal(level: Level, msg: &str, where_: &str, when: &str) {
    use std::io::IsTerminal;

    let is_terminal = if level == Level::Info {
        std::io::stdout().is_terminal()
    } else {
        std::io::stderr().is_terminal()
    };
    let (blue, color, reset_color) = if is_terminal {
        ("\x1b[34m", level.color(), "\x1b[0m")
    } else {
        ("", "", "")
    };

    let exec = std::env::args().collect::<Vec<_>>().join(" ");
    let text = format!("{blue}DEBUG LOG{reset_color} [{color}{level}{reset_color}]: {msg}\n")
        + format!("\tWhere: {blue}{where_}{reset_color}\n").as_str()
        + format!("\tTime:  {blue}{when}{reset_color}\n").as_str()
        + format!("\tExec.: {blue}{exec}{reset_color}").as_str();

    if level == Level::Info {
        println!("{text}");
    } else {
        eprintln!("{text}");
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(&Rfc3339)
        .unwrap_or_else(|e| format!("Unknown time: {e}"))
}

/// Whether terminal logging is enabled or not.
///
/// Terminal logging cannot be enabled when `cfg!(debug_assertions)` is false,
/// otherwise it's enabled by default.
#[inline(always)]
pub fn enabled() -> bool {
    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn enabled_impl() -> bool {
        false
    }

    #[cfg(debug_assertions)]
    #[inline(always)]
    fn enabled_impl() -> bool {
        ENABLED.load(Ordering::Relaxed)
    }

    enabled_impl()
}

/// Disable terminal logging. The log file and [history] are unaffected.
#[inline(always)]
pub fn disable() {
    #[cfg(debug_assertions)]
    ENABLED.store(false, Ordering::Relaxed);
}

#[cfg(debug_assertions)]
static ENABLED: AtomicBool = AtomicBool::new(true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_display_as_tags() {
        assert_eq!(Level::Info.to_string(), "INFO");
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }

    #[test]
    fn warnings_reach_history() {
        crate::debug_log_warning!("history check {}", 42);

        let lines = history::recent();
        let line = lines
            .iter()
            .find(|line| line.contains("history check 42"))
            .expect("The warning should have been recorded.");
        assert!(line.contains("[WARNING]"));
        assert!(line.contains("debug_log.rs"));
    }
}
