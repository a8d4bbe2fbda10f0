#![cfg_attr(feature = "no-console", windows_subsystem = "windows")]

mod args;
mod catalog;
mod controller;
mod pipeline;

use std::process::ExitCode;

use clap::Parser;

use util::debug_log;

use args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    #[cfg(debug_assertions)]
    {
        if args.no_debug_logging {
            debug_log::disable();
        } else if !args.debug_error_log_panics {
            debug_log::panic_on_errors::disable();
        }
    }

    match args.log_dir() {
        Some(dir) => match debug_log::log_file::init(&dir) {
            Ok(path) => util::debug_log_info!("Logging to `{}`.", path.display()),
            Err(e) => util::debug_log_warning!("Continuing without a log file: {e}"),
        },
        None => util::debug_log_info!("Not writing a log file."),
    }

    controller::run_ui(args)
}
