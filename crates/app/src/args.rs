//! Contains [Args], which are parsed command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Parsed command line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq, Hash)]
#[command(about = "Stitches overlapping photos into panoramas.")]
pub struct Args {
    /// Images to open on startup.
    pub images: Vec<PathBuf>,

    /// Write the log file into this directory instead of the app's data
    /// directory.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Don't write a log file.
    #[arg(long, conflicts_with = "log_dir")]
    pub no_log_file: bool,

    /// Fill the match and pano tables with sample data built from the opened
    /// images. Useful for working on the UI without a stitcher attached.
    #[arg(long)]
    pub sample_data: bool,

    #[cfg(debug_assertions)]
    /// Disable debug logging. This option only exists if `debug_assertions` are
    /// enabled.
    #[arg(long)]
    pub no_debug_logging: bool,

    #[cfg(debug_assertions)]
    /// Enable debug error log panics. This option only exists if
    /// `debug_assertions` are enabled.
    #[arg(long, conflicts_with = "no_debug_logging")]
    pub debug_error_log_panics: bool,
}

impl Args {
    /// Where the log file should go, or [None] if there shouldn't be one.
    pub fn log_dir(&self) -> Option<PathBuf> {
        if self.no_log_file {
            return None;
        }
        self.log_dir.clone().or_else(util::local_data::logs_path)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn images_and_log_dir() {
        let args = Args::try_parse_from([
            "pano-stitcher",
            "--log-dir",
            "/tmp/logs",
            "a.jpg",
            "b.png",
        ])
        .expect("Arguments should parse.");

        assert_eq!(args.images, [PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
        assert_eq!(args.log_dir(), Some(PathBuf::from("/tmp/logs")));
        assert!(!args.sample_data);
    }

    #[test]
    fn no_log_file_means_no_log_dir() {
        let args = Args::try_parse_from(["pano-stitcher", "--no-log-file"])
            .expect("Arguments should parse.");
        assert_eq!(args.log_dir(), None);
    }

    #[test]
    fn log_flags_conflict() {
        assert!(
            Args::try_parse_from(["pano-stitcher", "--no-log-file", "--log-dir", "/tmp"]).is_err()
        );
    }
}
