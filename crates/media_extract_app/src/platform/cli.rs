use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use engine_logging::{LevelFilter, LogDestination};

#[derive(Debug, Parser)]
#[command(
    name = "media_extract",
    version,
    about = "MEDIA_EXTRACT.exe: social media content extraction console (simulated)"
)]
pub(crate) struct Cli {
    /// RON settings file; missing files fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "media_extract.ron")]
    pub config: PathBuf,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable the periodic title glitch.
    #[arg(long)]
    pub no_glitch: bool,

    /// Print the effective settings as RON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogTarget {
    Terminal,
    File,
    Both,
    Off,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["media_extract"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("media_extract.ron"));
        assert_eq!(cli.log_destination(), LogDestination::File);
        assert_eq!(cli.log_level(), LevelFilter::Info);
        assert!(!cli.no_glitch);
        assert!(!cli.print_config);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "media_extract",
            "--config",
            "/tmp/x.ron",
            "--log",
            "off",
            "-v",
            "--no-glitch",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("/tmp/x.ron"));
        assert_eq!(cli.log_destination(), LogDestination::Off);
        assert_eq!(cli.log_level(), LevelFilter::Debug);
        assert!(cli.no_glitch);
    }

    #[test]
    fn rejects_unknown_log_target() {
        assert!(Cli::try_parse_from(["media_extract", "--log", "syslog"]).is_err());
    }
}
