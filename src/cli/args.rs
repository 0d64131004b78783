//! CLI argument definitions using clap
//!
//! Flags override the matching config file values:
//! - rollcall --config ./rollcall.json --port 7000 --database ./roster.db

use clap::Parser;
use std::path::PathBuf;

use crate::config::RollcallConfig;
use crate::observability::LogFormat;

/// rollcall - read-only HTTP API over a class roster database
#[derive(Parser, Debug, Default)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Path to the roster database
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Open the roster database read-only
    #[arg(long)]
    pub read_only: bool,

    /// Log filter directive (e.g. "info", "rollcall=debug")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format: json or pretty
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Apply flag overrides on top of `config`
    pub fn apply(&self, config: &mut RollcallConfig) {
        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(database) = &self.database {
            config.database.path = database.clone();
        }
        if self.read_only {
            config.database.read_only = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["rollcall"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.read_only);

        let mut config = RollcallConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.http.port, 6969);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "rollcall",
            "--port",
            "7000",
            "--database",
            "/srv/roster.db",
            "--read-only",
            "--log-format",
            "pretty",
        ])
        .unwrap();

        let mut config = RollcallConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.http.port, 7000);
        assert_eq!(config.database.path, PathBuf::from("/srv/roster.db"));
        assert!(config.database.read_only);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_bad_port_rejected() {
        assert!(Cli::try_parse_from(["rollcall", "--port", "not-a-port"]).is_err());
    }

    #[test]
    fn test_bad_log_format_rejected() {
        assert!(Cli::try_parse_from(["rollcall", "--log-format", "xml"]).is_err());
    }
}
