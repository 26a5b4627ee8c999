//! Command-line interface for staffdir.
//!
//! This module provides the CLI structure for the `staffdir` binary and the
//! line grammar of its interactive shell.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddArgs, ConfigCommand, DirectoryCommand, FilterCommand, RaiseArgs, SearchCommand, SortKey,
};

use crate::config::Config;
use crate::render::OutputFormat;

/// staffdir - Query and edit an in-memory employee directory
///
/// The directory starts from the built-in sample employees and/or a JSON
/// seed file. Changes last only as long as the process; use `shell` to run
/// several commands against one directory.
#[derive(Debug, Parser)]
#[command(name = "staffdir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON seed file to import (overrides configuration)
    #[arg(long, global = true, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Start without the built-in sample employees
    #[arg(long, global = true)]
    pub no_sample_data: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Directory(DirectoryCommand),

    /// Read commands from standard input against one directory
    Shell,

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                2 => crate::logging::Verbosity::Debug,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// Apply command-line overrides to a loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.display.format = format;
        }
        if let Some(seed) = &self.seed {
            config.directory.seed_path = Some(seed.clone());
        }
        if self.no_sample_data {
            config.directory.sample_data = false;
        }
    }
}

/// One line typed into the interactive shell.
#[derive(Debug, Parser)]
#[command(name = "staffdir", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    /// The command to execute
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands accepted by the interactive shell.
#[derive(Debug, PartialEq, Subcommand)]
pub enum ShellCommand {
    #[command(flatten)]
    Directory(DirectoryCommand),

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Verbosity;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "staffdir");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["staffdir", "-q", "list"]).verbosity(), Verbosity::Quiet);
        assert_eq!(parse(&["staffdir", "list"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["staffdir", "-v", "list"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["staffdir", "-vv", "list"]).verbosity(), Verbosity::Debug);
        assert_eq!(parse(&["staffdir", "-vvv", "list"]).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_list() {
        let cli = parse(&["staffdir", "list"]);
        assert!(matches!(
            cli.command,
            Command::Directory(DirectoryCommand::List)
        ));
    }

    #[test]
    fn test_parse_search_name() {
        let cli = parse(&["staffdir", "search", "name", "jane"]);
        assert!(matches!(
            cli.command,
            Command::Directory(DirectoryCommand::Search(SearchCommand::Name { ref text })) if text == "jane"
        ));
    }

    #[test]
    fn test_parse_filter_salary() {
        let cli = parse(&["staffdir", "filter", "salary", "45000", "55000"]);
        match cli.command {
            Command::Directory(DirectoryCommand::Filter(FilterCommand::Salary { min, max })) => {
                assert!((min - 45_000.0).abs() < f64::EPSILON);
                assert!((max - 55_000.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_sort() {
        let cli = parse(&["staffdir", "sort", "performance"]);
        assert!(matches!(
            cli.command,
            Command::Directory(DirectoryCommand::Sort {
                key: SortKey::Performance
            })
        ));
    }

    #[test]
    fn test_parse_top_rejects_negative() {
        assert!(Cli::try_parse_from(["staffdir", "top", "-1"]).is_err());
        let cli = parse(&["staffdir", "top", "0"]);
        assert!(matches!(
            cli.command,
            Command::Directory(DirectoryCommand::Top { n: 0 })
        ));
    }

    #[test]
    fn test_parse_raise() {
        let cli = parse(&["staffdir", "raise", "--min-rating", "4", "--percent", "10"]);
        match cli.command {
            Command::Directory(DirectoryCommand::Raise(args)) => {
                assert!((args.min_rating - 4.0).abs() < f64::EPSILON);
                assert!((args.percent - 10.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add() {
        let cli = parse(&[
            "staffdir", "add", "-n", "Grace", "-d", "IT", "-s", "95000", "-r", "5", "-e", "30",
        ]);
        match cli.command {
            Command::Directory(DirectoryCommand::Add(args)) => {
                assert_eq!(args.name, "Grace");
                assert_eq!(args.id, None);
                assert_eq!(args.experience, 30);
                assert!(!args.inactive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_update_with_negative_value() {
        let cli = parse(&["staffdir", "update", "1", "salary", "-5"]);
        assert!(matches!(
            cli.command,
            Command::Directory(DirectoryCommand::Update { id: 1, ref field, ref value })
                if field == "salary" && value == "-5"
        ));
    }

    #[test]
    fn test_parse_global_overrides() {
        let cli = parse(&[
            "staffdir",
            "list",
            "--format",
            "json",
            "--no-sample-data",
            "--seed",
            "/tmp/seed.json",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(!config.directory.sample_data);
        assert_eq!(
            config.directory.seed_path,
            Some(PathBuf::from("/tmp/seed.json"))
        );
    }

    #[test]
    fn test_parse_with_config() {
        let cli = parse(&["staffdir", "-c", "/custom/config.toml", "count"]);
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_shell_and_config() {
        assert!(matches!(parse(&["staffdir", "shell"]).command, Command::Shell));
        assert!(matches!(
            parse(&["staffdir", "config", "path"]).command,
            Command::Config(ConfigCommand::Path)
        ));
    }

    #[test]
    fn test_shell_line_parse() {
        let line = ShellLine::try_parse_from(["show", "4"]).unwrap();
        assert_eq!(
            line.command,
            ShellCommand::Directory(DirectoryCommand::Show { id: 4 })
        );

        let line = ShellLine::try_parse_from(["quit"]).unwrap();
        assert_eq!(line.command, ShellCommand::Exit);

        assert!(ShellLine::try_parse_from(["config", "path"]).is_err());
    }
}
