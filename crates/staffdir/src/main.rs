//! `staffdir` - CLI for the employee directory
//!
//! Every invocation builds a fresh in-memory directory from the sample data
//! and/or a seed file, runs one command (or a shell session) against it and
//! prints the result.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, IsTerminal};

use clap::Parser;

use staffdir::cli::{Cli, Command, ConfigCommand};
use staffdir::{init_logging, Config, Renderer, Session, Shell};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration, then let flags override it
    let mut config = Config::load_from(cli.config.clone())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let renderer = Renderer::new(config.display.format, config.display.salary_decimals);

    match cli.command {
        Command::Directory(command) => {
            let mut session = Session::from_config(&config.directory)?;
            let outcome = session.execute(command)?;
            println!("{}", renderer.render(&outcome)?);
        }
        Command::Shell => {
            let mut session = Session::from_config(&config.directory)?;
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            Shell::new(&mut session, renderer, prompt).run(stdin.lock(), io::stdout())?;
        }
        Command::Config(config_cmd) => handle_config(&config, config_cmd)?,
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Directory]");
                println!("  Sample data:        {}", config.directory.sample_data);
                println!(
                    "  Seed file:          {}",
                    config
                        .directory
                        .seed_path
                        .as_ref()
                        .map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
                );
                println!();
                println!("[Display]");
                println!("  Format:             {:?}", config.display.format);
                println!("  Salary decimals:    {}", config.display.salary_decimals);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
