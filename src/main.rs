use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use gtd::cli::args::{Cli, Commands};
use gtd::cli::commands;
use gtd::config::{ColorSetting, Config};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("could not load configuration")?;

    if cli.no_color {
        ColorSetting::Never.apply();
    } else {
        config.general.color.apply();
    }
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell(&config, format)?,
        Commands::Parse { line } => {
            let (output, accepted) = commands::parse_line(&line, format)?;
            println!("{output}");
            return Ok(if accepted {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            });
        },
        Commands::Folders => commands::folders(format)?,
        Commands::InitConfig { force } => commands::init_config(cli.config.as_deref(), force)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(ExitCode::SUCCESS)
}
