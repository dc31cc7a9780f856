//! voicewav CLI - encode and inspect speech recordings as canonical WAV
//!
//! This binary provides commands for turning decoded signals into WAV
//! files, checking WAV headers, and previewing how a recorder format is
//! uploaded.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use voicewav_cli::cli_args::{Cli, Commands};
use voicewav_cli::{commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            output,
            json,
        } => commands::encode::run(&input, &output, json),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::Classify { mime_type, json } => commands::classify::run(&mime_type, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
