mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(about = "Compare documentation texts and report semantic changes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compare an old and a new version of a document")]
    Diff {
        #[arg(help = "Path to the old/base text file")]
        old: String,
        #[arg(help = "Path to the new/changed text file")]
        new: String,
        #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
        #[arg(long, value_name = "PATH", help = "Load rule tables from a JSON config file")]
        config: Option<String>,
        #[arg(long, short, help = "Quiet mode: only show summary")]
        quiet: bool,
        #[arg(long, short, help = "Verbose mode: show additional details")]
        verbose: bool,
    },
    #[command(about = "Show the semantic category of every line in a document")]
    Classify {
        #[arg(help = "Path to the text file")]
        path: String,
        #[arg(long, value_name = "PATH", help = "Load rule tables from a JSON config file")]
        config: Option<String>,
        #[arg(long, help = "Include noise lines in the output")]
        all: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff {
            old,
            new,
            format,
            config,
            quiet,
            verbose,
        } => commands::diff::run(&old, &new, format, config.as_deref(), quiet, verbose),
        Commands::Classify { path, config, all } => {
            commands::classify::run(&path, config.as_deref(), all)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
