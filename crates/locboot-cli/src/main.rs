//! locboot CLI entry point.
//!
//! Provides command-line tools for working with locale bootstrap data:
//! - `locboot resolve` - Explain which locale a set of inputs resolves to
//! - `locboot languages` - List the supported languages
//! - `locboot fetch` - Fetch and decode a string table over HTTP
//! - `locboot check` - Report string-table key coverage across languages

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_fetch, run_languages, run_resolve, CheckArgs, FetchArgs, LanguagesArgs,
    ResolveArgs,
};

/// Locale bootstrap tools.
#[derive(Debug, Parser)]
#[command(name = "locboot")]
#[command(about = "Locale bootstrap tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output (tracing to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Explain which locale a set of inputs resolves to
    Resolve(ResolveArgs),
    /// List the supported languages and their framework codes
    Languages(LanguagesArgs),
    /// Fetch and decode a string table over HTTP
    Fetch(FetchArgs),
    /// Report string-table key coverage across languages
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "locboot=debug".into()),
            )
            .with_writer(io::stderr)
            .init();
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args),
        Commands::Languages(args) => run_languages(args),
        Commands::Fetch(args) => run_fetch(args),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
