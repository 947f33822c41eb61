//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use rutcheck::FormatStyle;
use rutcheck::config::GlobalConfig;
use rutcheck::output::OutputMode;

/// rutcheck - Format and validate Chilean RUT numbers
#[derive(Parser, Debug)]
#[command(
    name = "rutcheck",
    version,
    about = "Format and validate Chilean RUT numbers",
    long_about = "Format and validate Chilean RUT numbers (Rol Único Tributario).\n\n\
                  Check digits are verified with the módulo 11 algorithm.\n\
                  Without RUT arguments, input is read from stdin, one per line."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format RUTs as 12.345.678-5 (no validation)
    Format {
        /// Omit thousands separators (12345678-5)
        #[arg(long)]
        plain: bool,

        /// RUTs to format (reads stdin when omitted)
        ruts: Vec<String>,
    },

    /// Validate RUT check digits (exit status 1 if any is invalid)
    Validate {
        /// Show why each invalid RUT was rejected
        #[arg(short, long)]
        explain: bool,

        /// RUTs to validate (reads stdin when omitted)
        ruts: Vec<String>,
    },

    /// Compute the check digit for a RUT body
    Dv {
        /// RUT body, with or without thousands separators
        body: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Format { plain, ruts }) => {
            let style = if plain { FormatStyle::Plain } else { config.format.style };
            commands::format(ruts, style, output_mode)
        },
        Some(Command::Validate { explain, ruts }) => commands::validate(ruts, explain, output_mode),
        Some(Command::Dv { body }) => commands::dv(&body, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": rutcheck::VERSION
                    })
                );
            } else {
                println!("rutcheck v{}", rutcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": rutcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rutcheck v{}", rutcheck::VERSION);
                println!("\nRun 'rutcheck --help' for usage");
                println!("Run 'rutcheck validate 12.345.678-5' to get started");
            }
            Ok(())
        },
    }
}
