//! CLI module for jsonfsm
//!
//! This module provides the command-line interface for the validator.
//!
//! ## Commands
//!
//! - `<file>` - Check a document (default action)
//! - `check [file] [-c TEXT]` - Lex, dump tokens, check and print the transition trace
//! - `lex [file] [-c TEXT]` - Token dump only
//!
//! A file path of `-` reads the document from stdin.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::SyntaxConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// The document was checked and rejected.
    pub const REJECTED: ExitCode = ExitCode(1);
    /// I/O or usage failure; nothing was checked.
    pub const FAILURE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 2).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a rejection error (exit code 1).
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::REJECTED)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Validate reduced-JSON documents and trace the checker's state machine
#[derive(Parser, Debug)]
#[command(name = "jsonfsm")]
#[command(version = VERSION)]
#[command(about = "Validate reduced-JSON documents and trace the checker's state machine", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to check (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Use the original lenient edge-case behavior (lone '-' is a number, unterminated strings
    /// are dropped, empty input is accepted)
    #[arg(long, global = true)]
    pub legacy: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lex, dump tokens, check and print the transition trace
    Check {
        /// Document to check (`-` for stdin)
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Check inline text instead of a file
        #[arg(short = 'c', long = "command", value_name = "TEXT")]
        command: Option<String>,
        /// Diagnostic format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Print only the verdict (no token dump, no trace)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the token dump only
    Lex {
        /// Document to lex (`-` for stdin)
        #[arg(value_name = "FILE", conflicts_with = "command")]
        file: Option<PathBuf>,
        /// Lex inline text instead of a file
        #[arg(short = 'c', long = "command", value_name = "TEXT")]
        command: Option<String>,
    },
}

/// How a rejected document is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"error": "..."}` on stdout
    Json,
    /// miette report with source context on stderr
    Pretty,
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl InputSource {
    fn resolve(file: Option<PathBuf>, inline: Option<String>) -> CliResult<Self> {
        match (file, inline) {
            (_, Some(text)) => Ok(InputSource::Inline(text)),
            (Some(path), None) if path.as_os_str() == "-" => Ok(InputSource::Stdin),
            (Some(path), None) => Ok(InputSource::File(path)),
            (None, None) => Err(CliError::failure("Error: expected a file path, '-' or -c \"TEXT\"")),
        }
    }

    /// Name used in pretty diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.to_string_lossy().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Inline(_) => "<command>".to_string(),
        }
    }
}

/// Options for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub config: SyntaxConfig,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            config: SyntaxConfig::default(),
            format: OutputFormat::Json,
            quiet: false,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = if cli.legacy {
        SyntaxConfig::legacy()
    } else {
        SyntaxConfig::default()
    };

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_input(&InputSource::resolve(Some(file), None)?, config);
    }

    match cli.command {
        Some(Command::Check {
            file,
            command,
            format,
            quiet,
        }) => {
            let input = InputSource::resolve(file, command)?;
            commands::check_input(&input, &CheckOptions { config, format, quiet })
        }
        Some(Command::Lex { file, command }) => commands::lex_input(&InputSource::resolve(file, command)?, config),
        None => {
            // Default: check the file if provided
            if let Some(file) = cli.file {
                let options = CheckOptions {
                    config,
                    ..CheckOptions::default()
                };
                commands::check_input(&InputSource::resolve(Some(file), None)?, &options)
            } else {
                Err(CliError::failure("Error: no input given; try 'jsonfsm --help'"))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
