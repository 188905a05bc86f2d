//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read, Write};

use crate::checker::{self, Transition};
use crate::config::SyntaxConfig;
use crate::{lexer, output};

use super::{CheckOptions, CliError, CliResult, ExitCode, InputSource, OutputFormat};

/// Maximum document size (100 MB)
///
/// Inputs larger than this are rejected before lexing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a document from a file, stdin or inline text.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(input: &InputSource) -> CliResult<String> {
    match input {
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::Stdin => {
            let mut source = String::new();
            io::stdin()
                .take(MAX_SOURCE_SIZE + 1)
                .read_to_string(&mut source)
                .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
            if source.len() as u64 > MAX_SOURCE_SIZE {
                return Err(CliError::failure(format!(
                    "Input on stdin is too large (max {} bytes)",
                    MAX_SOURCE_SIZE
                )));
            }
            Ok(source)
        }
        InputSource::File(path) => {
            let display = path.to_string_lossy();
            let metadata = fs::metadata(path)
                .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", display, e)))?;

            if metadata.len() > MAX_SOURCE_SIZE {
                return Err(CliError::failure(format!(
                    "Source file '{}' is too large ({} bytes, max {} bytes)",
                    display,
                    metadata.len(),
                    MAX_SOURCE_SIZE
                )));
            }

            fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", display, e)))
        }
    }
}

fn write_failed(e: io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {}", e))
}

/// Lex and display tokens.
pub fn lex_input(input: &InputSource, config: SyntaxConfig) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    tracing::debug!(input = %input.display_name(), bytes = source.len(), "lexing document");
    let tokens = lexer::lex_with_config(&source, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_tokens(&mut out, &tokens).map_err(write_failed)?;
    Ok(ExitCode::SUCCESS)
}

/// Lex, check and report a document read from `input` on stdout.
pub fn check_input(input: &InputSource, options: &CheckOptions) -> CliResult<ExitCode> {
    let source = read_source(input)?;
    tracing::debug!(input = %input.display_name(), bytes = source.len(), "checking document");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    check_source(&input.display_name(), &source, options, &mut out)
}

/// Lex, check and report `source`, writing the dump/trace/diagnostic to `out`.
///
/// The trace is written as the checker produces it, so on failure `out` already holds every
/// transition up to the offending token.
///
/// ## Errors
/// - Pretty format: a rejected document is returned as `CliError` with exit code 1.
/// - Any write failure is returned with exit code 2.
pub fn check_source<W: Write + ?Sized>(
    name: &str,
    source: &str,
    options: &CheckOptions,
    out: &mut W,
) -> CliResult<ExitCode> {
    let tokens = lexer::lex_with_config(source, options.config);

    if !options.quiet {
        output::write_tokens(out, &tokens).map_err(write_failed)?;
    }

    // The sink cannot fail, so the first write error is parked and surfaced afterwards.
    let mut write_error: Option<io::Error> = None;
    let result = checker::check_with_sink(&tokens, options.config, &mut |t: &Transition| {
        if options.quiet || write_error.is_some() {
            return;
        }
        if let Err(e) = output::write_transition(&mut *out, t) {
            write_error = Some(e);
        }
    });
    if let Some(e) = write_error {
        return Err(write_failed(e));
    }

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match options.format {
            OutputFormat::Json => {
                output::write_diagnostic(out, &err).map_err(write_failed)?;
                Ok(ExitCode::REJECTED)
            }
            OutputFormat::Pretty => Err(CliError::rejected(output::format_pretty(name, source, &err))),
        },
    }
}
