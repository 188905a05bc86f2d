//! Checker diagnostics.
//!
//! Every failure the checker can report is a [`CheckError`] variant. The checker is fail-fast,
//! so a single invocation produces at most one of these. Lexical anomalies are not errors at
//! scan time; they only become [`CheckError::LexicalAnomaly`] once the checker reaches the
//! offending `Error` token.
//!
//! [`DiagnosticRecord`] is the machine-readable `{"error": "..."}` form of a diagnostic.

use miette::{Diagnostic, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use crate::lexer::TokenKind;

/// A fatal checker diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CheckError {
    /// An `Error` token (unrecognized character or ill-formed lexeme) reached the checker.
    #[error("Expected {expected} but found ERROR ('{text}') at token {index}")]
    #[diagnostic(
        code(jsonfsm::lexical_anomaly),
        help("only structural characters, double-quoted strings and integers are recognized")
    )]
    LexicalAnomaly {
        index: usize,
        expected: &'static str,
        text: String,
        #[label("not part of the grammar")]
        span: SourceSpan,
    },

    /// A closing bracket with no open container, or one that does not match the innermost open
    /// container.
    #[error("{}", mismatch_message(.index, .found, .open))]
    #[diagnostic(code(jsonfsm::structural_mismatch))]
    StructuralMismatch {
        index: usize,
        found: char,
        /// Innermost open bracket, `None` when the stack was empty
        open: Option<char>,
        #[label("this closer")]
        span: SourceSpan,
    },

    /// A token of the wrong category for the current parse state.
    #[error("Expected {expected} but found {found_kind} ('{found_text}') at token {index}")]
    #[diagnostic(code(jsonfsm::unexpected_token))]
    UnexpectedToken {
        index: usize,
        expected: &'static str,
        found_kind: TokenKind,
        found_text: String,
        #[label("unexpected {found_kind}")]
        span: SourceSpan,
    },

    /// A `,` after the top-level container was closed.
    #[error("Unexpected ',' at token {index}")]
    #[diagnostic(code(jsonfsm::unexpected_separator), help("the document has already ended"))]
    UnexpectedSeparator {
        index: usize,
        #[label("separator outside any container")]
        span: SourceSpan,
    },

    /// Input ended with containers still open.
    #[error("Unclosed opening bracket: '{bracket}'")]
    #[diagnostic(code(jsonfsm::unterminated_container))]
    UnterminatedContainer {
        bracket: char,
        #[label("opened here and never closed")]
        span: SourceSpan,
    },

    /// The input contained no tokens at all.
    #[error("No document found")]
    #[diagnostic(code(jsonfsm::empty_document), help("a document must start with an object or an array"))]
    EmptyDocument,
}

fn mismatch_message(index: &usize, found: &char, open: &Option<char>) -> String {
    match open {
        Some(open) => {
            let expected = if *open == '{' { '}' } else { ']' };
            format!(
                "Expected '{expected}' (matching '{open}') but found STRUCTURAL ('{found}') at token {index}"
            )
        }
        None => format!("Unmatched closing bracket '{found}' at token {index}"),
    }
}

impl CheckError {
    /// Index of the offending token, if the error is tied to one.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            CheckError::LexicalAnomaly { index, .. }
            | CheckError::StructuralMismatch { index, .. }
            | CheckError::UnexpectedToken { index, .. }
            | CheckError::UnexpectedSeparator { index, .. } => Some(*index),
            CheckError::UnterminatedContainer { .. } | CheckError::EmptyDocument => None,
        }
    }

    /// Machine-readable form of this diagnostic.
    pub fn to_record(&self) -> DiagnosticRecord {
        DiagnosticRecord {
            error: self.to_string(),
        }
    }
}

/// `{"error": message}` record emitted in place of the trace on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord {
    pub error: String,
}
