//! Syntax frontend for jsonfsm: lexer, state-machine checker, diagnostics.
//!
//! The grammar is a reduced JSON: objects, arrays, double-quoted strings without escapes, and
//! integers. The pipeline is `source → lexer → tokens → checker → (trace, verdict)`.
//!
//! ## Notes
//! - The lexer is total: it never fails, it emits `Error` tokens instead.
//! - The checker is fail-fast and reports exactly one [`CheckError`] on failure.
//! - Nothing here writes to stdout/stderr; transitions go to a [`checker::TraceSink`].
//!
//! ## Examples
//! ```rust
//! use jsonfsm_syntax::{checker, lexer};
//!
//! let tokens = lexer::lex(r#"{"a":1,"b":2}"#);
//! assert_eq!(tokens.len(), 9);
//! assert!(checker::check(&tokens).is_ok());
//!
//! let tokens = lexer::lex(r#"{"x":5,}"#);
//! assert_eq!(checker::check(&tokens).unwrap_err().token_index(), Some(5));
//! ```

pub mod checker;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod token_helpers;

pub use checker::{StackAction, SynState, TraceSink, Transition};
pub use config::SyntaxConfig;
pub use diagnostics::{CheckError, DiagnosticRecord};
pub use lexer::{Span, Structural, Token, TokenKind};

/// Lex and check `source` in one call, collecting the trace.
pub fn validate(source: &str, config: SyntaxConfig) -> Result<Vec<Transition>, CheckError> {
    let tokens = lexer::lex_with_config(source, config);
    checker::check_with_config(&tokens, config)
}
