#![forbid(unsafe_code)]
//! jsonfsm: a trace-emitting validator for a reduced JSON grammar
//!
//! The grammar covers objects, arrays, double-quoted strings without escapes, and integers.
//! Validation is a two-stage state machine (lexer, then bracket-stack checker) whose every step
//! is recorded as a transition for diagnostic and teaching use.
//!
//! This crate provides the command-line tool and output rendering. The lexer, checker and
//! diagnostics live in `jsonfsm_syntax` and are re-exported here.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod output;

pub use jsonfsm_syntax::{checker, config, diagnostics, lexer, validate};

pub use jsonfsm_syntax::{CheckError, SyntaxConfig, Token, TokenKind, Transition};
