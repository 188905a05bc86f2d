//! Rendering of token dumps, transition traces and diagnostics.
//!
//! The core crate never prints; everything user-visible is produced here so it can be written to
//! any `io::Write` (stdout in the CLI, a buffer in tests).
//!
//! Formats:
//! - token dump: a `Tokens:` header then one `KIND : text` line per token
//! - trace: one JSON object per transition (`{"state","read","action","next_state"}`)
//! - diagnostic: one JSON object `{"error": "..."}`, or a miette report in pretty mode

use std::io::{self, Write};

use miette::NamedSource;
use serde::Serialize;

use crate::checker::Transition;
use crate::diagnostics::CheckError;
use crate::lexer::Token;

/// Write `value` as a single JSON line.
pub fn write_json_line<W, T>(out: &mut W, value: &T) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// Write the token dump followed by a blank separator line.
pub fn write_tokens<W: Write + ?Sized>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    writeln!(out, "Tokens:")?;
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    writeln!(out)
}

pub fn write_transition<W: Write + ?Sized>(out: &mut W, transition: &Transition) -> io::Result<()> {
    write_json_line(out, transition)
}

/// Write the `{"error": ...}` record for a failed check.
pub fn write_diagnostic<W: Write + ?Sized>(out: &mut W, err: &CheckError) -> io::Result<()> {
    write_json_line(out, &err.to_record())
}

/// Render a diagnostic with source context using miette's report handler.
pub fn format_pretty(name: &str, source: &str, err: &CheckError) -> String {
    let report = miette::Report::new(err.clone()).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checker, lexer};

    fn to_string(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_token_dump() {
        let tokens = lexer::lex(r#"{"a":1}"#);
        let mut buf = Vec::new();
        write_tokens(&mut buf, &tokens).unwrap();
        insta::assert_snapshot!(to_string(buf), @r"
        Tokens:
        STRUCTURAL : {
        STRING : a
        STRUCTURAL : :
        NUMBER : 1
        STRUCTURAL : }
        ");
    }

    #[test]
    fn test_transition_lines() {
        let trace = checker::check(&lexer::lex("[]")).unwrap();
        let mut buf = Vec::new();
        for t in &trace {
            write_transition(&mut buf, t).unwrap();
        }
        insta::assert_snapshot!(to_string(buf), @r#"
        {"state":"Start","read":"[","action":"push '['","next_state":"ExpectValue"}
        {"state":"ExpectValue","read":"]","action":"pop '['","next_state":"AfterValue"}
        "#);
    }

    #[test]
    fn test_diagnostic_line() {
        let err = checker::check(&lexer::lex("[1,2,]")).unwrap_err();
        let mut buf = Vec::new();
        write_diagnostic(&mut buf, &err).unwrap();
        assert_eq!(
            to_string(buf),
            "{\"error\":\"Expected STRING, NUMBER, '{', or '[' but found STRUCTURAL (']') at token 5\"}\n"
        );
    }

    #[test]
    fn test_pretty_report_mentions_message() {
        let source = r#"{"a":[1}"#;
        let err = checker::check(&lexer::lex(source)).unwrap_err();
        let rendered = format_pretty("input.json", source, &err);
        assert!(rendered.contains("Expected ']' (matching '[')"), "got: {rendered}");
        assert!(rendered.contains("jsonfsm::structural_mismatch"), "got: {rendered}");
    }
}
