//! Lexer for the reduced JSON grammar
//!
//! Handles tokenization of:
//! - Structural characters (`{ } [ ] : ,`)
//! - Strings (double-quoted, no escape processing)
//! - Integers (digit runs with an optional leading `-`)
//!
//! Lexing is total: characters outside the grammar become `Error` tokens and scanning continues.
//! Whether an `Error` token is fatal is decided by the checker.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Structural, Span)

pub mod tokens;

pub use tokens::{STRUCTURAL, Span, Structural, Token, TokenKind};

use crate::config::SyntaxConfig;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Lexer state diagram:
//
//                 '"'                          '"'
//   [Start] ─────────────→ [InString] ─────────────→ [Start]  (emit STRING)
//      │
//      │ digit | '-'
//      ↓
//   [InNumber] ── digit ──→ [InNumber]
//      │
//      └── other ──→ [Start]  (emit NUMBER, re-examine the same character)
// ============================================================================

/// Scanner state carried between characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    InString,
    InNumber,
}

/// Separators are the C locale whitespace set: ASCII whitespace plus vertical tab.
/// Non-ASCII spacing such as U+00A0 lexes as `Error`.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Lexer for reduced-JSON source text.
///
/// Converts source text into a flat token list in a single left-to-right pass. The only
/// lookahead is the number terminator, which is peeked and left unconsumed.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    config: SyntaxConfig,
    state: LexState,
    buffer: String,
    /// Byte offset where the pending string/number started
    token_start: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with the default (strict) configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, SyntaxConfig::default())
    }

    /// Create a new lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: SyntaxConfig) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            config,
            state: LexState::Start,
            buffer: String::new(),
            token_start: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Never fails. Unrecognized characters are returned as `Error` tokens.
    pub fn tokenize(mut self) -> Vec<Token> {
        while let Some(&(pos, c)) = self.chars.peek() {
            match self.state {
                LexState::Start => self.scan_start(pos, c),
                LexState::InString => self.scan_string(pos, c),
                LexState::InNumber => self.scan_number(pos, c),
            }
        }
        self.finish();
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn advance(&mut self) {
        self.chars.next();
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, span: Span) {
        self.tokens.push(Token::new(kind, text, span));
    }

    // ========================================================================
    // Per-state scanning
    // ========================================================================

    fn scan_start(&mut self, pos: usize, c: char) {
        self.advance();
        let end = pos + c.len_utf8();

        if let Some(s) = Structural::from_char(c) {
            self.push(TokenKind::Structural, s.as_char(), Span::new(pos, end));
        } else if c == '"' {
            self.state = LexState::InString;
            self.buffer.clear();
            self.token_start = pos;
        } else if c.is_ascii_digit() || c == '-' {
            self.state = LexState::InNumber;
            self.buffer.clear();
            self.buffer.push(c);
            self.token_start = pos;
        } else if !is_separator(c) {
            self.push(TokenKind::Error, c, Span::new(pos, end));
        }
    }

    fn scan_string(&mut self, pos: usize, c: char) {
        self.advance();
        if c == '"' {
            let text = std::mem::take(&mut self.buffer);
            self.push(TokenKind::String, text, Span::new(self.token_start, pos + 1));
            self.state = LexState::Start;
        } else {
            self.buffer.push(c);
        }
    }

    fn scan_number(&mut self, pos: usize, c: char) {
        if c.is_ascii_digit() {
            self.advance();
            self.buffer.push(c);
        } else {
            // The terminator is not consumed; `Start` sees it on the next iteration.
            self.emit_number(pos);
            self.state = LexState::Start;
        }
    }

    fn emit_number(&mut self, end: usize) {
        let text = std::mem::take(&mut self.buffer);
        let span = Span::new(self.token_start, end);
        if text == "-" && self.config.reject_lone_minus {
            tracing::debug!(offset = self.token_start, "lone '-' without digits");
            self.push(TokenKind::Error, text, span);
        } else {
            self.push(TokenKind::Number, text, span);
        }
    }

    /// Flush whatever lexeme is still pending at end of input.
    fn finish(&mut self) {
        let end = self.source.len();
        match self.state {
            LexState::InNumber if !self.buffer.is_empty() => self.emit_number(end),
            LexState::InString => {
                if self.config.flag_unterminated_string {
                    let text = format!("\"{}", self.buffer);
                    self.push(TokenKind::Error, text, Span::new(self.token_start, end));
                } else {
                    tracing::debug!(offset = self.token_start, "dropping unterminated string");
                }
                self.buffer.clear();
            }
            _ => {}
        }
        self.state = LexState::Start;
    }
}

/// Convenience function to lex a source string with the default configuration.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Lex a source string with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_with_config(source: &str, config: SyntaxConfig) -> Vec<Token> {
    Lexer::with_config(source, config).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_text(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    #[test]
    fn test_structural_registry_parity() {
        for s in STRUCTURAL {
            let source = s.as_char().to_string();
            let tokens = lex(&source);
            assert_eq!(tokens.len(), 1, "lex({:?}) should produce one token", source);
            assert_eq!(tokens[0].kind, TokenKind::Structural);
            assert_eq!(tokens[0].structural(), Some(*s));
            assert_eq!(tokens[0].span, Span::new(0, 1));
        }
    }

    #[test]
    fn test_simple_object() {
        let tokens = lex(r#"{"a":1,"b":2}"#);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Structural, "{"),
                (TokenKind::String, "a"),
                (TokenKind::Structural, ":"),
                (TokenKind::Number, "1"),
                (TokenKind::Structural, ","),
                (TokenKind::String, "b"),
                (TokenKind::Structural, ":"),
                (TokenKind::Number, "2"),
                (TokenKind::Structural, "}"),
            ]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let tokens = lex(" [ 1 ,\n\t-22 ]\r\n");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Structural, "["),
                (TokenKind::Number, "1"),
                (TokenKind::Structural, ","),
                (TokenKind::Number, "-22"),
                (TokenKind::Structural, "]"),
            ]
        );
    }

    #[test]
    fn test_vertical_tab_is_a_separator() {
        let tokens = lex("[\x0B1\x0C]");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Structural, "["),
                (TokenKind::Number, "1"),
                (TokenKind::Structural, "]"),
            ]
        );
    }

    #[test]
    fn test_non_ascii_space_is_an_error() {
        let source = "{\"a\":1}\u{00A0}";
        let tokens = lex(source);
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[5].kind, TokenKind::Error);
        assert_eq!(tokens[5].text, "\u{00A0}");
        assert_eq!(tokens[5].span, Span::new(7, 9));

        let err = crate::checker::check(&tokens).unwrap_err();
        assert!(
            matches!(err, crate::CheckError::LexicalAnomaly { index: 5, .. }),
            "got {err:?}"
        );

        let ideographic = lex("[1]\u{3000}");
        assert_eq!(ideographic.last().map(|t| t.kind), Some(TokenKind::Error));
    }

    #[test]
    fn test_number_terminator_is_reexamined() {
        // `]` ends the number and must still be emitted as its own token.
        let tokens = lex("[10]");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Structural, "["),
                (TokenKind::Number, "10"),
                (TokenKind::Structural, "]"),
            ]
        );
        assert_eq!(tokens[1].span, Span::new(1, 3));
    }

    #[test]
    fn test_number_at_end_of_input_is_flushed() {
        let tokens = lex("123");
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::Number, "123")]);
        assert_eq!(tokens[0].span, Span::new(0, 3));
    }

    #[test]
    fn test_dotted_number_splits_into_error_tokens() {
        let tokens = lex(r#"{"hi":3.1.2}"#);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Structural, "{"),
                (TokenKind::String, "hi"),
                (TokenKind::Structural, ":"),
                (TokenKind::Number, "3"),
                (TokenKind::Error, "."),
                (TokenKind::Number, "1"),
                (TokenKind::Error, "."),
                (TokenKind::Number, "2"),
                (TokenKind::Structural, "}"),
            ]
        );
    }

    #[test]
    fn test_string_keeps_content_verbatim() {
        let tokens = lex(r#""a{b}:c,\n""#);
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::String, r"a{b}:c,\n")]);
        assert_eq!(tokens[0].span, Span::new(0, 11));
    }

    #[test]
    fn test_backslash_does_not_escape_quote() {
        let tokens = lex(r#""a\"b""#);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(TokenKind::String, r"a\"), (TokenKind::Error, "b"), (TokenKind::Error, "\"")]
        );
    }

    #[test]
    fn test_empty_string() {
        let tokens = lex(r#""""#);
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::String, "")]);
    }

    #[test]
    fn test_unrecognized_characters_continue_scanning() {
        let tokens = lex("[true]");
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0].kind, TokenKind::Structural);
        assert!(tokens[1..5].iter().all(|t| t.kind == TokenKind::Error));
        assert_eq!(tokens[5].text, "]");
    }

    #[test]
    fn test_multibyte_error_span() {
        let tokens = lex("é1");
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::Error, "é"), (TokenKind::Number, "1")]);
        assert_eq!(tokens[0].span, Span::new(0, 2));
        assert_eq!(tokens[1].span, Span::new(2, 3));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(lex("").is_empty());
        assert!(lex(" \n\t ").is_empty());
    }

    // ========================================================================
    // Configurable edge cases
    // ========================================================================

    #[test]
    fn test_lone_minus_is_error_by_default() {
        let tokens = lex("[-]");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (TokenKind::Structural, "["),
                (TokenKind::Error, "-"),
                (TokenKind::Structural, "]"),
            ]
        );
    }

    #[test]
    fn test_lone_minus_is_number_in_legacy_mode() {
        let tokens = lex_with_config("[-]", SyntaxConfig::legacy());
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[1].text, "-");
    }

    #[test]
    fn test_minus_after_digits_starts_new_number() {
        let tokens = lex("1-2");
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::Number, "1"), (TokenKind::Number, "-2")]);
    }

    #[test]
    fn test_unterminated_string_is_flagged_by_default() {
        let tokens = lex(r#"{"abc"#);
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(TokenKind::Structural, "{"), (TokenKind::Error, "\"abc")]
        );
        assert_eq!(tokens[1].span, Span::new(1, 5));
    }

    #[test]
    fn test_unterminated_string_is_dropped_in_legacy_mode() {
        let tokens = lex_with_config(r#"{"abc"#, SyntaxConfig::legacy());
        assert_eq!(kinds_and_text(&tokens), vec![(TokenKind::Structural, "{")]);
    }

    #[test]
    fn test_token_display_matches_dump_format() {
        let tokens = lex(r#"{"k":-7}"#);
        let dump: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(
            dump,
            vec!["STRUCTURAL : {", "STRING : k", "STRUCTURAL : :", "NUMBER : -7", "STRUCTURAL : }"]
        );
    }
}
