//! Syntax checker for the reduced JSON grammar
//!
//! Walks a lexed token slice with two pieces of state:
//! - a [`SynState`] automaton that orders keys, colons, values and separators, and
//! - a bracket stack that tracks open containers and decides what `,` and closers mean.
//!
//! Every consumed token produces one [`Transition`], delivered to a [`TraceSink`]. The checker is
//! fail-fast: the first violation is returned as a [`CheckError`] and nothing after it is read.
//!
//! ## Examples
//!
//! ```rust
//! use jsonfsm_syntax::{checker, lexer};
//!
//! let tokens = lexer::lex(r#"{"a":[1,2]}"#);
//! let trace = checker::check(&tokens).unwrap();
//! assert_eq!(trace.len(), tokens.len());
//! ```

mod state;

pub use state::{StackAction, SynState, TraceSink, Transition};

use crate::config::SyntaxConfig;
use crate::diagnostics::CheckError;
use crate::lexer::{Span, Structural, Token, TokenKind};

// ============================================================================
// CHECKER STATE
// ----------------------------------------------------------------------------
//              '{' push                 STRING                 ':'
//   [Start] ───────────→ [ExpectKey] ─────────→ [ExpectColon] ─────→ [ExpectValue]
//      │                    │  ↑                                        │   │
//      │ '[' push           │  └──────── ',' (top '{') ──────┐          │   │ '{' / '[' push
//      ↓                    │ '}' pop (empty object)         │          │   ↓
//  [ExpectValue]            ↓                                │     STRING | NUMBER
//                      [AfterValue] ←────────────────────────┴──────────┘
//                           │  ',' (top '[') → [ExpectValue]
//                           └─ '}' / ']' pop → [AfterValue]
// ============================================================================

/// An open container on the bracket stack.
#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    bracket: Structural,
    span: Span,
}

/// Checker state for one token slice.
///
/// ## Notes
/// - State and stack are local to one run; a `Checker` is not reusable.
/// - Tokens are addressed by index so diagnostics and the empty-container rule can look back.
pub struct Checker<'a> {
    tokens: &'a [Token],
    config: SyntaxConfig,
    state: SynState,
    stack: Vec<OpenBracket>,
}

impl<'a> Checker<'a> {
    /// Create a new checker with the default (strict) configuration.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, SyntaxConfig::default())
    }

    /// Create a new checker with an explicit configuration.
    pub fn with_config(tokens: &'a [Token], config: SyntaxConfig) -> Self {
        Self {
            tokens,
            config,
            state: SynState::Start,
            stack: Vec::new(),
        }
    }

    /// Run the automaton over every token, sending each transition to `sink`.
    ///
    /// ## Errors
    /// Returns the first [`CheckError`] encountered. Transitions already delivered to the sink
    /// before the failure stay delivered.
    pub fn run<S>(mut self, sink: &mut S) -> Result<(), CheckError>
    where
        S: TraceSink + ?Sized,
    {
        if self.tokens.is_empty() && self.config.reject_empty_input {
            return Err(CheckError::EmptyDocument);
        }

        let tokens = self.tokens;
        for (index, token) in tokens.iter().enumerate() {
            let transition = self.step(index, token)?;
            tracing::trace!(
                index,
                state = %transition.state,
                read = %transition.read,
                action = %transition.action,
                next_state = %transition.next_state,
                "transition"
            );
            self.state = transition.next_state;
            sink.record(&transition);
        }

        if let Some(open) = self.stack.last() {
            return Err(CheckError::UnterminatedContainer {
                bracket: open.bracket.as_char(),
                span: open.span.into(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Transition function
    // ========================================================================

    fn step(&mut self, index: usize, token: &Token) -> Result<Transition, CheckError> {
        if token.kind == TokenKind::Error {
            return Err(CheckError::LexicalAnomaly {
                index,
                expected: self.expected(index),
                text: token.text.clone(),
                span: token.span.into(),
            });
        }

        let from = self.state;
        let structural = token.structural();

        let (action, next_state) = match (from, structural) {
            (SynState::Start | SynState::ExpectValue, Some(open)) if open.is_open() => {
                (self.push(open, token.span), opened_state(open))
            }
            (SynState::ExpectKey, None) if token.kind == TokenKind::String => {
                (StackAction::None, SynState::ExpectColon)
            }
            (SynState::ExpectKey, Some(Structural::RBrace))
                if self.follows_opener(index, Structural::LBrace) =>
            {
                (self.pop(index, Structural::RBrace, token)?, SynState::AfterValue)
            }
            (SynState::ExpectColon, Some(Structural::Colon)) => (StackAction::None, SynState::ExpectValue),
            (SynState::ExpectValue, None) if token.is_scalar() => (StackAction::None, SynState::AfterValue),
            (SynState::ExpectValue, Some(Structural::RBracket))
                if self.follows_opener(index, Structural::LBracket) =>
            {
                (self.pop(index, Structural::RBracket, token)?, SynState::AfterValue)
            }
            (SynState::AfterValue, Some(Structural::Comma)) => match self.top() {
                Some(Structural::LBrace) => (StackAction::None, SynState::ExpectKey),
                Some(_) => (StackAction::None, SynState::ExpectValue),
                None => {
                    return Err(CheckError::UnexpectedSeparator {
                        index,
                        span: token.span.into(),
                    });
                }
            },
            (SynState::AfterValue, Some(close)) if close.is_close() => {
                (self.pop(index, close, token)?, SynState::AfterValue)
            }
            _ => {
                return Err(CheckError::UnexpectedToken {
                    index,
                    expected: self.expected(index),
                    found_kind: token.kind,
                    found_text: token.text.clone(),
                    span: token.span.into(),
                });
            }
        };

        let read = match structural {
            Some(s) => s.as_char().to_string(),
            None => token.kind.as_str().to_string(),
        };

        Ok(Transition {
            state: from,
            read,
            action,
            next_state,
        })
    }

    // ========================================================================
    // Bracket stack
    // ========================================================================

    fn top(&self) -> Option<Structural> {
        self.stack.last().map(|open| open.bracket)
    }

    fn push(&mut self, bracket: Structural, span: Span) -> StackAction {
        self.stack.push(OpenBracket { bracket, span });
        StackAction::Push(bracket)
    }

    /// Pop the innermost container if `close` matches it.
    fn pop(&mut self, index: usize, close: Structural, token: &Token) -> Result<StackAction, CheckError> {
        match self.top() {
            Some(open) if open.closer() == Some(close) => {
                self.stack.pop();
                Ok(StackAction::Pop(open))
            }
            open => Err(CheckError::StructuralMismatch {
                index,
                found: close.as_char(),
                open: open.map(Structural::as_char),
                span: token.span.into(),
            }),
        }
    }

    /// `true` when the token before `index` is `opener`, i.e. the container is still empty.
    fn follows_opener(&self, index: usize, opener: Structural) -> bool {
        index
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .is_some_and(|prev| prev.is_structural(opener))
    }

    /// Human-readable set of acceptable token categories for the current state.
    fn expected(&self, index: usize) -> &'static str {
        match self.state {
            SynState::Start => "'{' or '['",
            SynState::ExpectKey if self.follows_opener(index, Structural::LBrace) => "STRING or '}'",
            SynState::ExpectKey => "STRING",
            SynState::ExpectColon => "':'",
            SynState::ExpectValue if self.follows_opener(index, Structural::LBracket) => {
                "STRING, NUMBER, '{', '[', or ']'"
            }
            SynState::ExpectValue => "STRING, NUMBER, '{', or '['",
            SynState::AfterValue => match self.top() {
                Some(Structural::LBrace) => "',' or '}'",
                Some(_) => "',' or ']'",
                None => "end of input",
            },
        }
    }
}

/// State entered right after pushing `open`.
fn opened_state(open: Structural) -> SynState {
    if open == Structural::LBrace {
        SynState::ExpectKey
    } else {
        SynState::ExpectValue
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Check a token slice with the default configuration and collect the trace.
///
/// This is the main public entrypoint for checking.
///
/// ## Errors
/// Returns the first [`CheckError`] encountered.
pub fn check(tokens: &[Token]) -> Result<Vec<Transition>, CheckError> {
    check_with_config(tokens, SyntaxConfig::default())
}

/// Check a token slice with an explicit configuration and collect the trace.
pub fn check_with_config(tokens: &[Token], config: SyntaxConfig) -> Result<Vec<Transition>, CheckError> {
    let mut trace = Vec::with_capacity(tokens.len());
    check_with_sink(tokens, config, &mut |t: &Transition| trace.push(t.clone()))?;
    Ok(trace)
}

/// Check a token slice, streaming each transition to `sink` as it is produced.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn check_with_sink<S>(tokens: &[Token], config: SyntaxConfig, sink: &mut S) -> Result<(), CheckError>
where
    S: TraceSink + ?Sized,
{
    let result = Checker::with_config(tokens, config).run(sink);
    match &result {
        Ok(()) => tracing::debug!("document accepted"),
        Err(err) => tracing::debug!(error = %err, "document rejected"),
    }
    result
}
