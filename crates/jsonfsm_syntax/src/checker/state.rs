//! Checker automaton state and the transition records it emits.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::lexer::Structural;

/// What the checker expects next within the innermost open container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SynState {
    /// Expect the document-opening `{` or `[`.
    Start,
    /// Inside an object: expect a string key (or `}` right after `{`).
    ExpectKey,
    /// Just consumed a key: expect `:`.
    ExpectColon,
    /// Expect a string, number or nested container (or `]` right after `[`).
    ExpectValue,
    /// Just consumed a complete value: expect `,` or the matching closer.
    AfterValue,
}

impl SynState {
    pub fn as_str(self) -> &'static str {
        match self {
            SynState::Start => "Start",
            SynState::ExpectKey => "ExpectKey",
            SynState::ExpectColon => "ExpectColon",
            SynState::ExpectValue => "ExpectValue",
            SynState::AfterValue => "AfterValue",
        }
    }
}

impl fmt::Display for SynState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effect of a transition on the bracket stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAction {
    Push(Structural),
    Pop(Structural),
    None,
}

impl fmt::Display for StackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackAction::Push(s) => write!(f, "push '{s}'"),
            StackAction::Pop(s) => write!(f, "pop '{s}'"),
            StackAction::None => f.write_str("none"),
        }
    }
}

impl Serialize for StackAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One step of the checker: `{state, read, action, next_state}`.
///
/// `read` is the structural character for structural tokens and the kind name (`STRING`,
/// `NUMBER`) for scalar tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub state: SynState,
    pub read: String,
    pub action: StackAction,
    pub next_state: SynState,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --{}/{}--> {}",
            self.state, self.read, self.action, self.next_state
        )
    }
}

/// Receiver for transition records as the checker produces them.
///
/// Any `FnMut(&Transition)` closure is a sink.
pub trait TraceSink {
    fn record(&mut self, transition: &Transition);
}

impl<F> TraceSink for F
where
    F: FnMut(&Transition),
{
    fn record(&mut self, transition: &Transition) {
        self(transition)
    }
}
