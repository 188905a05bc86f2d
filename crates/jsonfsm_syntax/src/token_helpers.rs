//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with structural tokens through the typed [`Structural`] view.

use crate::lexer::{Structural, Token, TokenKind};

impl TokenKind {
    /// Return `true` for scalar value tokens (strings and numbers).
    pub fn is_scalar(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }
}

impl Token {
    /// Return the structural character, if this is a structural token.
    pub fn structural(&self) -> Option<Structural> {
        if self.kind != TokenKind::Structural {
            return None;
        }
        let mut chars = self.text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Structural::from_char(c),
            _ => None,
        }
    }

    /// Return `true` if this is the given structural character.
    pub fn is_structural(&self, s: Structural) -> bool {
        self.structural() == Some(s)
    }

    /// Convenience wrapper for `self.kind.is_scalar()`.
    pub fn is_scalar(&self) -> bool {
        self.kind.is_scalar()
    }
}
