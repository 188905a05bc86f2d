//! Edge-case configuration for the lexer and checker.
//!
//! The default configuration is strict. [`SyntaxConfig::legacy`] reproduces the lenient behavior
//! of the original command-line validator (lone `-` is a number, unterminated strings vanish,
//! empty input is accepted).

/// Lexer/checker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxConfig {
    /// Lex a `-` with no following digit as an `Error` token instead of a `Number`
    pub reject_lone_minus: bool,
    /// Emit an `Error` token for a string still open at end of input instead of dropping it
    pub flag_unterminated_string: bool,
    /// Reject an input with no tokens as "no document found"
    pub reject_empty_input: bool,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            reject_lone_minus: true,
            flag_unterminated_string: true,
            reject_empty_input: true,
        }
    }
}

impl SyntaxConfig {
    /// Create a new config with strict defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient settings matching the original validator.
    pub fn legacy() -> Self {
        Self {
            reject_lone_minus: false,
            flag_unterminated_string: false,
            reject_empty_input: false,
        }
    }

    pub fn with_reject_lone_minus(mut self, reject: bool) -> Self {
        self.reject_lone_minus = reject;
        self
    }

    pub fn with_flag_unterminated_string(mut self, flag: bool) -> Self {
        self.flag_unterminated_string = flag;
        self
    }

    pub fn with_reject_empty_input(mut self, reject: bool) -> Self {
        self.reject_empty_input = reject;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_strict() {
        let config = SyntaxConfig::default();
        assert!(config.reject_lone_minus);
        assert!(config.flag_unterminated_string);
        assert!(config.reject_empty_input);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(SyntaxConfig::new(), SyntaxConfig::default());
    }

    #[test]
    fn test_legacy_config_is_lenient() {
        let config = SyntaxConfig::legacy();
        assert!(!config.reject_lone_minus);
        assert!(!config.flag_unterminated_string);
        assert!(!config.reject_empty_input);
    }

    #[test]
    fn test_builder_chaining() {
        let config = SyntaxConfig::legacy()
            .with_reject_empty_input(true)
            .with_reject_lone_minus(true);
        assert!(config.reject_lone_minus);
        assert!(!config.flag_unterminated_string);
        assert!(config.reject_empty_input);
    }
}
