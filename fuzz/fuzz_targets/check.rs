#![no_main]

use jsonfsm_syntax::{SyntaxConfig, checker, lexer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        for config in [SyntaxConfig::default(), SyntaxConfig::legacy()] {
            let tokens = lexer::lex_with_config(s, config);
            if let Ok(trace) = checker::check_with_config(&tokens, config) {
                // An accepted document consumes every token.
                assert_eq!(trace.len(), tokens.len());
            }
        }
    }
});
