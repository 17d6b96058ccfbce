pub mod grammar;
pub mod lexer;
pub mod recognizer;

pub use recognizer::{DEFAULT_MAX_DEPTH, Recognizer, Verdict};

/// Tokenizes `source` and decides whether it is a valid program.
pub fn check(source: &str, max_depth: usize) -> Verdict {
    let tokens = lexer::tokenize(source);
    Recognizer::new(&tokens).with_max_depth(max_depth).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_from_source() {
        let source = "int x, y = 1 + 2;\nif (x >= 1 && y != 0) {\n    x = x - 1;\n} else {\n    y = 0;\n}\n";
        let verdict = check(source, DEFAULT_MAX_DEPTH);
        assert!(verdict.accepted);
        assert_eq!(verdict.position, verdict.token_count);
    }

    #[test]
    fn test_check_rejects_missing_semicolon() {
        assert!(!check("int x", DEFAULT_MAX_DEPTH).accepted);
    }

    #[test]
    fn test_check_is_repeatable() {
        let source = "while (x < 10) { x = x + 1; }";
        assert_eq!(check(source, DEFAULT_MAX_DEPTH), check(source, DEFAULT_MAX_DEPTH));
    }
}
