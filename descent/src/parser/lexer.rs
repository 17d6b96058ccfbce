use once_cell::sync::Lazy;
use regex::Regex;

// Alternation is leftmost-first, so the two-character operators must come
// before the single-character class.
static LEXEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z_][a-zA-Z0-9_]*|[0-9]+(?:\.[0-9]+)?|<=|>=|==|!=|\|\||[=(),{};<>!+\-*/%|&]")
        .unwrap()
});

/// Splits `source` into token strings, line by line.
///
/// Characters outside the lexeme alphabet are dropped, so this never fails.
pub fn tokenize(source: &str) -> Vec<String> {
    source
        .lines()
        .flat_map(|line| LEXEME.find_iter(line))
        .map(|lexeme| lexeme.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_declaration() {
        assert_eq!(
            tokenize("int x, y = 1 + 2;"),
            vec!["int", "x", ",", "y", "=", "1", "+", "2", ";"]
        );
    }

    #[test]
    fn test_multiline_keeps_order() {
        let source = "while (x == 1) {\n    x = x - 1;\n}\n";
        assert_eq!(
            tokenize(source),
            vec![
                "while", "(", "x", "==", "1", ")", "{", "x", "=", "x", "-", "1", ";", "}"
            ]
        );
    }

    #[rstest]
    #[case("a<=b", &["a", "<=", "b"])]
    #[case("a>=b", &["a", ">=", "b"])]
    #[case("a==b", &["a", "==", "b"])]
    #[case("a!=b", &["a", "!=", "b"])]
    #[case("a||b", &["a", "||", "b"])]
    #[case("a&&b", &["a", "&", "&", "b"])]
    #[case("a < = b", &["a", "<", "=", "b"])]
    #[case("!a", &["!", "a"])]
    fn test_operators(#[case] source: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(source), expected);
    }

    #[rstest]
    #[case("3.14", &["3.14"])]
    #[case("3.", &["3"])]
    #[case("1.x", &["1", "x"])]
    #[case("x1_y", &["x1_y"])]
    #[case("9lives", &["9", "lives"])]
    #[case("1\u{0663}", &["1"])]
    #[case("\u{0661}.5", &["5"])]
    fn test_literals_and_identifiers(#[case] source: &str, #[case] expected: &[&str]) {
        assert_eq!(tokenize(source), expected);
    }

    #[test]
    fn test_non_ascii_digit_does_not_join_literal() {
        assert_eq!(tokenize("x = 1\u{0663} ;"), vec!["x", "=", "1", ";"]);
        assert!(crate::parser::check("x = 1\u{0663} ;", crate::parser::DEFAULT_MAX_DEPTH).accepted);
    }

    #[test]
    fn test_unknown_characters_are_dropped() {
        assert_eq!(tokenize("x = 1 # comment \"str\";"), vec!["x", "=", "1", "comment", "str", ";"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t\n").is_empty());
    }
}
