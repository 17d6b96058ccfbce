use log::{debug, trace, warn};

use super::grammar::{is_data_type, is_identifier, is_literal};

/// Nesting limit used when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Hard ceiling on the nesting limit; larger requests are clamped to it.
pub const MAX_DEPTH_CEILING: usize = 1024;

/// Outcome of one recognizer run.
///
/// `position` and `token_count` are diagnostics only: on rejection the cursor
/// sits wherever the failing rule gave up, which is not an error location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub position: usize,
    pub token_count: usize,
    pub depth_exceeded: bool,
}

/// What follows an operator in a boolean-expression chain.
enum Operand {
    Expression,
    BooleanExpression,
}

/// Single-pass, non-backtracking matcher over a token slice.
///
/// Every rule returns whether it matched. A rule that fails after consuming
/// tokens leaves the cursor where it stopped; nothing is ever rewound.
pub struct Recognizer<'a, T> {
    tokens: &'a [T],
    position: usize,
    depth: usize,
    max_depth: usize,
    depth_exceeded: bool,
}

impl<'a, T: AsRef<str>> Recognizer<'a, T> {
    pub fn new(tokens: &'a [T]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            depth_exceeded: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    pub fn run(mut self) -> Verdict {
        let accepted = self.program();
        debug!(
            "accepted={} position={} tokens={}",
            accepted,
            self.position,
            self.tokens.len()
        );

        Verdict {
            accepted,
            position: self.position,
            token_count: self.tokens.len(),
            depth_exceeded: self.depth_exceeded,
        }
    }

    fn program(&mut self) -> bool {
        while !self.is_at_end() {
            if !self.statement() {
                trace!("statement rejected at {}", self.position);
                return false;
            }
        }
        true
    }

    fn statement(&mut self) -> bool {
        self.nested(Self::dispatch_statement)
    }

    fn dispatch_statement(&mut self) -> bool {
        match self.peek() {
            Some(token) if is_data_type(token) => return self.declaration(),
            Some("if") => return self.if_statement(),
            Some("while") => return self.while_loop(),
            _ => {}
        }

        if self.assignment() {
            self.eat(";");
            return true;
        }

        // A failed assignment may already have moved the cursor.
        if self.check("{") {
            return self.block();
        }
        false
    }

    fn assignment(&mut self) -> bool {
        self.identifier() && self.eat("=") && self.expression() && self.eat(";")
    }

    fn block(&mut self) -> bool {
        if !self.eat("{") {
            return false;
        }
        self.statement_list();
        self.eat("}")
    }

    /// Matches statements until one fails. Never fails itself; the caller's
    /// closing `}` check catches a malformed body.
    fn statement_list(&mut self) {
        while !self.is_at_end() {
            if !self.statement() {
                break;
            }
            self.eat(";");
        }
    }

    fn while_loop(&mut self) -> bool {
        self.eat("while")
            && self.eat("(")
            && self.boolean_expression()
            && self.eat(")")
            && self.block()
    }

    fn if_statement(&mut self) -> bool {
        self.nested(Self::if_statement_body)
    }

    fn if_statement_body(&mut self) -> bool {
        let head = self.eat("if")
            && self.eat("(")
            && self.boolean_expression()
            && self.eat(")")
            && self.statement();
        if !head {
            return false;
        }

        if self.eat("else") {
            return if self.check("if") {
                self.if_statement()
            } else {
                self.statement()
            };
        }
        true
    }

    fn declaration(&mut self) -> bool {
        if !self.peek().is_some_and(is_data_type) {
            return false;
        }
        self.advance();

        if !self.identifier() {
            return false;
        }
        while self.eat(",") {
            if !self.identifier() {
                return false;
            }
        }

        // Once the first initializer appears, every further entry needs one.
        if self.eat("=") {
            if !self.expression() {
                return false;
            }
            while self.eat(",") {
                if !(self.identifier() && self.eat("=") && self.expression()) {
                    return false;
                }
            }
        }

        self.eat(";")
    }

    fn expression(&mut self) -> bool {
        if !self.term() {
            return false;
        }
        while self.eat_any(&["+", "-"]) {
            if !self.term() {
                return false;
            }
        }
        true
    }

    fn term(&mut self) -> bool {
        if !self.factor() {
            return false;
        }
        while self.eat_any(&["*", "/", "%"]) {
            if !self.factor() {
                return false;
            }
        }
        true
    }

    fn factor(&mut self) -> bool {
        match self.peek() {
            Some(token) if is_identifier(token) || is_literal(token) => {
                self.advance();
                true
            }
            Some("(") => {
                self.advance();
                self.nested(Self::expression) && self.eat(")")
            }
            _ => false,
        }
    }

    fn boolean_expression(&mut self) -> bool {
        self.nested(Self::boolean_chain)
    }

    /// Comparison and logical operators share one level and chain left to
    /// right. Fused tokens (`>=`, `==`, `||`, ...) match like their
    /// two-token spelling.
    fn boolean_chain(&mut self) -> bool {
        if !self.expression() {
            return false;
        }

        loop {
            let operand = match self.peek() {
                Some(">" | "<") => {
                    self.advance();
                    self.eat("=");
                    Operand::Expression
                }
                Some("=" | "!") => {
                    self.advance();
                    if !self.eat("=") {
                        return false;
                    }
                    Operand::Expression
                }
                Some(">=" | "<=" | "==" | "!=") => {
                    self.advance();
                    Operand::Expression
                }
                Some(first @ ("&" | "|")) => {
                    self.advance();
                    if !self.eat(first) {
                        return false;
                    }
                    Operand::BooleanExpression
                }
                Some("&&" | "||") => {
                    self.advance();
                    Operand::BooleanExpression
                }
                _ => return true,
            };

            let matched = match operand {
                Operand::Expression => self.expression(),
                Operand::BooleanExpression => self.boolean_expression(),
            };
            if !matched {
                return false;
            }
        }
    }

    /// Runs `rule` one nesting level deeper, rejecting once the limit is hit.
    fn nested(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.depth >= self.max_depth {
            if !self.depth_exceeded {
                warn!(
                    "nesting deeper than {} at token {}, rejecting",
                    self.max_depth, self.position
                );
            }
            self.depth_exceeded = true;
            return false;
        }

        self.depth += 1;
        let matched = rule(self);
        self.depth -= 1;
        matched
    }

    // Cursor helpers

    fn identifier(&mut self) -> bool {
        if self.peek().is_some_and(is_identifier) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).map(|token| token.as_ref())
    }

    fn check(&self, expected: &str) -> bool {
        self.peek() == Some(expected)
    }

    fn eat(&mut self, expected: &str) -> bool {
        self.eat_any(&[expected])
    }

    fn eat_any(&mut self, expected: &[&str]) -> bool {
        match self.peek() {
            Some(token) if expected.contains(&token) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }
}
