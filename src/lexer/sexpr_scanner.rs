use super::token::{Token, TokenKind};
use crate::error::{join_positions, Position, Result, Stage, SyntaxError};

/// Scanner for S-expression source text
///
/// Keeps a stack of open bracket positions so that an unmatched `)` fails
/// immediately and unmatched `(` are all reported at end of input. The tree
/// builder re-checks nesting on its own; this check only buys early,
/// precisely located diagnostics.
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Positions of `(` still waiting for their `)`
    open_brackets: Vec<Position>,
    /// Start index of current token
    start: usize,
    /// Start position of current token
    start_position: Position,
    /// Current index in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            open_brackets: Vec::new(),
            start: 0,
            start_position: Position::new(0, 1, 1),
            current: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_position = self.position();
            self.scan_token()?;
        }

        if !self.open_brackets.is_empty() {
            let open = std::mem::take(&mut self.open_brackets);
            return Err(SyntaxError::with_positions(
                Stage::Lexer,
                format!(
                    "unclosed brackets starting at positions {}",
                    join_positions(&open)
                ),
                open,
            ));
        }

        tracing::debug!(
            chars = self.source.len(),
            tokens = self.tokens.len(),
            "scanned source"
        );
        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            c if is_whitespace(c) => {}

            '(' => {
                self.open_brackets.push(self.start_position);
                self.add_token(TokenKind::LeftBracket, "(");
            }
            ')' => {
                if self.open_brackets.pop().is_none() {
                    return Err(SyntaxError::lexer(
                        format!("unexpected ) at position {}", self.start_position),
                        self.start_position,
                    ));
                }
                self.add_token(TokenKind::RightBracket, ")");
            }

            '"' => self.scan_string()?,

            c if c.is_ascii_digit() || c == '+' || c == '-' => self.scan_number(c)?,

            _ => self.scan_identifier(),
        }

        Ok(())
    }

    /// No escapes: the next `"` always closes the literal.
    fn scan_string(&mut self) -> Result<()> {
        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        if self.is_at_end() {
            return Err(SyntaxError::lexer(
                format!(
                    "expected \" to end string starting at position {}",
                    self.start_position
                ),
                self.start_position,
            ));
        }

        let value: String = self.source[self.start + 1..self.current].iter().collect();
        self.advance(); // Closing "

        self.add_token(TokenKind::String, value);
        Ok(())
    }

    fn scan_number(&mut self, first: char) -> Result<()> {
        let mut seen_digit = first.is_ascii_digit();
        let mut seen_point = false;

        loop {
            match self.peek() {
                c if c.is_ascii_digit() => {
                    seen_digit = true;
                    self.advance();
                }
                '.' => {
                    let position = self.position();
                    if seen_point || !seen_digit {
                        return Err(SyntaxError::lexer(
                            format!("invalid decimal point in number at position {}", position),
                            position,
                        ));
                    }
                    seen_point = true;
                    self.advance();
                }
                _ => break,
            }
        }

        let text: String = self.source[self.start..self.current].iter().collect();

        // A sign with no digits is the operator, not a number
        if text == "+" || text == "-" {
            self.add_token(TokenKind::Identifier, text);
        } else {
            self.add_token(TokenKind::Number, text);
        }

        Ok(())
    }

    fn scan_identifier(&mut self) {
        while !self.is_at_end() && !is_delimiter(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        self.add_token(TokenKind::Identifier, text);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn position(&self) -> Position {
        Position::new(self.current, self.line, self.column)
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind, text: impl Into<String>) {
        self.tokens
            .push(Token::new(kind, text, self.start_position));
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_delimiter(c: char) -> bool {
    is_whitespace(c) || c == '(' || c == ')'
}
