// lisplet-parser - Parser for lisplet
// Copyright (c) 2025 The lisplet authors. MIT licensed.

//! Recursive descent parser for lisplet source code.
//!
//! Converts tokens into [`Value`] trees. The quote shorthand `'X`
//! expands to the list `(quote X)`.

use std::fmt;

use crate::lexer::{Lexer, LexerError, Token};
use crate::symbol::Symbol;
use crate::value::Value;

/// Parser error with position information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at {}:{}: {}",
            self.line, self.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// The parser converts tokens into [`Value`] trees.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        // Capture position before the first token
        let line = lexer.line();
        let column = lexer.column();
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            line,
            column,
        })
    }

    /// Parse a single top-level form from the source.
    /// Returns `None` at end of input.
    pub fn parse(&mut self) -> Result<Option<Value>, ParseError> {
        if matches!(self.current, Token::Eof) {
            return Ok(None);
        }
        let val = self.parse_form()?;
        Ok(Some(val))
    }

    /// Parse all forms from the source.
    pub fn parse_all(&mut self) -> Result<Vec<Value>, ParseError> {
        let mut forms = Vec::new();
        while let Some(form) = self.parse()? {
            forms.push(form);
        }
        Ok(forms)
    }

    /// Parse a string and return the first form (convenience function).
    pub fn parse_str(source: &str) -> Result<Option<Value>, ParseError> {
        let mut parser = Parser::new(source)?;
        parser.parse()
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn advance(&mut self) -> Result<Token, ParseError> {
        let prev = std::mem::replace(&mut self.current, Token::Eof);
        // Capture position of the next token before fetching it
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        self.current = self.lexer.next_token()?;
        Ok(prev)
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            line: self.line,
            column: self.column,
        }
    }

    fn parse_form(&mut self) -> Result<Value, ParseError> {
        match &self.current {
            Token::Int(n) => {
                let n = *n;
                self.advance()?;
                Ok(Value::int(n))
            }
            Token::String(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(Value::string_literal(&s))
            }
            Token::Symbol(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(Value::symbol(Symbol::new(&s)))
            }
            Token::Quote => {
                self.advance()?;
                if matches!(self.current, Token::Eof) {
                    return Err(self.error("unexpected EOF after '".to_string()));
                }
                let quoted = self.parse_form()?;
                Ok(Value::list([Value::sym("quote"), quoted]))
            }
            Token::LParen => {
                self.advance()?;
                let mut elements = Vec::new();
                loop {
                    match &self.current {
                        Token::RParen => {
                            self.advance()?;
                            return Ok(Value::list(elements));
                        }
                        Token::Eof => {
                            return Err(self.error("unexpected EOF, expected ')'".to_string()));
                        }
                        _ => elements.push(self.parse_form()?),
                    }
                }
            }
            Token::RParen => Err(self.error("unexpected ')'".to_string())),
            Token::Eof => Err(self.error("unexpected EOF".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> Value {
        Parser::parse_str(source).unwrap().unwrap()
    }

    #[test]
    fn test_parse_atoms() {
        assert_eq!(parse_one("42"), Value::int(42));
        assert_eq!(parse_one("-3"), Value::int(-3));
        assert_eq!(parse_one("foo"), Value::sym("foo"));
        assert_eq!(parse_one("\"hi\""), Value::string_literal("hi"));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_one("(+ 1 2)"),
            Value::list([Value::sym("+"), Value::int(1), Value::int(2)])
        );
        assert_eq!(parse_one("()"), Value::empty_list());
    }

    #[test]
    fn test_parse_nested_list() {
        assert_eq!(
            parse_one("(a (b c))"),
            Value::list([
                Value::sym("a"),
                Value::list([Value::sym("b"), Value::sym("c")])
            ])
        );
    }

    #[test]
    fn test_quote_shorthand() {
        assert_eq!(
            parse_one("'x"),
            Value::list([Value::sym("quote"), Value::sym("x")])
        );
        assert_eq!(
            parse_one("'(1 2)"),
            Value::list([
                Value::sym("quote"),
                Value::list([Value::int(1), Value::int(2)])
            ])
        );
    }

    #[test]
    fn test_parse_multiple_forms() {
        let mut parser = Parser::new("1 2 3").unwrap();
        let forms = parser.parse_all().unwrap();
        assert_eq!(forms, vec![Value::int(1), Value::int(2), Value::int(3)]);
    }

    #[test]
    fn test_parse_eof_is_none() {
        let mut parser = Parser::new("   ; just a comment").unwrap();
        assert_eq!(parser.parse().unwrap(), None);
    }

    #[test]
    fn test_unbalanced_parens() {
        assert!(Parser::parse_str("(1 2").is_err());
        assert!(Parser::parse_str(")").is_err());
    }

    #[test]
    fn test_dangling_quote() {
        assert!(Parser::parse_str("'").is_err());
    }
}
