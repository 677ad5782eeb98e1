//! Recursive-descent JSON parser producing a [`Value`] tree.
//!
//! One root value per text; anything left over after the root is an error.
//! Container recursion is guarded by an explicit depth counter so adversarial
//! nesting fails with a [`SyntaxError`] instead of overflowing the stack.

use crate::error::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::number;
use crate::value::{Object, Value};
use crate::MAX_DEPTH;

/// Parse a JSON text into a value tree.
///
/// Pure-integer tokens parse into exact arbitrary-precision integers, so a
/// 20-digit id survives untouched. Tokens with a fraction or exponent become
/// doubles. The whole input must be one JSON value; trailing content, empty
/// input, and every grammar violation fail with a [`SyntaxError`] carrying
/// the byte offset.
///
/// ```rust
/// use bigjson_core::parse;
///
/// let doc = parse(r#"{"id":12345678901234567890}"#).unwrap();
/// let id = doc.as_object().unwrap().get("id").unwrap();
/// assert_eq!(id.as_int().unwrap().to_string(), "12345678901234567890");
/// ```
pub fn parse(text: &str) -> Result<Value, SyntaxError> {
    Parser::new(text).parse_text()
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    end: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(text),
            end: text.len(),
        }
    }

    fn parse_text(mut self) -> Result<Value, SyntaxError> {
        let first = self.expect_token("a value")?;
        let value = self.parse_value(first, 0)?;
        if let Some(extra) = self.lexer.next_token()? {
            return Err(SyntaxError::new(
                extra.offset,
                format!("expected end of input, found {}", extra.kind.describe()),
            ));
        }
        Ok(value)
    }

    /// Next token, or an error at end of input naming what was expected.
    fn expect_token(&mut self, expected: &str) -> Result<Token<'a>, SyntaxError> {
        match self.lexer.next_token()? {
            Some(token) => Ok(token),
            None => Err(SyntaxError::new(
                self.end,
                format!("expected {expected}, found end of input"),
            )),
        }
    }

    fn parse_value(&mut self, token: Token<'a>, depth: usize) -> Result<Value, SyntaxError> {
        match token.kind {
            TokenKind::Null => Ok(Value::Null),
            TokenKind::True => Ok(Value::Bool(true)),
            TokenKind::False => Ok(Value::Bool(false)),
            TokenKind::Str(s) => Ok(Value::String(s)),
            TokenKind::Num(lit) => number::classify(lit, token.offset),
            TokenKind::LBracket => self.parse_array(token.offset, depth + 1),
            TokenKind::LBrace => self.parse_object(token.offset, depth + 1),
            other => Err(SyntaxError::new(
                token.offset,
                format!("expected a value, found {}", other.describe()),
            )),
        }
    }

    fn parse_array(&mut self, open_offset: usize, depth: usize) -> Result<Value, SyntaxError> {
        self.check_depth(open_offset, depth)?;
        let mut items = Vec::new();
        let mut token = self.expect_token("a value or ']'")?;
        if token.kind == TokenKind::RBracket {
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value(token, depth)?);
            let sep = self.expect_token("',' or ']'")?;
            match sep.kind {
                TokenKind::RBracket => return Ok(Value::Array(items)),
                TokenKind::Comma => {
                    token = self.expect_token("a value")?;
                    if token.kind == TokenKind::RBracket {
                        return Err(SyntaxError::new(token.offset, "trailing comma before ']'"));
                    }
                }
                other => {
                    return Err(SyntaxError::new(
                        sep.offset,
                        format!("expected ',' or ']', found {}", other.describe()),
                    ));
                }
            }
        }
    }

    fn parse_object(&mut self, open_offset: usize, depth: usize) -> Result<Value, SyntaxError> {
        self.check_depth(open_offset, depth)?;
        let mut object = Object::new();
        let mut token = self.expect_token("a key or '}'")?;
        if token.kind == TokenKind::RBrace {
            return Ok(Value::Object(object));
        }
        loop {
            let key = match token.kind {
                TokenKind::Str(s) => s,
                other => {
                    return Err(SyntaxError::new(
                        token.offset,
                        format!("expected a string key, found {}", other.describe()),
                    ));
                }
            };
            let colon = self.expect_token("':'")?;
            if colon.kind != TokenKind::Colon {
                return Err(SyntaxError::new(
                    colon.offset,
                    format!("expected ':' after key, found {}", colon.kind.describe()),
                ));
            }
            let value_token = self.expect_token("a value")?;
            let value = self.parse_value(value_token, depth)?;
            // Duplicate keys resolve last-write-wins, first position kept.
            object.insert(key, value);
            let sep = self.expect_token("',' or '}'")?;
            match sep.kind {
                TokenKind::RBrace => return Ok(Value::Object(object)),
                TokenKind::Comma => {
                    token = self.expect_token("a key")?;
                    if token.kind == TokenKind::RBrace {
                        return Err(SyntaxError::new(token.offset, "trailing comma before '}'"));
                    }
                }
                other => {
                    return Err(SyntaxError::new(
                        sep.offset,
                        format!("expected ',' or '}}', found {}", other.describe()),
                    ));
                }
            }
        }
    }

    fn check_depth(&self, offset: usize, depth: usize) -> Result<(), SyntaxError> {
        if depth > MAX_DEPTH {
            return Err(SyntaxError::new(
                offset,
                format!("nesting exceeds {MAX_DEPTH} levels"),
            ));
        }
        Ok(())
    }
}
