//! JSON tokenizer: a forward-only byte cursor over the input text.
//!
//! Tokens are produced on demand; the parser pulls one at a time and the
//! lexer never looks past the token it is asked for. String literals are
//! decoded here (escapes, surrogate pairs); number literals are validated
//! against the JSON grammar but kept as raw spans for the classifier.
//! Every token carries the byte offset it started at.

use crate::error::SyntaxError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind<'a> {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    /// Decoded string literal.
    Str(String),
    /// Raw numeric literal, validated but not yet classified.
    Num(NumberLiteral<'a>),
    True,
    False,
    Null,
}

impl TokenKind<'_> {
    /// Short display form for expectation-versus-actual error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Str(_) => "a string",
            TokenKind::Num(_) => "a number",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
        }
    }
}

/// Raw numeric token: the exact source span plus the shape flags the
/// classifier dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NumberLiteral<'a> {
    pub raw: &'a str,
    pub has_fraction: bool,
    pub has_exponent: bool,
}

pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// The next token, `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, SyntaxError> {
        self.skip_whitespace();
        let offset = self.pos;
        let Some(b) = self.peek() else {
            return Ok(None);
        };
        let kind = match b {
            b'{' => {
                self.pos += 1;
                TokenKind::LBrace
            }
            b'}' => {
                self.pos += 1;
                TokenKind::RBrace
            }
            b'[' => {
                self.pos += 1;
                TokenKind::LBracket
            }
            b']' => {
                self.pos += 1;
                TokenKind::RBracket
            }
            b':' => {
                self.pos += 1;
                TokenKind::Colon
            }
            b',' => {
                self.pos += 1;
                TokenKind::Comma
            }
            b'"' => TokenKind::Str(self.lex_string()?),
            b'-' | b'0'..=b'9' => TokenKind::Num(self.lex_number()?),
            b't' => self.lex_literal("true", TokenKind::True)?,
            b'f' => self.lex_literal("false", TokenKind::False)?,
            b'n' => self.lex_literal("null", TokenKind::Null)?,
            _ => {
                let c = self.char_at(offset);
                return Err(SyntaxError::new(
                    offset,
                    format!("unexpected character {c:?}"),
                ));
            }
        };
        Ok(Some(Token { kind, offset }))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// The full character starting at a byte offset, for error messages.
    fn char_at(&self, offset: usize) -> char {
        self.input[offset..].chars().next().unwrap_or('\u{fffd}')
    }

    fn lex_literal(
        &mut self,
        word: &'static str,
        kind: TokenKind<'a>,
    ) -> Result<TokenKind<'a>, SyntaxError> {
        if self.input.as_bytes()[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            Ok(kind)
        } else {
            Err(SyntaxError::new(self.pos, format!("expected '{word}'")))
        }
    }

    /// Decode a string literal. The cursor sits on the opening quote.
    ///
    /// Unescaped spans are copied through whole; the loop only stops on the
    /// closing quote, a backslash, or an unescaped control byte. Multi-byte
    /// UTF-8 sequences pass through untouched.
    fn lex_string(&mut self) -> Result<String, SyntaxError> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        let mut run = self.pos;
        loop {
            let Some(b) = self.peek() else {
                return Err(SyntaxError::new(start, "unterminated string"));
            };
            match b {
                b'"' => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.input[run..self.pos]);
                    self.pos += 1;
                    self.decode_escape(&mut out)?;
                    run = self.pos;
                }
                0x00..=0x1f => {
                    return Err(SyntaxError::new(
                        self.pos,
                        format!("unescaped control character 0x{b:02x} in string"),
                    ));
                }
                _ => self.pos += 1,
            }
        }
    }

    /// Decode one escape sequence. The cursor sits just past the backslash.
    fn decode_escape(&mut self, out: &mut String) -> Result<(), SyntaxError> {
        let esc_offset = self.pos - 1;
        let Some(b) = self.peek() else {
            return Err(SyntaxError::new(esc_offset, "unterminated escape sequence"));
        };
        self.pos += 1;
        match b {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{8}'),
            b'f' => out.push('\u{c}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let c = self.decode_unicode_escape(esc_offset)?;
                out.push(c);
            }
            _ => {
                let c = self.char_at(esc_offset + 1);
                return Err(SyntaxError::new(
                    esc_offset,
                    format!("invalid escape character {c:?}"),
                ));
            }
        }
        Ok(())
    }

    /// Decode `\uXXXX`, pairing surrogates. The cursor sits past the `u`.
    fn decode_unicode_escape(&mut self, esc_offset: usize) -> Result<char, SyntaxError> {
        let hi = self.hex4(esc_offset)?;
        match hi {
            // High surrogate: a low surrogate escape must follow.
            0xd800..=0xdbff => {
                if !self.input.as_bytes()[self.pos..].starts_with(b"\\u") {
                    return Err(SyntaxError::new(
                        esc_offset,
                        "unpaired surrogate in \\u escape",
                    ));
                }
                self.pos += 2;
                let lo = self.hex4(esc_offset)?;
                if !(0xdc00..=0xdfff).contains(&lo) {
                    return Err(SyntaxError::new(
                        esc_offset,
                        "invalid low surrogate in \\u escape",
                    ));
                }
                let code = 0x10000 + ((u32::from(hi) - 0xd800) << 10 | (u32::from(lo) - 0xdc00));
                char::from_u32(code)
                    .ok_or_else(|| SyntaxError::new(esc_offset, "invalid \\u escape"))
            }
            0xdc00..=0xdfff => Err(SyntaxError::new(
                esc_offset,
                "unpaired surrogate in \\u escape",
            )),
            code => char::from_u32(u32::from(code))
                .ok_or_else(|| SyntaxError::new(esc_offset, "invalid \\u escape")),
        }
    }

    /// Four hex digits of a `\uXXXX` escape.
    fn hex4(&mut self, esc_offset: usize) -> Result<u16, SyntaxError> {
        let mut code: u16 = 0;
        for _ in 0..4 {
            let Some(b) = self.peek() else {
                return Err(SyntaxError::new(esc_offset, "unterminated \\u escape"));
            };
            let digit = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                b'A'..=b'F' => b - b'A' + 10,
                _ => {
                    return Err(SyntaxError::new(
                        self.pos,
                        "expected four hex digits in \\u escape",
                    ));
                }
            };
            code = code << 4 | u16::from(digit);
            self.pos += 1;
        }
        Ok(code)
    }

    /// Validate a number literal against the JSON grammar and return its raw
    /// span: `-? (0 | [1-9][0-9]*) ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?`.
    fn lex_number(&mut self) -> Result<NumberLiteral<'a>, SyntaxError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if matches!(self.peek(), Some(b'0'..=b'9')) {
                    return Err(SyntaxError::new(start, "leading zeros are not allowed"));
                }
            }
            Some(b'1'..=b'9') => {
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            }
            _ => return Err(SyntaxError::new(self.pos, "expected a digit")),
        }
        let mut has_fraction = false;
        if self.peek() == Some(b'.') {
            has_fraction = true;
            self.pos += 1;
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(SyntaxError::new(
                    self.pos,
                    "expected a digit after the decimal point",
                ));
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        let mut has_exponent = false;
        if matches!(self.peek(), Some(b'e' | b'E')) {
            has_exponent = true;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(SyntaxError::new(self.pos, "expected a digit in the exponent"));
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        Ok(NumberLiteral {
            raw: &self.input[start..self.pos],
            has_fraction,
            has_exponent,
        })
    }
}
