//! Lexer (tokenizer) for NestKV command lines.

use crate::error::{ParseError, ParseResult, Span};

/// Token types.
///
/// Command keywords are uppercase and reserved; a lowercase `set` is an
/// ordinary identifier and a valid variable name.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    /// `SET`
    Set,
    /// `GET`
    Get,
    /// `UNSET`
    Unset,
    /// `COUNTS`
    Counts,
    /// `FIND`
    Find,
    /// `BEGIN`
    Begin,
    /// `COMMIT`
    Commit,
    /// `ROLLBACK`
    Rollback,
    /// `END`
    End,

    // Literals
    /// Variable name: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident(String),
    /// Signed integer literal.
    Int(i64),
    /// Signed decimal literal (contains a decimal point).
    Float(f64),
    /// Double-quoted string literal, unescaped.
    Str(String),

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Human-readable name, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Set => "SET",
            TokenKind::Get => "GET",
            TokenKind::Unset => "UNSET",
            TokenKind::Counts => "COUNTS",
            TokenKind::Find => "FIND",
            TokenKind::Begin => "BEGIN",
            TokenKind::Commit => "COMMIT",
            TokenKind::Rollback => "ROLLBACK",
            TokenKind::End => "END",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Byte range in the input line.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Lexer state over one command line.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over an input line.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            pos: 0,
        }
    }

    /// Tokenizes all input, ending with an `Eof` token.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.pos)
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_whitespace();

        let start = self.pos;
        let Some(c) = self.next_char() else {
            return Ok(Token::new(TokenKind::Eof, Span::new(self.pos, self.pos)));
        };

        let kind = match c {
            '"' => self.scan_string(start)?,
            '_' | 'a'..='z' | 'A'..='Z' => self.scan_ident_or_keyword(c),
            '0'..='9' => self.scan_number(c, false, start)?,
            '-' | '+' => match self.peek_char() {
                Some('0'..='9') => {
                    let first = self.next_char().unwrap_or('0');
                    self.scan_number(first, c == '-', start)?
                }
                _ => {
                    return Err(ParseError::new(
                        format!("expected a digit after '{c}'"),
                        self.span_from(start),
                    ));
                }
            },
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{c}'"),
                    self.span_from(start),
                ));
            }
        };

        Ok(Token::new(kind, self.span_from(start)))
    }

    fn scan_string(&mut self, start: usize) -> ParseResult<TokenKind> {
        let mut value = String::new();

        loop {
            match self.next_char() {
                None => {
                    return Err(ParseError::new(
                        "unterminated string literal",
                        self.span_from(start),
                    ));
                }
                Some('"') => break,
                Some('\\') => {
                    let escaped = match self.next_char() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('\\') => '\\',
                        Some('"') => '"',
                        Some(c) => {
                            return Err(ParseError::new(
                                format!("invalid escape sequence '\\{c}'"),
                                self.span_from(start),
                            ));
                        }
                        None => {
                            return Err(ParseError::new(
                                "unterminated escape sequence",
                                self.span_from(start),
                            ));
                        }
                    };
                    value.push(escaped);
                }
                Some(c) => value.push(c),
            }
        }

        Ok(TokenKind::Str(value))
    }

    fn scan_ident_or_keyword(&mut self, first: char) -> TokenKind {
        let mut ident = String::new();
        ident.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_alphanumeric() || c == '_' {
                ident.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        // Keywords are matched case-sensitively: `SET` is reserved, `set`
        // is a variable name.
        match ident.as_str() {
            "SET" => TokenKind::Set,
            "GET" => TokenKind::Get,
            "UNSET" => TokenKind::Unset,
            "COUNTS" => TokenKind::Counts,
            "FIND" => TokenKind::Find,
            "BEGIN" => TokenKind::Begin,
            "COMMIT" => TokenKind::Commit,
            "ROLLBACK" => TokenKind::Rollback,
            "END" => TokenKind::End,
            _ => TokenKind::Ident(ident),
        }
    }

    fn scan_number(&mut self, first: char, negative: bool, start: usize) -> ParseResult<TokenKind> {
        let mut number = String::new();
        if negative {
            number.push('-');
        }
        number.push(first);

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                number.push(c);
                self.next_char();
            } else {
                break;
            }
        }

        // A decimal point selects a float literal.
        if self.peek_char() == Some('.') {
            number.push('.');
            self.next_char();

            let mut has_fraction = false;
            while let Some(c) = self.peek_char() {
                if c.is_ascii_digit() {
                    number.push(c);
                    self.next_char();
                    has_fraction = true;
                } else {
                    break;
                }
            }
            if !has_fraction {
                return Err(ParseError::new(
                    "expected digits after decimal point",
                    self.span_from(start),
                ));
            }

            let parsed = number.parse::<f64>().map_err(|_| {
                ParseError::new(
                    format!("invalid float literal '{number}'"),
                    self.span_from(start),
                )
            })?;
            return Ok(TokenKind::Float(parsed));
        }

        let parsed = number.parse::<i64>().map_err(|_| {
            ParseError::new(
                format!("integer literal '{number}' out of range"),
                self.span_from(start),
            )
        })?;
        Ok(TokenKind::Int(parsed))
    }
}
