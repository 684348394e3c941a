//! Parser for NestKV command lines.

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};
use nestkv_core::{Command, Value};

/// Parses one line of command text into a structured [`Command`].
///
/// The whole line must form exactly one command; trailing input is an
/// error.
pub fn parse(input: &str) -> ParseResult<Command> {
    Parser::new(input)?.parse_command()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }

    fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn parse_command(mut self) -> ParseResult<Command> {
        let token = self.next();
        let command = match token.kind {
            TokenKind::Set => {
                let key = self.expect_var()?;
                let value = self.expect_value()?;
                Command::Set { key, value }
            }
            TokenKind::Get => Command::Get {
                key: self.expect_var()?,
            },
            TokenKind::Unset => Command::Unset {
                key: self.expect_var()?,
            },
            TokenKind::Counts => Command::Counts {
                value: self.expect_value()?,
            },
            TokenKind::Find => Command::Find {
                value: self.expect_value()?,
            },
            TokenKind::Begin => Command::Begin,
            TokenKind::Commit => Command::Commit,
            TokenKind::Rollback => Command::Rollback,
            TokenKind::End => Command::End,
            other => {
                return Err(ParseError::new(
                    format!("expected a command keyword, found {}", other.name()),
                    token.span,
                ));
            }
        };
        self.expect_eof()?;
        Ok(command)
    }

    fn expect_var(&mut self) -> ParseResult<String> {
        let token = self.next();
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            other => Err(ParseError::new(
                format!("expected a variable name, found {}", other.name()),
                token.span,
            )),
        }
    }

    fn expect_value(&mut self) -> ParseResult<Value> {
        let token = self.next();
        match token.kind {
            TokenKind::Int(n) => Ok(Value::Int(n)),
            TokenKind::Float(x) => Ok(Value::Float(x)),
            TokenKind::Str(s) => Ok(Value::Str(s)),
            other => Err(ParseError::new(
                format!("expected a value, found {}", other.name()),
                token.span,
            )),
        }
    }

    fn expect_eof(&mut self) -> ParseResult<()> {
        let token = self.next();
        match token.kind {
            TokenKind::Eof => Ok(()),
            other => Err(ParseError::new(
                format!("unexpected trailing input: {}", other.name()),
                token.span,
            )),
        }
    }
}
