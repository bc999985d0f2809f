//! Lexer (tokenizer) for the mini language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. The scanner can be driven one token at a time with
//! [`Lexer::next_token`] or drained eagerly with [`Lexer::tokenize`]; the
//! parser uses the eager form.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// Maximum lexeme length for identifiers and numerals.
pub const MAX_TOKEN_LEN: usize = 100;

/// Classification of a scanned lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Keywords
    Int,
    If,

    // Identifiers and literals
    Identifier,
    Number,

    // Operators
    Assign, // =
    Equal,  // ==
    Plus,   // +
    Minus,  // -

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;

    // End of input
    Eof,

    // A character matching no token rule; recoverable at the lexer level,
    // rejected by `tokenize` and by the parser
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Int => "'int'",
            TokenKind::If => "'if'",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Assign => "'='",
            TokenKind::Equal => "'=='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Semicolon => "';'",
            TokenKind::Eof => "end of input",
            TokenKind::Unknown => "unrecognized character",
        };
        write!(f, "{}", name)
    }
}

/// A single scanned token: its kind, the exact lexeme it was scanned from,
/// and where it appears in the source.
///
/// Tokens are immutable once produced; the parser only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Unknown => write!(f, "unrecognized character '{}'", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unrecognized character '{character}' at line {}, column {}", .position.line, .position.column)]
    UnrecognizedCharacter {
        character: char,
        position: SourceLocation,
    },
    #[error("token exceeds {} characters at line {}, column {}", MAX_TOKEN_LEN, .position.line, .position.column)]
    TokenTooLong { position: SourceLocation },
}

/// Lexer for mini language source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Strict form used by the parser: the first unrecognized character
    /// aborts with [`LexError::UnrecognizedCharacter`] instead of producing
    /// a [`TokenKind::Unknown`] token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;

            if token.kind == TokenKind::Unknown {
                let character = token.text.chars().next().unwrap_or('\0');
                return Err(LexError::UnrecognizedCharacter {
                    character,
                    position: token.location,
                });
            }

            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan the next token.
    ///
    /// Once the end of input is reached this keeps returning `Eof` on every
    /// call; the cursor never advances past the end. A character matching no
    /// token rule comes back as an `Unknown` token so callers may keep
    /// scanning.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let loc = self.current_location();
        let ch = match self.advance() {
            None => return Ok(Token::new(TokenKind::Eof, "", loc)),
            Some(ch) => ch,
        };

        match ch {
            // Numeric literals
            '0'..='9' => self.number_literal(ch, loc),

            // Identifiers and keywords
            'a'..='z' | 'A'..='Z' | '_' => self.identifier_or_keyword(ch, loc),

            // Operators and punctuation
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::new(TokenKind::Equal, "==", loc))
                } else {
                    Ok(Token::new(TokenKind::Assign, "=", loc))
                }
            }
            '+' => Ok(Token::new(TokenKind::Plus, "+", loc)),
            '-' => Ok(Token::new(TokenKind::Minus, "-", loc)),
            '(' => Ok(Token::new(TokenKind::LParen, "(", loc)),
            ')' => Ok(Token::new(TokenKind::RParen, ")", loc)),
            '{' => Ok(Token::new(TokenKind::LBrace, "{", loc)),
            '}' => Ok(Token::new(TokenKind::RBrace, "}", loc)),
            ';' => Ok(Token::new(TokenKind::Semicolon, ";", loc)),

            _ => Ok(Token::new(TokenKind::Unknown, ch, loc)),
        }
    }

    /// Scan a numeric literal (unsigned integers only)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                if text.len() == MAX_TOKEN_LEN {
                    return Err(LexError::TokenTooLong { position: loc });
                }
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Ok(Token::new(TokenKind::Number, text, loc))
    }

    /// Scan an identifier or keyword
    fn identifier_or_keyword(
        &mut self,
        first_char: char,
        loc: SourceLocation,
    ) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                if text.len() == MAX_TOKEN_LEN {
                    return Err(LexError::TokenTooLong { position: loc });
                }
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = match text.as_str() {
            "int" => TokenKind::Int,
            "if" => TokenKind::If,
            _ => TokenKind::Identifier,
        };

        Ok(Token::new(kind, text, loc))
    }

    /// Skip whitespace, including newlines
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
