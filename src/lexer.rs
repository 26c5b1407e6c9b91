use std::collections::HashMap;
use std::sync::OnceLock;

use crate::cursor::{Cursor, SliceCursor};
use crate::token::{Keyword, LexErrorKind, Punctuation, Separator, Span, Token, TokenKind};

/// Reserved-word spellings and their enumerants.
const KEYWORDS: &[(&str, Keyword)] = &[
    ("public", Keyword::Public),
    ("new", Keyword::New),
    ("return", Keyword::Return),
    ("if", Keyword::If),
    ("else", Keyword::Else),
    ("while", Keyword::While),
    ("for", Keyword::For),
];

/// The keyword lookup table, built exactly once before any reader
/// observes it and immutable afterwards.
fn keyword_table() -> &'static HashMap<&'static str, Keyword> {
    static TABLE: OnceLock<HashMap<&'static str, Keyword>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.iter().copied().collect())
}

/// Error produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize a whole buffer in one call.
///
/// Comment tokens are kept in the stream. Scanning stops at the first
/// error token, which is returned as `Err`. Callers that want to scan
/// past errors drive a [`Lexer`] directly; error tokens are ordinary
/// data there.
///
/// # Errors
///
/// Returns `LexError` for an unknown character, an unknown escape
/// sequence, or an unterminated string literal.
pub fn tokenize(input: &[u8]) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(SliceCursor::new(input));
    let mut tokens = Vec::new();

    loop {
        lexer.advance();
        if lexer.token().is_none() {
            return Ok(tokens);
        }

        let token = lexer.take();
        if let TokenKind::Error(kind) = token.kind {
            return Err(LexError {
                kind,
                span: token.span,
            });
        }
        tokens.push(token);
    }
}

/// Scans one token per [`advance`](Lexer::advance) call from a bound
/// cursor.
///
/// The lexer owns its cursor binding and the current token; no other
/// state persists between calls. The only backtracking anywhere is the
/// single push/restore-or-commit pair inside the comment recognizer.
#[derive(Debug)]
pub struct Lexer<C> {
    cursor: C,
    current: Option<u8>,
    token: Token,
}

impl<C: Cursor> Lexer<C> {
    /// Recognizers in priority order; the first match claims the token.
    /// Comment must run before punctuation so `//` and `/*` win over
    /// the `/` operator.
    const RECOGNIZERS: [fn(&mut Self) -> Option<TokenKind>; 7] = [
        Self::read_comment,
        Self::read_punctuation,
        Self::read_separator,
        Self::read_identifier_or_keyword,
        Self::read_number,
        Self::read_string,
        Self::read_special,
    ];

    /// Binds the cursor and primes the lookahead. The cursor starts
    /// before its first character, so one step reaches it.
    pub fn new(mut cursor: C) -> Self {
        let current = if cursor.advance() {
            cursor.current()
        } else {
            None
        };
        Self {
            cursor,
            current,
            token: Token::default(),
        }
    }

    /// The token produced by the last [`advance`](Lexer::advance) call.
    /// Kind `None` before the first call, after a [`take`](Lexer::take),
    /// and at end of input.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Takes the current token, transferring payload ownership to the
    /// caller and resetting the stored one to kind `None`.
    pub fn take(&mut self) -> Token {
        self.token.take()
    }

    /// Scans the next token.
    ///
    /// While input remains this always produces a token; lexical errors
    /// come back as [`TokenKind::Error`] tokens, never as failures. At
    /// end of input the stored token is left at kind `None` and every
    /// further call keeps it there.
    pub fn advance(&mut self) {
        self.skip_whitespace();

        let mut span = Span {
            line: self.cursor.line(),
            column: self.cursor.column(),
            ..Span::default()
        };

        let mut kind = TokenKind::None;
        for read in Self::RECOGNIZERS {
            if let Some(found) = read(self) {
                kind = found;
                break;
            }
        }

        span.line_end = self.cursor.line();
        span.column_end = self.cursor.column();

        // Overwriting the stored token drops whatever payload the
        // previous one still owned.
        self.token = Token { kind, span };
    }

    /// Steps the cursor and refreshes the lookahead; `None` once the
    /// input is exhausted.
    fn next_char(&mut self) -> Option<u8> {
        self.current = if self.cursor.advance() {
            self.cursor.current()
        } else {
            None
        };
        self.current
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.next_char();
        }
    }

    /// Commits a tentative scan by dropping its backtrack point.
    fn commit_state(&mut self) {
        // A matching push_state always precedes this.
        let _ = self.cursor.discard_state();
    }

    /// Rewinds to the last backtrack point and refreshes the lookahead
    /// from it.
    fn restore_state(&mut self) {
        if self.cursor.pop_state().is_ok() {
            self.current = self.cursor.current();
        }
    }

    /// Comments share their lead character with the `/` operator, so
    /// the scan is tentative: push a backtrack point, look one
    /// character ahead, then either commit or restore so punctuation
    /// can claim the `/`.
    fn read_comment(&mut self) -> Option<TokenKind> {
        if self.current != Some(b'/') {
            return None;
        }

        self.cursor.push_state();

        match self.next_char() {
            Some(b'/') => {
                self.next_char();
                let kind = self.single_line_comment();
                self.commit_state();
                Some(kind)
            }
            Some(b'*') => {
                self.next_char();
                let kind = self.multi_line_comment();
                self.commit_state();
                Some(kind)
            }
            _ => {
                self.restore_state();
                None
            }
        }
    }

    fn single_line_comment(&mut self) -> TokenKind {
        let mut is_documentation = false;
        if self.current == Some(b'/') {
            is_documentation = true;
            self.next_char();
        }

        let mut text = String::new();
        while let Some(ch) = self.current {
            if ch == b'\n' {
                break;
            }
            text.push(char::from(ch));
            self.next_char();
        }

        // The terminating newline is not part of the text.
        if self.current == Some(b'\n') {
            self.next_char();
        }

        TokenKind::Comment {
            text,
            is_multiline: false,
            is_documentation,
        }
    }

    fn multi_line_comment(&mut self) -> TokenKind {
        let mut is_documentation = false;
        if self.current == Some(b'*') {
            is_documentation = true;
            self.next_char();
        }

        let mut text = String::new();
        loop {
            match self.current {
                // No nesting; at end of input the comment simply ends.
                None => break,
                Some(b'*') => {
                    if self.next_char() == Some(b'/') {
                        self.next_char();
                        break;
                    }
                    text.push('*');
                }
                Some(ch) => {
                    text.push(char::from(ch));
                    self.next_char();
                }
            }
        }

        TokenKind::Comment {
            text,
            is_multiline: true,
            is_documentation,
        }
    }

    fn read_punctuation(&mut self) -> Option<TokenKind> {
        let punctuation = match self.current {
            Some(b'+') => Punctuation::Plus,
            Some(b'-') => Punctuation::Minus,
            Some(b'*') => Punctuation::Star,
            Some(b'/') => Punctuation::Slash,
            _ => return None,
        };

        self.next_char();
        Some(TokenKind::Punctuation(punctuation))
    }

    fn read_separator(&mut self) -> Option<TokenKind> {
        let separator = match self.current {
            Some(b'(') => Separator::LParen,
            Some(b')') => Separator::RParen,
            Some(b'[') => Separator::LBracket,
            Some(b']') => Separator::RBracket,
            Some(b'{') => Separator::LBrace,
            Some(b'}') => Separator::RBrace,
            Some(b';') => Separator::Semicolon,
            Some(b',') => Separator::Comma,
            _ => return None,
        };

        self.next_char();
        Some(TokenKind::Separator(separator))
    }

    fn read_identifier_or_keyword(&mut self) -> Option<TokenKind> {
        let text = self.read_identifier_raw()?;

        match keyword_table().get(text.as_str()) {
            Some(&keyword) => Some(TokenKind::Keyword(keyword)),
            None => Some(TokenKind::Identifier(text)),
        }
    }

    /// Accumulates an identifier: alphabetic start, then alphanumerics
    /// and underscores. Case-sensitive.
    fn read_identifier_raw(&mut self) -> Option<String> {
        if !self.current.is_some_and(|ch| ch.is_ascii_alphabetic()) {
            return None;
        }

        let mut text = String::new();
        while let Some(ch) = self.current {
            if !(ch.is_ascii_alphanumeric() || ch == b'_') {
                break;
            }
            text.push(char::from(ch));
            self.next_char();
        }

        Some(text)
    }

    fn read_number(&mut self) -> Option<TokenKind> {
        if !self.current.is_some_and(|ch| ch.is_ascii_digit()) {
            return None;
        }

        // Base-10 folding; literals wider than u64 wrap, there is no
        // overflow check.
        let mut value: u64 = 0;
        while let Some(ch) = self.current {
            if !ch.is_ascii_digit() {
                break;
            }
            value = value.wrapping_mul(10).wrapping_add(u64::from(ch - b'0'));
            self.next_char();
        }

        Some(TokenKind::Integer(value))
    }

    fn read_string(&mut self) -> Option<TokenKind> {
        if self.current != Some(b'"') {
            return None;
        }
        self.next_char();

        let mut text = String::new();
        loop {
            match self.current {
                None => {
                    return Some(TokenKind::Error(LexErrorKind::UnterminatedString));
                }
                Some(b'"') => {
                    self.next_char();
                    return Some(TokenKind::Str(text));
                }
                Some(b'\\') => {
                    self.next_char();
                    match self.current {
                        Some(b'n') => text.push('\n'),
                        Some(b't') => text.push('\t'),
                        Some(b'r') => text.push('\r'),
                        Some(b'\\') => text.push('\\'),
                        Some(ch) => {
                            // Left unconsumed so the next call resumes
                            // at the offending character.
                            return Some(TokenKind::Error(LexErrorKind::UnknownEscape(
                                char::from(ch),
                            )));
                        }
                        None => {
                            return Some(TokenKind::Error(LexErrorKind::UnterminatedString));
                        }
                    }
                    self.next_char();
                }
                Some(ch) => {
                    text.push(char::from(ch));
                    self.next_char();
                }
            }
        }
    }

    /// Fallback: claims any character no other recognizer wants and
    /// consumes it, so every call with remaining input makes progress.
    /// At end of input it reports no match, leaving the token at kind
    /// `None`.
    fn read_special(&mut self) -> Option<TokenKind> {
        let ch = self.current?;
        self.next_char();
        Some(TokenKind::Error(LexErrorKind::UnknownChar(char::from(ch))))
    }
}
