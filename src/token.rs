use std::fmt;

/// Start and end source location of one token, inclusive of every
/// character consumed while producing it (delimiters included).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub line_end: usize,
    pub column_end: usize,
}

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Public,
    New,
    Return,
    If,
    Else,
    While,
    For,
}

/// Single-character separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
}

/// Single-character operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuation {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

/// Classifies an [`Error`](TokenKind::Error) token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnknownChar(char),
    /// Escape sequence the string recognizer does not understand.
    UnknownEscape(char),
    /// End of input reached inside a string literal.
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChar(ch) => {
                write!(f, "unknown character: {ch}")
            }
            Self::UnknownEscape(ch) => {
                write!(f, "unknown escape sequence: \\{ch}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
        }
    }
}

/// Token kinds with their kind-specific payloads.
///
/// Keeping the payload inside the variant makes "payload matches kind"
/// a compiler-enforced invariant; releasing a payload is an ordinary
/// drop when the token is overwritten or taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenKind {
    /// No token: nothing scanned yet, the previous token was taken, or
    /// the input is exhausted.
    #[default]
    None,
    /// A lexical error, carried as ordinary token data.
    Error(LexErrorKind),
    /// Double-quoted string literal, escapes decoded.
    Str(String),
    /// `//` line comment or `/* */` block comment. A doubled marker
    /// (`///`, `/**`) flags a documentation comment.
    Comment {
        text: String,
        is_multiline: bool,
        is_documentation: bool,
    },
    /// Base-10 integer literal.
    Integer(u64),
    /// Name that is not a reserved word.
    Identifier(String),
    Keyword(Keyword),
    Punctuation(Punctuation),
    Separator(Separator),
}

/// A single token: kind, payload, and source span.
///
/// Tokens carrying owned text deep-copy on `clone`; they are never
/// shallow-aliased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// `true` when the kind is [`TokenKind::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self.kind, TokenKind::None)
    }

    /// Takes the token out, transferring payload ownership to the
    /// caller and resetting this one to kind `None`.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_transfers_payload_and_resets() {
        let mut token = Token {
            kind: TokenKind::Identifier("count".to_string()),
            span: Span {
                line: 3,
                column: 1,
                line_end: 3,
                column_end: 6,
            },
        };

        let taken = token.take();
        assert!(matches!(taken.kind, TokenKind::Identifier(ref name) if name == "count"));
        assert_eq!(taken.span.line, 3);

        assert!(token.is_none());
        assert_eq!(token.span, Span::default());
    }

    #[test]
    fn default_token_is_none() {
        assert!(Token::default().is_none());
    }

    #[test]
    fn error_kinds_format_for_reporting() {
        assert_eq!(
            LexErrorKind::UnknownChar('#').to_string(),
            "unknown character: #"
        );
        assert_eq!(
            LexErrorKind::UnknownEscape('q').to_string(),
            "unknown escape sequence: \\q"
        );
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "unterminated string literal"
        );
    }
}
