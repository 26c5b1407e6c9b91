//! Backtracking lexer core for a small C-like language.
//!
//! Converts a raw byte buffer into classified, position-tagged tokens:
//! keywords, identifiers, integer literals, string literals, comments,
//! punctuation, and separators. The scanner is built from two pieces: a
//! [`Cursor`] abstraction with arbitrary-depth save/restore of scan
//! position (some token classes are only disambiguated a few characters
//! in), and a [`Lexer`] that applies an ordered sequence of recognizers
//! to produce exactly one token per call.
//!
//! Lexical errors are ordinary data: an unknown character or a bad
//! escape sequence yields a well-formed [`TokenKind::Error`] token with
//! a precise span, and scanning can simply continue past it.
//!
//! # Quick start
//!
//! ```
//! use codelex::{Keyword, Lexer, SliceCursor, TokenKind};
//!
//! let mut lexer = Lexer::new(SliceCursor::new(b"if x { return 1; }"));
//!
//! lexer.advance();
//! assert_eq!(lexer.token().kind, TokenKind::Keyword(Keyword::If));
//!
//! lexer.advance();
//! let token = lexer.take();
//! assert!(matches!(token.kind, TokenKind::Identifier(ref name) if name == "x"));
//! assert!(lexer.token().is_none());
//! ```
//!
//! ## Whole-buffer scanning
//!
//! ```
//! use codelex::{Punctuation, TokenKind, tokenize};
//!
//! let tokens = tokenize(b"count + 1").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].kind, TokenKind::Punctuation(Punctuation::Plus));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cursor;
pub mod lexer;
pub mod token;

pub use cursor::{Cursor, CursorError, SliceCursor, Snapshot};
pub use lexer::{LexError, Lexer, tokenize};
pub use token::{Keyword, LexErrorKind, Punctuation, Separator, Span, Token, TokenKind};
