//! # Tokenizer
//!
//! A streaming lexer for SQL text, with the position metadata that the
//! range-mapping layer consumes.
//!
//! ## Architecture
//!
//! ```text
//!  impl Read (file, socket, &[u8], …)
//!      │
//!      ▼
//!  ┌────────┐    Token stream
//!  │ Lexer  │ ──────────────────▶  locator / tooling
//!  └────────┘  (impl Iterator)
//! ```
//!
//! ```rust
//! use tokenizer::{Dialect, Lexer, TokenKind};
//!
//! let source = "MODEL (name orders); SELECT 1;";
//! for token in Lexer::from_str(source, Dialect::Ansi) {
//!     if token.kind == TokenKind::Var {
//!         println!("{} at {}:{}", token.text, token.line, token.col);
//!     }
//! }
//! ```
//!
//! Classification is flat and lexical: no statement grammar, no
//! expression parsing. Every token records the 1-indexed line/column of
//! its last character and inclusive 0-based character offsets, which is
//! the exact shape the position translator expects.

pub mod dialect;
pub mod lexer;
pub mod span;
pub mod token;

pub use dialect::{Dialect, UnknownDialect};
pub use lexer::{Lexer, tokenize};
pub use span::Pos;
pub use token::{Token, TokenKind};
