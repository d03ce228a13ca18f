//! # modelspan
//!
//! Maps SQL token position metadata to editor-style text ranges, and
//! locates `MODEL ( … );` declaration blocks — or individual keys
//! inside them — in raw SQL text.
//!
//! ## Architecture
//!
//! ```text
//!  raw SQL text
//!      │
//!      ▼
//!  ┌───────────┐   Token stream   ┌──────────┐   selected tokens
//!  │ tokenizer │ ───────────────▶ │ locator  │ ────────────────┐
//!  └───────────┘  (TokenSource)   └──────────┘                 ▼
//!                                                      ┌────────────┐
//!                                  Range ◀──────────── │ translator │
//!                                    │                 └────────────┘
//!                                    ▼
//!                              ┌───────────┐
//!                              │ extractor │ ──▶ covered text
//!                              └───────────┘
//! ```
//!
//! ```rust
//! use modelspan::{find_model_block_range, read_range_from_string};
//! use tokenizer::Dialect;
//!
//! let sql = "MODEL (name orders);\nSELECT 1;\n";
//! let range = find_model_block_range(sql, Dialect::Ansi)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(read_range_from_string(sql, range), "MODEL (name orders);");
//! ```
//!
//! Everything here is a pure synchronous function of its inputs; there
//! is no shared state and no logging, so calls are freely concurrent.
//! The tokenizer is injected ([`TokenSource`]) and the translator
//! consumes a plain [`PositionDetails`] snapshot, so both ends of the
//! pipeline can be driven synthetically in tests.

pub mod extract;
pub mod locate;
pub mod position;

pub use extract::{read_range_from_file, read_range_from_string};
pub use locate::{
    LocateError, SqlTokenizer, TokenSource, TokenizeError,
    find_key_range_in_model_block, find_model_block_range,
    key_range_in_model_block, model_block_range,
};
pub use position::{MissingLines, Position, PositionDetails, Range};
