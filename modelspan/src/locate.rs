/// Locating a model declaration block — or a key inside it — in raw
/// SQL text.
///
/// A model file opens with `MODEL ( … );` ahead of the query proper.
/// The locator works on the flat token stream: the block is everything
/// from the first bare `MODEL` word to the first semicolon, and a key
/// is the first matching bare word strictly between the two. No parse
/// tree is involved, so key lookup keeps working whatever the property
/// syntax inside the block looks like, at the cost of matching a bare
/// word that happens to appear in an expression inside the block.
use crate::position::{MissingLines, PositionDetails, Range};
use tokenizer::{Dialect, Token, TokenKind};

/// Failure reported by a [`TokenSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeError {
    pub message: String,
}

impl TokenizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TokenizeError {}

/// Errors surfaced by the locator entry points. Absence of a block or
/// key is `Ok(None)`, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateError {
    /// The token source failed; carried through unchanged.
    Tokenize(TokenizeError),
    /// The token source produced no stream at all. Only the whole-block
    /// entry point treats this as a failure; key lookup maps it to
    /// "not found".
    MissingTokenStream,
    /// Range translation was invoked without line content.
    Position(MissingLines),
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize(err) => write!(f, "{}", err),
            Self::MissingTokenStream => {
                write!(f, "tokenizer produced no token stream")
            }
            Self::Position(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize(err) => Some(err),
            Self::MissingTokenStream => None,
            Self::Position(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for LocateError {
    fn from(err: TokenizeError) -> Self {
        Self::Tokenize(err)
    }
}

impl From<MissingLines> for LocateError {
    fn from(err: MissingLines) -> Self {
        Self::Position(err)
    }
}

/// The tokenizing capability the locator depends on.
///
/// Injected rather than called directly so the locator can be driven
/// with synthetic token streams in tests. `Ok(None)` models a source
/// that produced no stream for the input (as opposed to an empty one).
pub trait TokenSource {
    fn tokenize(
        &self,
        sql: &str,
        dialect: Dialect,
    ) -> Result<Option<Vec<Token>>, TokenizeError>;
}

/// The bundled [`TokenSource`]: the real SQL lexer. It always produces
/// a stream; malformed input shows up as `Error`-kind tokens inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlTokenizer;

impl TokenSource for SqlTokenizer {
    fn tokenize(
        &self,
        sql: &str,
        dialect: Dialect,
    ) -> Result<Option<Vec<Token>>, TokenizeError> {
        Ok(Some(tokenizer::tokenize(sql, dialect)))
    }
}

fn is_var_named(token: &Token, upper_name: &str) -> bool {
    token.kind == TokenKind::Var && token.text.to_uppercase() == upper_name
}

/// Find the range of the whole `MODEL ( … );` block: from the first
/// bare `MODEL` word through the first semicolon.
///
/// Returns `Ok(None)` when either token is absent. The two tokens are
/// not required to be in order; a semicolon ahead of `MODEL` yields a
/// back-to-front range.
pub fn model_block_range(
    source: &impl TokenSource,
    sql: &str,
    dialect: Dialect,
) -> Result<Option<Range>, LocateError> {
    let tokens = source
        .tokenize(sql, dialect)?
        .ok_or(LocateError::MissingTokenStream)?;

    let start = tokens.iter().find(|t| is_var_named(t, "MODEL"));
    let end = tokens.iter().find(|t| t.kind == TokenKind::Semicolon);
    let (Some(start), Some(end)) = (start, end) else {
        return Ok(None);
    };

    let lines: Vec<&str> = sql.lines().collect();
    let start_range = PositionDetails::from(start).to_range(Some(&lines[..]))?;
    let end_range = PositionDetails::from(end).to_range(Some(&lines[..]))?;
    Ok(Some(Range::new(start_range.start, end_range.end)))
}

/// Find the range of `key` inside the model block: the first bare word
/// strictly between `MODEL` and the terminating semicolon whose text
/// equals `key` case-insensitively (whole token, not substring).
///
/// Returns `Ok(None)` when the block boundaries are absent or out of
/// order, or when no such word exists between them.
pub fn key_range_in_model_block(
    source: &impl TokenSource,
    sql: &str,
    dialect: Dialect,
    key: &str,
) -> Result<Option<Range>, LocateError> {
    let Some(tokens) = source.tokenize(sql, dialect)? else {
        return Ok(None);
    };

    let start_index = tokens.iter().position(|t| is_var_named(t, "MODEL"));
    let end_index =
        tokens.iter().position(|t| t.kind == TokenKind::Semicolon);
    let (Some(start_index), Some(end_index)) = (start_index, end_index)
    else {
        return Ok(None);
    };
    if start_index >= end_index {
        return Ok(None);
    }

    let upper_key = key.to_uppercase();
    let key_token = tokens[start_index + 1..end_index]
        .iter()
        .find(|t| is_var_named(t, &upper_key));
    let Some(key_token) = key_token else {
        return Ok(None);
    };

    let lines: Vec<&str> = sql.lines().collect();
    Ok(Some(PositionDetails::from(key_token).to_range(Some(&lines[..]))?))
}

/// [`model_block_range`] over the bundled SQL lexer.
pub fn find_model_block_range(
    sql: &str,
    dialect: Dialect,
) -> Result<Option<Range>, LocateError> {
    model_block_range(&SqlTokenizer, sql, dialect)
}

/// [`key_range_in_model_block`] over the bundled SQL lexer.
pub fn find_key_range_in_model_block(
    sql: &str,
    dialect: Dialect,
    key: &str,
) -> Result<Option<Range>, LocateError> {
    key_range_in_model_block(&SqlTokenizer, sql, dialect, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn block(sql: &str) -> Result<Option<Range>, LocateError> {
        find_model_block_range(sql, Dialect::Ansi)
    }

    fn key(sql: &str, key: &str) -> Result<Option<Range>, LocateError> {
        find_key_range_in_model_block(sql, Dialect::Ansi, key)
    }

    // ── Whole-block lookup ────────────────────────────────────

    #[test]
    fn no_model_keyword_is_not_found() {
        assert_eq!(block("SELECT 1"), Ok(None));
        assert_eq!(block("SELECT 1;"), Ok(None));
    }

    #[test]
    fn no_semicolon_is_not_found() {
        assert_eq!(block("MODEL (name foo)"), Ok(None));
    }

    #[test]
    fn block_range_covers_model_through_semicolon() {
        assert_eq!(
            block("MODEL (name foo);"),
            Ok(Some(Range::new(Position::new(0, 0), Position::new(0, 17)))),
        );
    }

    #[test]
    fn model_matches_case_insensitively() {
        assert_eq!(
            block("model (name foo);"),
            Ok(Some(Range::new(Position::new(0, 0), Position::new(0, 17)))),
        );
    }

    #[test]
    fn semicolon_before_model_gives_reversed_range() {
        // The whole-block path does not order-check its two anchors.
        let range = block("; MODEL (x y);").unwrap().unwrap();
        assert_eq!(range.start, Position::new(0, 2));
        assert_eq!(range.end, Position::new(0, 1));
    }

    // ── Key lookup ────────────────────────────────────────────

    #[test]
    fn key_lookup_is_case_insensitive_exact_match() {
        let sql = "MODEL (name foo, kind FULL); SELECT 1;";
        let expected =
            Range::new(Position::new(0, 7), Position::new(0, 11));
        assert_eq!(key(sql, "NAME"), Ok(Some(expected)));
        assert_eq!(key(sql, "name"), Ok(Some(expected)));
    }

    #[test]
    fn key_after_terminator_is_ignored() {
        assert_eq!(key("MODEL (kind FULL); SELECT name;", "name"), Ok(None));
    }

    #[test]
    fn key_lookup_requires_model_before_semicolon() {
        // The key exists inside a later block, but the first semicolon
        // precedes MODEL, so the boundaries are rejected.
        assert_eq!(key("x; MODEL (name foo);", "name"), Ok(None));
    }

    #[test]
    fn key_must_be_a_bare_word() {
        // FULL lexes as a keyword, not a Var, so it is not a key.
        assert_eq!(key("MODEL (name foo, kind FULL);", "full"), Ok(None));
    }

    #[test]
    fn missing_key_is_not_found() {
        assert_eq!(key("MODEL (name foo);", "cron"), Ok(None));
    }

    #[test]
    fn comments_inside_the_block_are_skipped() {
        let sql = "MODEL (-- name\n  name foo\n);";
        assert_eq!(
            key(sql, "name"),
            Ok(Some(Range::new(Position::new(1, 2), Position::new(1, 6)))),
        );
    }

    // ── Injected-source behavior ──────────────────────────────

    struct AbsentSource;

    impl TokenSource for AbsentSource {
        fn tokenize(
            &self,
            _sql: &str,
            _dialect: Dialect,
        ) -> Result<Option<Vec<Token>>, TokenizeError> {
            Ok(None)
        }
    }

    struct FailingSource;

    impl TokenSource for FailingSource {
        fn tokenize(
            &self,
            _sql: &str,
            _dialect: Dialect,
        ) -> Result<Option<Vec<Token>>, TokenizeError> {
            Err(TokenizeError::new("boom"))
        }
    }

    #[test]
    fn absent_stream_fails_block_lookup_but_not_key_lookup() {
        // Long-standing asymmetry between the two entry points,
        // preserved deliberately.
        assert_eq!(
            model_block_range(&AbsentSource, "MODEL ();", Dialect::Ansi),
            Err(LocateError::MissingTokenStream),
        );
        assert_eq!(
            key_range_in_model_block(
                &AbsentSource,
                "MODEL (name foo);",
                Dialect::Ansi,
                "name",
            ),
            Ok(None),
        );
    }

    #[test]
    fn source_errors_propagate_through_both_entry_points() {
        let err = LocateError::Tokenize(TokenizeError::new("boom"));
        assert_eq!(
            model_block_range(&FailingSource, "MODEL ();", Dialect::Ansi),
            Err(err.clone()),
        );
        assert_eq!(
            key_range_in_model_block(
                &FailingSource,
                "MODEL ();",
                Dialect::Ansi,
                "name",
            ),
            Err(err),
        );
    }
}
