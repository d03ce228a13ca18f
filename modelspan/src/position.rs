/// Translation of token position metadata into editor-style text ranges.
///
/// The tokenizer reports where a token *ends* — 1-indexed line and
/// column of its last character — plus inclusive character offsets for
/// its first and last character. Editor tooling wants a 0-indexed
/// start/end pair. Deriving the start point of a multi-character token
/// therefore means walking backward from the end position, borrowing
/// from earlier lines when the token spans a line break.
use tokenizer::Token;

/// One point in text: 0-indexed line and character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// A text span between two [`Position`]s. The end character is
/// exclusive: a single-character token at column `c` covers
/// `[c, c + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Error for the multi-character path of [`PositionDetails::to_range`]
/// when no line array was supplied. A caller contract violation, not a
/// runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingLines;

impl std::fmt::Display for MissingLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line contents are required when start and end offsets differ",
        )
    }
}

impl std::error::Error for MissingLines {}

/// A snapshot of one token's positional fields.
///
/// Copies the four numbers out of a [`Token`] so range translation does
/// not depend on the tokenizer's token type; any source of equivalent
/// metadata works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDetails {
    /// Line the token ends on (1-indexed).
    pub line: usize,
    /// Column the token ends on (1-indexed, at the last character).
    pub col: usize,
    /// Character offset of the first character (0-based).
    pub start: usize,
    /// Character offset of the last character (0-based, inclusive).
    pub end: usize,
}

impl From<&Token> for PositionDetails {
    fn from(token: &Token) -> Self {
        Self {
            line: token.line,
            col: token.col,
            start: token.start,
            end: token.end,
        }
    }
}

impl PositionDetails {
    pub const fn new(line: usize, col: usize, start: usize, end: usize) -> Self {
        Self {
            line,
            col,
            start,
            end,
        }
    }

    /// Convert to a [`Range`].
    ///
    /// When `start == end` the token is a single character (or a
    /// zero-width marker) and the range comes straight from `line`/`col`
    /// — no line array needed. Otherwise `lines` is required: the start
    /// point is found by subtracting the token's character length from
    /// the end column and borrowing from earlier lines while the column
    /// stays negative, one extra character per line break. The final
    /// column is floored at 0 to guard against malformed metadata.
    ///
    /// `lines` must be the terminator-stripped lines of the text the
    /// metadata was measured against.
    pub fn to_range(
        &self,
        lines: Option<&[&str]>,
    ) -> Result<Range, MissingLines> {
        if self.start == self.end {
            return Ok(Range::new(
                Position::new(
                    self.line.saturating_sub(1),
                    self.col.saturating_sub(1),
                ),
                Position::new(self.line.saturating_sub(1), self.col),
            ));
        }

        let lines = lines.ok_or(MissingLines)?;

        // 1-indexed to 0-indexed for the line only: `col` is already
        // the exclusive end character.
        let end_line_0 = self.line.saturating_sub(1);
        let end_col_0 = self.col;

        let length = (self.end.saturating_sub(self.start) + 1) as i64;
        let mut start_line_0 = end_line_0;
        let mut start_col_0 = end_col_0 as i64 - length;

        while start_col_0 < 0 && start_line_0 > 0 {
            start_line_0 -= 1;
            start_col_0 += line_length(lines, start_line_0);
            if start_col_0 >= 0 {
                break;
            }
            start_col_0 += 1; // the newline separator
        }

        let start_col_0 = start_col_0.max(0) as usize;
        Ok(Range::new(
            Position::new(start_line_0, start_col_0),
            Position::new(end_line_0, end_col_0),
        ))
    }
}

/// Character length of `lines[index]`, 0 when the index is out of
/// bounds (malformed metadata walks off the array instead of panicking).
fn line_length(lines: &[&str], index: usize) -> i64 {
    lines.get(index).map_or(0, |l| l.chars().count() as i64)
}
