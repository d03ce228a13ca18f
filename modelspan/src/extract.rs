/// Materializing the text a [`Range`] denotes.
///
/// The inverse question to range translation: given a previously
/// computed range, what does it cover? Works on an in-memory string or
/// on a file read in full. Out-of-bounds ranges clamp instead of
/// failing; a range spanning several lines comes back with the line
/// breaks removed, since slices are taken from terminator-stripped
/// lines and joined with nothing in between.
use std::fs;
use std::io;
use std::path::Path;

use crate::position::Range;

/// Return the substring of `content` covered by `range`.
///
/// Character-indexed, like the positions themselves. The start line is
/// floored at 0 and the end line capped at the last line of `content`;
/// an empty window yields an empty string.
pub fn read_range_from_string(content: &str, range: Range) -> String {
    let lines: Vec<&str> = content.lines().collect();

    // Ensure the range is within bounds.
    let start_line = range.start.line;
    let end_line = (range.end.line + 1).min(lines.len());

    if start_line >= end_line {
        return String::new();
    }

    let mut result = String::new();
    for (i, &line) in lines.iter().enumerate().take(end_line).skip(start_line)
    {
        let start_char = if i == range.start.line {
            range.start.character
        } else {
            0
        };
        let end_char = if i == range.end.line {
            range.end.character
        } else {
            line.chars().count()
        };
        result.push_str(slice_chars(line, start_char, end_char));
    }
    result
}

/// Read `file` as UTF-8 and return the content within `range`.
///
/// Any open, read, or decode failure surfaces as the [`io::Error`] it
/// was; nothing is retried.
pub fn read_range_from_file(file: &Path, range: Range) -> io::Result<String> {
    let content = fs::read_to_string(file)?;
    Ok(read_range_from_string(&content, range))
}

/// Slice `line` by character indices, clamping both ends to the line's
/// length and returning `""` for an inverted window.
fn slice_chars(line: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| {
        line.char_indices()
            .nth(n)
            .map_or(line.len(), |(idx, _)| idx)
    };
    let start = byte_at(start);
    let end = byte_at(end);
    if start >= end { "" } else { &line[start..end] }
}
