/// Streaming lexer for SQL text.
///
/// The [`Lexer`] consumes bytes from any [`std::io::Read`] source —
/// a file, a network socket, `stdin`, or an in-memory buffer — and
/// implements [`Iterator`] over [`Token`]s. It tracks character offset,
/// line, and column for every token it produces.
///
/// # Streaming
///
/// Internally the lexer maintains a small refillable buffer.  Each call
/// to the iterator pulls exactly as many bytes as are needed for the
/// current token, so it works over slow streams without requiring the
/// entire input in memory.
///
/// # Position metadata
///
/// Token positions follow the convention the range translator expects:
/// `line`/`col` name the token's **last** character (1-based), and
/// `start`/`end` are inclusive 0-based character offsets. Offsets count
/// Unicode scalar values so they line up with character-indexed slicing
/// of the same text.
///
/// # Dialect sensitivity
///
/// | Feature              | Dialects                      |
/// |----------------------|-------------------------------|
/// | `` ` `` identifiers  | MySQL, BigQuery               |
/// | `# …` line comments  | MySQL, BigQuery               |
/// | `\` string escapes   | MySQL, BigQuery               |
/// | Nested `/* … */`     | Postgres                      |
use std::io::Read;

use crate::dialect::Dialect;
use crate::span::Pos;
use crate::token::{Token, TokenKind};

// ═══════════════════════════════════════════════════════════════════
// Keyword table
// ═══════════════════════════════════════════════════════════════════

/// Reserved words, uppercase, sorted for binary search.
///
/// Deliberately does NOT contain `MODEL`: the model declaration opener
/// is a bare word to the tokenizer and must classify as [`TokenKind::Var`].
const KEYWORDS: &[&str] = &[
    "ALL", "AND", "AS", "ASC", "BETWEEN", "BY", "CASE", "CAST", "CREATE",
    "CROSS", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXISTS",
    "FALSE", "FROM", "FULL", "GROUP", "HAVING", "IN", "INNER", "INSERT",
    "INTO", "IS", "JOIN", "LEFT", "LIKE", "LIMIT", "NOT", "NULL", "OFFSET",
    "ON", "OR", "ORDER", "OUTER", "OVER", "PARTITION", "RIGHT", "SELECT",
    "SET", "TABLE", "THEN", "TRUE", "UNION", "UPDATE", "USING", "VALUES",
    "VIEW", "WHEN", "WHERE", "WITH",
];

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

// ═══════════════════════════════════════════════════════════════════
// Read buffer — one-character-at-a-time abstraction over Read
// ═══════════════════════════════════════════════════════════════════

/// Small wrapper that gives us `peek()` / `peek_ahead()` / `advance_char()`
/// over any `Read`, with position tracking.
///
/// We keep a buffer of `LOOKAHEAD` bytes so we can peek ahead without
/// consuming from the underlying reader. 8 bytes is enough to hold two
/// maximum-length UTF-8 characters, which covers the deepest peek-ahead
/// the lexer ever needs (all multi-character delimiters are ASCII).
const LOOKAHEAD: usize = 8;

struct ReadBuf<R: Read> {
    reader: R,
    buf: [u8; LOOKAHEAD],
    /// How many valid bytes are in `buf` starting from index 0.
    filled: usize,
    /// Whether the underlying reader has returned 0 (EOF).
    reader_eof: bool,
    /// Character offset of the next character (0-based).
    offset: usize,
    /// Line of the next character (1-based).
    line: usize,
    /// Column of the next character (1-based, in characters).
    column: usize,
    /// Position of the most recently consumed character.
    last: Pos,
}

impl<R: Read> ReadBuf<R> {
    fn new(reader: R) -> Self {
        let mut rb = Self {
            reader,
            buf: [0u8; LOOKAHEAD],
            filled: 0,
            reader_eof: false,
            offset: 0,
            line: 1,
            column: 1,
            last: Pos::origin(),
        };
        rb.fill();
        rb
    }

    /// Top up the buffer from the reader.
    fn fill(&mut self) {
        while !self.reader_eof && self.filled < LOOKAHEAD {
            let mut one = [0u8; 1];
            match self.reader.read(&mut one) {
                Ok(0) => {
                    self.reader_eof = true;
                }
                Ok(_) => {
                    self.buf[self.filled] = one[0];
                    self.filled += 1;
                }
                Err(_) => {
                    self.reader_eof = true;
                }
            }
        }
    }

    /// Position of the next (unconsumed) character.
    fn pos(&self) -> Pos {
        Pos::new(self.offset, self.line, self.column)
    }

    /// Position of the last consumed character.
    fn last_pos(&self) -> Pos {
        self.last
    }

    /// Peek at the current byte without consuming.
    fn peek(&self) -> Option<u8> {
        if self.filled > 0 {
            Some(self.buf[0])
        } else {
            None
        }
    }

    /// Peek `n` bytes ahead (0-indexed: `peek_ahead(0)` == `peek()`).
    fn peek_ahead(&self, n: usize) -> Option<u8> {
        if n < self.filled {
            Some(self.buf[n])
        } else {
            None
        }
    }

    /// Decode the leading UTF-8 character from the buffer without consuming.
    /// On invalid UTF-8, returns the Unicode replacement character with len 1.
    fn peek_char(&self) -> Option<(char, usize)> {
        if self.filled == 0 {
            return None;
        }
        let b0 = self.buf[0];
        let (expected_len, first_bits) = match b0 {
            0x00..=0x7F => return Some((b0 as char, 1)),
            0xC0..=0xDF => (2, (b0 & 0x1F) as u32),
            0xE0..=0xEF => (3, (b0 & 0x0F) as u32),
            0xF0..=0xF7 => (4, (b0 & 0x07) as u32),
            _ => return Some(('\u{FFFD}', 1)), // invalid lead byte
        };
        if expected_len > self.filled {
            // Not enough bytes buffered — treat as replacement.
            return Some(('\u{FFFD}', 1));
        }
        let mut codepoint = first_bits;
        for i in 1..expected_len {
            let cont = self.buf[i];
            if cont & 0xC0 != 0x80 {
                return Some(('\u{FFFD}', 1)); // broken continuation
            }
            codepoint = (codepoint << 6) | (cont & 0x3F) as u32;
        }
        match char::from_u32(codepoint) {
            Some(ch) => Some((ch, expected_len)),
            None => Some(('\u{FFFD}', 1)),
        }
    }

    /// Consume one full UTF-8 character, advancing the position by one
    /// character (regardless of its byte length).
    fn advance_char(&mut self) -> Option<char> {
        let (ch, len) = self.peek_char()?;
        self.last = self.pos();
        // Drop the character's bytes and refill.
        self.buf.copy_within(len.., 0);
        self.filled -= len;
        self.fill();

        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Lexer
// ═══════════════════════════════════════════════════════════════════

/// A streaming lexer for SQL source text.
///
/// Accepts any [`Read`] — files, sockets, pipes, `&[u8]`, `Cursor`, etc.
///
/// ```rust
/// use tokenizer::{Dialect, Lexer, TokenKind};
///
/// let lexer = Lexer::from_str("SELECT 1;", Dialect::Ansi);
/// let kinds: Vec<TokenKind> = lexer.map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Keyword,
///         TokenKind::Number,
///         TokenKind::Semicolon,
///         TokenKind::Eof,
///     ],
/// );
/// ```
pub struct Lexer<R: Read> {
    rb: ReadBuf<R>,
    dialect: Dialect,
    emitted_eof: bool,
}

impl<R: Read> Lexer<R> {
    /// Create a new lexer over the given readable stream.
    pub fn new(reader: R, dialect: Dialect) -> Self {
        Self {
            rb: ReadBuf::new(reader),
            dialect,
            emitted_eof: false,
        }
    }
}

/// Convenience: create a lexer directly from a `&str`.
impl<'a> Lexer<&'a [u8]> {
    pub fn from_str(source: &'a str, dialect: Dialect) -> Self {
        Self::new(source.as_bytes(), dialect)
    }
}

/// Tokenize an in-memory SQL string to completion.
pub fn tokenize(sql: &str, dialect: Dialect) -> Vec<Token> {
    Lexer::from_str(sql, dialect).collect()
}

impl<R: Read> Lexer<R> {
    /// Consume one character and append it to the token text.
    fn bump(&mut self, text: &mut String) {
        if let Some(ch) = self.rb.advance_char() {
            text.push(ch);
        }
    }

    /// Finalize a token whose last character has just been consumed.
    fn finish(&self, kind: TokenKind, text: String, start: Pos) -> Token {
        let end = self.rb.last_pos();
        Token {
            kind,
            text,
            line: end.line,
            col: end.column,
            start: start.offset,
            end: end.offset,
        }
    }

    // ───────────────────────────────────────────────────────────
    //  Whitespace
    // ───────────────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.rb.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.rb.advance_char();
                }
                _ => break,
            }
        }
    }

    // ───────────────────────────────────────────────────────────
    //  Comments:  -- line   # line (dialect)   /* block */
    // ───────────────────────────────────────────────────────────

    /// Lex a line comment. The prefix (`--` or `#`) is still unconsumed;
    /// the trailing newline is left in the stream.
    fn lex_line_comment(&mut self, start: Pos, prefix_len: usize) -> Token {
        let mut text = String::new();
        for _ in 0..prefix_len {
            self.bump(&mut text);
        }
        loop {
            match self.rb.peek() {
                Some(b'\n') | None => break,
                Some(_) => self.bump(&mut text),
            }
        }
        self.finish(TokenKind::Comment, text, start)
    }

    /// Lex a block comment (`/* ... */`), nesting only where the dialect
    /// allows it.
    fn lex_block_comment(&mut self, start: Pos) -> Token {
        let mut text = String::new();
        self.bump(&mut text); // `/`
        self.bump(&mut text); // `*`
        let mut depth: usize = 1;

        loop {
            match self.rb.peek() {
                None => {
                    // Unterminated comment: surface the remainder as an
                    // error token rather than failing the whole stream.
                    return self.finish(TokenKind::Error, text, start);
                }
                Some(b'*') if self.rb.peek_ahead(1) == Some(b'/') => {
                    self.bump(&mut text);
                    self.bump(&mut text);
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Some(b'/')
                    if self.rb.peek_ahead(1) == Some(b'*')
                        && self.dialect.nested_comments() =>
                {
                    self.bump(&mut text);
                    self.bump(&mut text);
                    depth += 1;
                }
                Some(_) => self.bump(&mut text),
            }
        }
        self.finish(TokenKind::Comment, text, start)
    }

    // ───────────────────────────────────────────────────────────
    //  Strings and quoted identifiers
    // ───────────────────────────────────────────────────────────

    /// Lex a single-quoted string literal. The doubled-quote escape
    /// (`''`) applies everywhere; backslash escapes only where the
    /// dialect says so. `text` keeps the raw lexeme, quotes included.
    fn lex_string(&mut self, start: Pos) -> Token {
        let mut text = String::new();
        self.bump(&mut text); // opening `'`
        loop {
            match self.rb.peek() {
                None => {
                    return self.finish(TokenKind::Error, text, start);
                }
                Some(b'\'') if self.rb.peek_ahead(1) == Some(b'\'') => {
                    self.bump(&mut text);
                    self.bump(&mut text);
                }
                Some(b'\'') => {
                    self.bump(&mut text);
                    break;
                }
                Some(b'\\') if self.dialect.backslash_escapes() => {
                    self.bump(&mut text);
                    if self.rb.peek().is_none() {
                        return self.finish(TokenKind::Error, text, start);
                    }
                    self.bump(&mut text);
                }
                Some(_) => self.bump(&mut text),
            }
        }
        self.finish(TokenKind::String, text, start)
    }

    /// Lex a quoted identifier closed by `close`, with the doubled-quote
    /// escape.
    fn lex_quoted_ident(&mut self, start: Pos, close: char) -> Token {
        let close_byte = close as u8;
        let mut text = String::new();
        self.bump(&mut text); // opening quote
        loop {
            match self.rb.peek() {
                None => {
                    return self.finish(TokenKind::Error, text, start);
                }
                Some(b) if b == close_byte => {
                    if self.rb.peek_ahead(1) == Some(close_byte) {
                        self.bump(&mut text);
                        self.bump(&mut text);
                    } else {
                        self.bump(&mut text);
                        break;
                    }
                }
                Some(_) => self.bump(&mut text),
            }
        }
        self.finish(TokenKind::QuotedIdent, text, start)
    }

    // ───────────────────────────────────────────────────────────
    //  Numbers
    // ───────────────────────────────────────────────────────────

    /// Lex a numeric literal: digits, optional fraction, optional
    /// exponent. A trailing `.` or `e` that is not followed by digits is
    /// left for the next token.
    fn lex_number(&mut self, start: Pos) -> Token {
        let mut text = String::new();
        while matches!(self.rb.peek(), Some(b) if b.is_ascii_digit()) {
            self.bump(&mut text);
        }
        if self.rb.peek() == Some(b'.')
            && matches!(self.rb.peek_ahead(1), Some(b) if b.is_ascii_digit())
        {
            self.bump(&mut text);
            while matches!(self.rb.peek(), Some(b) if b.is_ascii_digit()) {
                self.bump(&mut text);
            }
        }
        if matches!(self.rb.peek(), Some(b'e') | Some(b'E')) {
            let exp_digits = match self.rb.peek_ahead(1) {
                Some(b) if b.is_ascii_digit() => true,
                Some(b'+') | Some(b'-') => {
                    matches!(self.rb.peek_ahead(2), Some(b) if b.is_ascii_digit())
                }
                _ => false,
            };
            if exp_digits {
                self.bump(&mut text); // e
                if matches!(self.rb.peek(), Some(b'+') | Some(b'-')) {
                    self.bump(&mut text);
                }
                while matches!(self.rb.peek(), Some(b) if b.is_ascii_digit()) {
                    self.bump(&mut text);
                }
            }
        }
        self.finish(TokenKind::Number, text, start)
    }

    // ───────────────────────────────────────────────────────────
    //  Words
    // ───────────────────────────────────────────────────────────

    fn lex_word(&mut self, start: Pos) -> Token {
        let mut text = String::new();
        while matches!(self.rb.peek_char(), Some((c, _)) if is_word_continue(c))
        {
            self.bump(&mut text);
        }
        let upper = text.to_uppercase();
        let kind = if KEYWORDS.binary_search(&upper.as_str()).is_ok() {
            TokenKind::Keyword
        } else {
            TokenKind::Var
        };
        self.finish(kind, text, start)
    }

    // ───────────────────────────────────────────────────────────
    //  Punctuation and operators
    // ───────────────────────────────────────────────────────────

    fn lex_symbol(&mut self, start: Pos, c: char) -> Token {
        let mut text = String::new();
        let kind = match c {
            ';' => {
                self.bump(&mut text);
                TokenKind::Semicolon
            }
            ',' => {
                self.bump(&mut text);
                TokenKind::Comma
            }
            '(' => {
                self.bump(&mut text);
                TokenKind::LParen
            }
            ')' => {
                self.bump(&mut text);
                TokenKind::RParen
            }
            '.' => {
                self.bump(&mut text);
                TokenKind::Dot
            }
            '*' => {
                self.bump(&mut text);
                TokenKind::Star
            }
            '<' => {
                self.bump(&mut text);
                if matches!(self.rb.peek(), Some(b'=') | Some(b'>')) {
                    self.bump(&mut text);
                }
                TokenKind::Operator
            }
            '>' | '!' => {
                self.bump(&mut text);
                if self.rb.peek() == Some(b'=') {
                    self.bump(&mut text);
                }
                TokenKind::Operator
            }
            '|' => {
                self.bump(&mut text);
                if self.rb.peek() == Some(b'|') {
                    self.bump(&mut text);
                }
                TokenKind::Operator
            }
            ':' => {
                self.bump(&mut text);
                if self.rb.peek() == Some(b':') {
                    self.bump(&mut text);
                }
                TokenKind::Operator
            }
            '=' | '+' | '-' | '/' | '%' | '&' | '^' | '~' => {
                self.bump(&mut text);
                TokenKind::Operator
            }
            _ => {
                self.bump(&mut text);
                TokenKind::Error
            }
        };
        self.finish(kind, text, start)
    }

    // ───────────────────────────────────────────────────────────
    //  Dispatch
    // ───────────────────────────────────────────────────────────

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.rb.pos();
        let Some((c, _)) = self.rb.peek_char() else {
            return Token {
                kind: TokenKind::Eof,
                text: String::new(),
                line: start.line,
                col: start.column,
                start: start.offset,
                end: start.offset,
            };
        };
        match c {
            '-' if self.rb.peek_ahead(1) == Some(b'-') => {
                self.lex_line_comment(start, 2)
            }
            '#' if self.dialect.hash_comments() => {
                self.lex_line_comment(start, 1)
            }
            '/' if self.rb.peek_ahead(1) == Some(b'*') => {
                self.lex_block_comment(start)
            }
            '\'' => self.lex_string(start),
            q if self.dialect.is_ident_quote(q) => {
                self.lex_quoted_ident(start, q)
            }
            d if d.is_ascii_digit() => self.lex_number(start),
            w if is_word_start(w) => self.lex_word(start),
            other => self.lex_symbol(start, other),
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.emitted_eof {
            return None;
        }
        let tok = self.next_token();
        if tok.is_eof() {
            self.emitted_eof = true;
        }
        Some(tok)
    }
}

// ═══════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::from_str(src, Dialect::Ansi).collect()
    }

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokens(src).into_iter().map(|t| t.kind).collect()
    }

    fn texts(src: &str) -> Vec<String> {
        tokens(src).into_iter().map(|t| t.text).collect()
    }

    // ── Classification ────────────────────────────────────────

    #[test]
    fn lex_simple_statement() {
        assert_eq!(
            kinds("SELECT 1;"),
            vec![
                TokenKind::Keyword,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ],
        );
    }

    #[test]
    fn model_is_var_not_keyword() {
        let toks = tokens("MODEL (name foo);");
        assert_eq!(toks[0].kind, TokenKind::Var);
        assert_eq!(toks[0].text, "MODEL");
        // Same in lowercase and in every other dialect.
        let toks = tokenize("model (name foo);", Dialect::Postgres);
        assert_eq!(toks[0].kind, TokenKind::Var);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("select SeLeCt FROM"),
            vec![
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Eof,
            ],
        );
    }

    #[test]
    fn lex_punctuation() {
        assert_eq!(
            kinds("(a, b.*);"),
            vec![
                TokenKind::LParen,
                TokenKind::Var,
                TokenKind::Comma,
                TokenKind::Var,
                TokenKind::Dot,
                TokenKind::Star,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ],
        );
    }

    #[test]
    fn lex_compound_operators() {
        assert_eq!(
            texts("a <= b <> c || d :: e != f"),
            vec!["a", "<=", "b", "<>", "c", "||", "d", "::", "e", "!=", "f", ""],
        );
    }

    // ── Position metadata ─────────────────────────────────────

    #[test]
    fn word_metadata() {
        let toks = tokens("MODEL");
        let t = &toks[0];
        assert_eq!((t.line, t.col, t.start, t.end), (1, 5, 0, 4));
    }

    #[test]
    fn single_char_token_metadata() {
        let toks = tokens("a;");
        let semi = &toks[1];
        assert_eq!(semi.kind, TokenKind::Semicolon);
        assert_eq!((semi.line, semi.col, semi.start, semi.end), (1, 2, 1, 1));
        assert_eq!(semi.start, semi.end);
    }

    #[test]
    fn multiline_string_metadata() {
        // Offsets: a=0 b=1 \n=2 '=3 c=4 d=5 \n=6 e=7 f=8 '=9
        let toks = tokens("ab\n'cd\nef'");
        let s = &toks[1];
        assert_eq!(s.kind, TokenKind::String);
        assert_eq!(s.text, "'cd\nef'");
        assert_eq!((s.line, s.col, s.start, s.end), (3, 3, 3, 9));
    }

    #[test]
    fn token_length_matches_offsets() {
        for tok in tokens("MODEL (\n  name 'a\nb',\n  kind FULL\n);") {
            if tok.kind == TokenKind::Eof {
                continue;
            }
            assert_eq!(
                tok.end - tok.start + 1,
                tok.text.chars().count(),
                "bad offsets for {:?}",
                tok,
            );
        }
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let toks = tokens("é;");
        let semi = &toks[1];
        assert_eq!(semi.kind, TokenKind::Semicolon);
        assert_eq!((semi.start, semi.end, semi.col), (1, 1, 2));
    }

    #[test]
    fn eof_token_is_zero_width() {
        let toks = tokens("ab");
        let eof = toks.last().unwrap();
        assert!(eof.is_eof());
        assert_eq!((eof.start, eof.end, eof.line, eof.col), (2, 2, 1, 3));
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let toks = tokens("");
        assert_eq!(toks.len(), 1);
        assert_eq!((toks[0].start, toks[0].end), (0, 0));
        assert_eq!((toks[0].line, toks[0].col), (1, 1));
    }

    // ── Strings ───────────────────────────────────────────────

    #[test]
    fn lex_string_with_doubled_quote() {
        let toks = tokens("'a''b'");
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, "'a''b'");
    }

    #[test]
    fn unterminated_string_is_error() {
        let toks = tokens("'abc");
        assert_eq!(toks[0].kind, TokenKind::Error);
        assert_eq!(toks[0].text, "'abc");
    }

    #[test]
    fn backslash_escape_is_dialect_gated() {
        // MySQL: backslash escapes the quote, one string token.
        let toks = tokenize(r"'a\'b'", Dialect::MySql);
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, r"'a\'b'");
        // ANSI: the backslash is just a character, string closes early.
        let toks = tokenize(r"'a\'b'", Dialect::Ansi);
        assert_eq!(toks[0].kind, TokenKind::String);
        assert_eq!(toks[0].text, r"'a\'");
    }

    // ── Quoted identifiers ────────────────────────────────────

    #[test]
    fn lex_quoted_identifier() {
        let toks = tokens("\"my col\"");
        assert_eq!(toks[0].kind, TokenKind::QuotedIdent);
        assert_eq!(toks[0].text, "\"my col\"");
    }

    #[test]
    fn backtick_identifier_is_dialect_gated() {
        let toks = tokenize("`col`", Dialect::MySql);
        assert_eq!(toks[0].kind, TokenKind::QuotedIdent);
        // In ANSI a backtick is just an unrecognized character.
        let toks = tokenize("`col`", Dialect::Ansi);
        assert_eq!(toks[0].kind, TokenKind::Error);
    }

    // ── Comments ──────────────────────────────────────────────

    #[test]
    fn lex_line_comment() {
        let toks = tokens("-- hi\nx");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "-- hi");
        assert_eq!(toks[1].text, "x");
        assert_eq!(toks[1].line, 2);
    }

    #[test]
    fn hash_comment_is_dialect_gated() {
        let toks = tokenize("# hi", Dialect::MySql);
        assert_eq!(toks[0].kind, TokenKind::Comment);
        let toks = tokenize("# hi", Dialect::Ansi);
        assert_eq!(toks[0].kind, TokenKind::Error);
    }

    #[test]
    fn lex_block_comment() {
        let toks = tokens("/* a */x");
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "/* a */");
        assert_eq!(toks[1].text, "x");
    }

    #[test]
    fn block_comment_nesting_is_postgres_only() {
        let toks = tokenize("/* a /* b */ c */x", Dialect::Postgres);
        assert_eq!(toks[0].kind, TokenKind::Comment);
        assert_eq!(toks[0].text, "/* a /* b */ c */");
        assert_eq!(toks[1].text, "x");

        let toks = tokenize("/* a /* b */ c */x", Dialect::Ansi);
        assert_eq!(toks[0].text, "/* a /* b */");
        assert_eq!(toks[1].text, "c");
    }

    #[test]
    fn unterminated_block_comment_is_error() {
        let toks = tokens("/* oops");
        assert_eq!(toks[0].kind, TokenKind::Error);
    }

    // ── Numbers ───────────────────────────────────────────────

    #[test]
    fn lex_numbers() {
        assert_eq!(
            kinds("1 2.5 3e10 4.5e-2"),
            vec![
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Number,
                TokenKind::Eof,
            ],
        );
    }

    #[test]
    fn trailing_dot_is_not_part_of_number() {
        assert_eq!(
            kinds("1.x"),
            vec![
                TokenKind::Number,
                TokenKind::Dot,
                TokenKind::Var,
                TokenKind::Eof,
            ],
        );
    }
}
