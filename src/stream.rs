//! Dual-cursor character stream over FTL source.
//!
//! The stream owns a commit index (bytes consumed) and a peek offset
//! (lookahead distance from the commit index). The grammar speculatively
//! inspects upcoming blanks and newlines through the peek cursor to decide,
//! for example, whether an indented line continues a pattern, and commits
//! the peeked range only once the decision is made.
//!
//! CRLF is folded to LF at this level: a `\r\n` pair reads as one `\n` and
//! advances past both bytes, so no line-oriented rule ever sees `\r`.

use crate::error::{ErrorKind, ParseError};

/// The only end-of-line character visible above the stream.
pub const EOL: char = '\n';

/// Character stream with independent commit and peek cursors.
pub struct ParserStream<'s> {
    source: &'s str,
    index: usize,
    peek_offset: usize,
}

impl<'s> ParserStream<'s> {
    /// Creates a stream at the start of `source`.
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            index: 0,
            peek_offset: 0,
        }
    }

    /// Returns the commit index in bytes.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the peek offset in bytes past the commit index.
    pub fn peek_offset(&self) -> usize {
        self.peek_offset
    }

    /// Returns the source slice between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'s str {
        &self.source[start..end]
    }

    /// Returns the total source length in bytes.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        let rest = self.source.get(offset..)?;
        let mut chars = rest.chars();
        let ch = chars.next()?;
        if ch == '\r' && chars.next() == Some('\n') {
            return Some(EOL);
        }
        Some(ch)
    }

    /// Byte width of the logical character at `offset`: a CRLF pair counts
    /// as one character of width two.
    fn logical_len_at(&self, offset: usize) -> usize {
        match self.source.get(offset..) {
            Some(rest) if rest.starts_with("\r\n") => 2,
            Some(rest) => rest.chars().next().map_or(0, char::len_utf8),
            None => 0,
        }
    }

    /// Returns the character at the commit index, or `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.index)
    }

    /// Returns the character at the peek cursor, or `None` at end of input.
    pub fn current_peek(&self) -> Option<char> {
        self.char_at(self.index + self.peek_offset)
    }

    /// Advances the commit index by one logical character, resets the peek
    /// offset, and returns the new current character.
    pub fn next_char(&mut self) -> Option<char> {
        self.peek_offset = 0;
        self.index += self.logical_len_at(self.index);
        self.current_char()
    }

    /// Advances the peek cursor by one logical character and returns the new
    /// peeked character.
    pub fn peek_char(&mut self) -> Option<char> {
        self.peek_offset += self.logical_len_at(self.index + self.peek_offset);
        self.current_peek()
    }

    /// Sets the peek offset to `offset` bytes past the commit index.
    pub fn reset_peek(&mut self, offset: usize) {
        self.peek_offset = offset;
    }

    /// Commits the peeked range: the peek cursor position becomes the new
    /// commit index.
    pub fn skip_to_peek(&mut self) {
        self.index += self.peek_offset;
        self.peek_offset = 0;
    }

    // ------------------------------------------------------------------
    // Blank handling
    // ------------------------------------------------------------------

    /// Peeks over a run of spaces and returns it.
    pub fn peek_blank_inline(&mut self) -> &'s str {
        let start = self.index + self.peek_offset;
        while self.current_peek() == Some(' ') {
            self.peek_char();
        }
        &self.source[start..self.index + self.peek_offset]
    }

    /// Consumes a run of spaces and returns it.
    pub fn skip_blank_inline(&mut self) -> &'s str {
        let blank = self.peek_blank_inline();
        self.skip_to_peek();
        blank
    }

    /// Peeks over full blank lines, returning one LF per consumed line.
    ///
    /// A partial blank line at end of input counts as blank. On reaching a
    /// non-blank line the peek cursor rests at its first column.
    pub fn peek_blank_block(&mut self) -> String {
        let mut blank = String::new();
        loop {
            let line_start = self.peek_offset;
            self.peek_blank_inline();
            match self.current_peek() {
                Some(EOL) => {
                    blank.push(EOL);
                    self.peek_char();
                }
                None => return blank,
                Some(_) => {
                    self.reset_peek(line_start);
                    return blank;
                }
            }
        }
    }

    /// Consumes full blank lines, returning one LF per consumed line.
    pub fn skip_blank_block(&mut self) -> String {
        let blank = self.peek_blank_block();
        self.skip_to_peek();
        blank
    }

    /// Peeks over any mix of spaces and newlines.
    pub fn peek_blank(&mut self) {
        while matches!(self.current_peek(), Some(' ') | Some(EOL)) {
            self.peek_char();
        }
    }

    /// Consumes any mix of spaces and newlines.
    pub fn skip_blank(&mut self) {
        self.peek_blank();
        self.skip_to_peek();
    }

    // ------------------------------------------------------------------
    // Classification predicates
    // ------------------------------------------------------------------

    fn is_char_id_start(ch: Option<char>) -> bool {
        matches!(ch, Some(ch) if ch.is_ascii_alphabetic())
    }

    /// Returns `true` when the peeked character can start an identifier.
    pub fn is_identifier_start(&self) -> bool {
        Self::is_char_id_start(self.current_peek())
    }

    /// Returns `true` when the current position starts a number: a digit, or
    /// `-` followed by a digit. Leaves no peek state behind.
    pub fn is_number_start(&mut self) -> bool {
        let ch = if self.current_char() == Some('-') {
            self.peek_char()
        } else {
            self.current_char()
        };
        let is_digit = matches!(ch, Some(ch) if ch.is_ascii_digit());
        self.reset_peek(0);
        is_digit
    }

    /// Returns `true` when the peeked character can start a pattern value on
    /// the current line.
    pub fn is_value_start(&self) -> bool {
        !matches!(self.current_peek(), Some(EOL) | None)
    }

    fn is_char_pattern_continuation(ch: Option<char>) -> bool {
        // These characters at the start of an indented line close the
        // pattern instead of continuing it.
        match ch {
            Some(ch) => !matches!(ch, '}' | '.' | '[' | '*'),
            None => false,
        }
    }

    /// Decides whether the line under the peek cursor continues a pattern.
    ///
    /// True when the line opens a placeable, or carries inline indent
    /// followed by anything but a special line-start character. The peek
    /// cursor is restored to the first column on success.
    pub fn is_value_continuation(&mut self) -> bool {
        let column1 = self.peek_offset;
        self.peek_blank_inline();
        if self.current_peek() == Some('{') {
            self.reset_peek(column1);
            return true;
        }
        if self.peek_offset == column1 {
            return false;
        }
        if Self::is_char_pattern_continuation(self.current_peek()) {
            self.reset_peek(column1);
            return true;
        }
        false
    }

    /// From a commit position on an EOL, decides whether the next line is a
    /// comment of the given level (sigil count minus one), or of any level
    /// (1 to 3 sigils) when `level` is `None`.
    ///
    /// The sigils must be followed by a space or an EOL.
    pub fn is_next_line_comment(&mut self, level: Option<usize>) -> bool {
        if self.current_char() != Some(EOL) {
            return false;
        }
        let max_sigils = level.map_or(3, |level| level + 1);
        let mut sigils = 0;
        while sigils < max_sigils && self.peek_char() == Some('#') {
            sigils += 1;
        }
        let matched = match level {
            Some(level) => sigils == level + 1,
            None => sigils >= 1,
        };
        // The peek that broke the sigil run already rests on the follower;
        // after a full run the follower is still one peek away.
        let follower = if sigils == max_sigils {
            self.peek_char()
        } else {
            self.current_peek()
        };
        let result = matched && matches!(follower, Some(' ') | Some(EOL));
        self.reset_peek(0);
        result
    }

    /// Returns `true` when the peeked position starts a variant: an optional
    /// `*` followed by `[`. The peek cursor is restored either way.
    pub fn is_variant_start(&mut self) -> bool {
        let start_offset = self.peek_offset;
        if self.current_peek() == Some('*') {
            self.peek_char();
        }
        let is_variant = self.current_peek() == Some('[');
        self.reset_peek(start_offset);
        is_variant
    }

    /// Returns `true` when the peeked character starts an attribute.
    pub fn is_attribute_start(&self) -> bool {
        self.current_peek() == Some('.')
    }

    // ------------------------------------------------------------------
    // Consumption helpers
    // ------------------------------------------------------------------

    /// Consumes and returns the current character when it satisfies the
    /// predicate.
    pub fn take_char(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let ch = self.current_char()?;
        if pred(ch) {
            self.next_char();
            Some(ch)
        } else {
            None
        }
    }

    /// Consumes one ASCII letter, required at the start of an identifier.
    pub fn take_id_start(&mut self) -> Result<char, ParseError> {
        match self.current_char() {
            Some(ch) if ch.is_ascii_alphabetic() => {
                self.next_char();
                Ok(ch)
            }
            _ => Err(ParseError::new(
                ErrorKind::ExpectedCharRange {
                    range: "a-zA-Z".to_string(),
                },
                self.index,
            )),
        }
    }

    /// Consumes one identifier character: letter, digit, `_`, or `-`.
    pub fn take_id_char(&mut self) -> Option<char> {
        self.take_char(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-')
    }

    /// Consumes one ASCII digit.
    pub fn take_digit(&mut self) -> Option<char> {
        self.take_char(|ch| ch.is_ascii_digit())
    }

    /// Consumes one ASCII hex digit.
    pub fn take_hex_digit(&mut self) -> Option<char> {
        self.take_char(|ch| ch.is_ascii_hexdigit())
    }

    // ------------------------------------------------------------------
    // Expectations
    // ------------------------------------------------------------------

    /// Requires and consumes the given character.
    pub fn expect_char(&mut self, ch: char) -> Result<(), ParseError> {
        if self.current_char() == Some(ch) {
            self.next_char();
            return Ok(());
        }
        Err(ParseError::new(ErrorKind::ExpectedToken(ch), self.index))
    }

    /// Requires a line end: end of input is accepted, an LF is consumed.
    ///
    /// The error reports U+2424 as the expected token.
    pub fn expect_line_end(&mut self) -> Result<(), ParseError> {
        match self.current_char() {
            None => Ok(()),
            Some(EOL) => {
                self.next_char();
                Ok(())
            }
            Some(_) => Err(ParseError::new(
                ErrorKind::ExpectedToken('\u{2424}'),
                self.index,
            )),
        }
    }

    // ------------------------------------------------------------------
    // Error recovery
    // ------------------------------------------------------------------

    /// Moves the commit index to the start of the next plausible entry.
    ///
    /// Rewinds to the last newline when it lies after `junk_start` (only
    /// fully-skipped lines are crossed), then walks forward inspecting the
    /// first character of each line, stopping at an ASCII letter, `-`, `#`,
    /// or end of input.
    pub fn skip_to_next_entry_start(&mut self, junk_start: usize) {
        self.peek_offset = 0;
        let bytes = self.source.as_bytes();
        let search_end = (self.index + 1).min(bytes.len());
        if let Some(last_newline) = bytes[..search_end].iter().rposition(|&b| b == b'\n') {
            if junk_start < last_newline {
                self.index = last_newline;
            }
        }
        while let Some(ch) = self.current_char() {
            if ch != EOL {
                self.next_char();
                continue;
            }
            match self.next_char() {
                Some(first) if first.is_ascii_alphabetic() || first == '-' || first == '#' => break,
                _ => {}
            }
        }
    }
}
