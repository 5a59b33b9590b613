//! Unicode escape decoding for parsed string literals.
//!
//! String literals keep their raw escaped form in the AST. Consumers call
//! [`unescape_to_string`] (or [`unescape`] with their own writer) to turn
//! `\\`, `\"`, `\uXXXX`, and `\UXXXXXX` sequences into text. Malformed
//! escapes, truncated escapes at end of input, and code points outside the
//! Unicode scalar range all decode to U+FFFD.

use std::borrow::Cow;
use std::fmt;

const REPLACEMENT: char = '\u{FFFD}';

fn decode_code_point(hex: &str) -> char {
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT)
}

/// Writes the decoded form of `input` into `w`.
pub fn unescape<W>(w: &mut W, input: &str) -> fmt::Result
where
    W: fmt::Write,
{
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            w.write_char(ch)?;
            continue;
        }
        match chars.next() {
            Some('\\') => w.write_char('\\')?,
            Some('"') => w.write_char('"')?,
            Some(u @ ('u' | 'U')) => {
                let digits = if u == 'u' { 4 } else { 6 };
                let hex: String = chars.by_ref().take(digits).collect();
                let decoded = if hex.chars().count() == digits {
                    decode_code_point(&hex)
                } else {
                    REPLACEMENT
                };
                w.write_char(decoded)?;
            }
            _ => w.write_char(REPLACEMENT)?,
        }
    }
    Ok(())
}

/// Returns the decoded form of `input`, borrowing it when no escape occurs.
pub fn unescape_to_string(input: &str) -> Cow<'_, str> {
    if !input.contains('\\') {
        return Cow::Borrowed(input);
    }
    let mut decoded = String::with_capacity(input.len());
    unescape(&mut decoded, input).expect("writing to a String cannot fail");
    Cow::Owned(decoded)
}
