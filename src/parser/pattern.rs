//! Pattern grammar: inline/block detection, indent tracking, dedentation.

use crate::ast::{Pattern, PatternElement, Placeable, Span, TextElement};
use crate::error::{ErrorKind, ParseError};
use crate::parser::parser::Parser;
use crate::stream::EOL;

/// Transient pattern-builder element.
///
/// `Indent` never escapes dedentation: it is folded into an adjacent text
/// element, promoted to a new one, or discarded.
enum PatternPiece {
    Text(TextElement),
    Placeable(Placeable),
    Indent {
        value: String,
        start: usize,
        end: usize,
    },
}

impl<'s> Parser<'s> {
    /// Parses the optional pattern after `=` or `]`.
    ///
    /// An inline pattern starts on the same physical line; a block pattern
    /// starts on a later line whose shape passes the value-continuation
    /// check. Returns `None` when neither form is present.
    pub(crate) fn maybe_get_pattern(&mut self) -> Result<Option<Pattern>, ParseError> {
        self.stream.peek_blank_inline();
        if self.stream.is_value_start() {
            self.stream.skip_to_peek();
            return self.get_pattern(false).map(Some);
        }

        self.stream.peek_blank_block();
        if self.stream.is_value_continuation() {
            self.stream.skip_to_peek();
            return self.get_pattern(true).map(Some);
        }

        Ok(None)
    }

    fn get_pattern(&mut self, is_block: bool) -> Result<Pattern, ParseError> {
        let pattern_start = self.stream.index();
        let mut elements = Vec::new();

        // The common indent is the minimum inline indent across all block
        // lines; it is stripped from every indent element at the end.
        let mut common_indent = usize::MAX;
        if is_block {
            let blank_start = self.stream.index();
            let first_indent = self.stream.skip_blank_inline();
            common_indent = first_indent.len();
            elements.push(PatternPiece::Indent {
                value: first_indent.to_string(),
                start: blank_start,
                end: self.stream.index(),
            });
        }

        while let Some(ch) = self.stream.current_char() {
            match ch {
                EOL => {
                    let blank_start = self.stream.index();
                    let blank_lines = self.stream.peek_blank_block();
                    if !self.stream.is_value_continuation() {
                        self.stream.reset_peek(0);
                        break;
                    }
                    self.stream.skip_to_peek();
                    let indent = self.stream.skip_blank_inline();
                    common_indent = common_indent.min(indent.len());
                    let mut value = blank_lines;
                    value.push_str(indent);
                    elements.push(PatternPiece::Indent {
                        value,
                        start: blank_start,
                        end: self.stream.index(),
                    });
                }
                '{' => {
                    let placeable = self.get_placeable()?;
                    elements.push(PatternPiece::Placeable(placeable));
                }
                '}' => {
                    return Err(ParseError::new(
                        ErrorKind::UnbalancedClosingBrace,
                        self.stream.index(),
                    ));
                }
                _ => {
                    let text = self.get_text_element();
                    elements.push(PatternPiece::Text(text));
                }
            }
        }

        let elements = self.dedent(elements, common_indent);
        Ok(Pattern {
            elements,
            span: self.span(pattern_start),
        })
    }

    fn get_text_element(&mut self) -> TextElement {
        let start = self.stream.index();
        let mut value = String::new();
        while let Some(ch) = self.stream.take_char(|ch| ch != '{' && ch != '}' && ch != EOL) {
            value.push(ch);
        }
        TextElement {
            value,
            span: self.span(start),
        }
    }

    /// Strips the common indent, merges adjacent text, and trims trailing
    /// whitespace off the final element.
    fn dedent(&self, elements: Vec<PatternPiece>, common_indent: usize) -> Vec<PatternElement> {
        let mut trimmed: Vec<PatternElement> = Vec::new();

        for element in elements {
            match element {
                PatternPiece::Placeable(placeable) => {
                    trimmed.push(PatternElement::Placeable(placeable));
                }
                PatternPiece::Text(text) => {
                    push_text(&mut trimmed, text);
                }
                PatternPiece::Indent {
                    mut value,
                    start,
                    end,
                } => {
                    let keep = value.len().saturating_sub(common_indent);
                    value.truncate(keep);
                    if value.is_empty() {
                        continue;
                    }
                    let text = TextElement {
                        value,
                        span: self.span_at(start, end),
                    };
                    push_text(&mut trimmed, text);
                }
            }
        }

        if let Some(PatternElement::TextElement(last)) = trimmed.last_mut() {
            let kept = last
                .value
                .trim_end_matches(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r'))
                .len();
            last.value.truncate(kept);
            if last.value.is_empty() {
                trimmed.pop();
            }
        }

        trimmed
    }
}

/// Appends a text element, merging it into a preceding one when adjacent.
fn push_text(trimmed: &mut Vec<PatternElement>, text: TextElement) {
    if let Some(PatternElement::TextElement(previous)) = trimmed.last_mut() {
        previous.value.push_str(&text.value);
        if let (Some(previous_span), Some(span)) = (&mut previous.span, text.span) {
            *previous_span = Span::new(previous_span.start, span.end);
        }
        return;
    }
    trimmed.push(PatternElement::TextElement(text));
}
