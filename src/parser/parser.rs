//! Parser entrypoints, entry grammar, and junk packaging.

use crate::ast::{
    Annotation, Attribute, Comment, Entry, Identifier, Junk, Message, Resource, Span, Term,
};
use crate::error::{ErrorKind, ParseError};
use crate::stream::{ParserStream, EOL};

/// Parser behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseOptions {
    /// Attaches `[start, end)` byte spans to every AST node.
    pub with_spans: bool,
}

/// Parses `source` into a resource with default options.
///
/// The parse always succeeds: malformed entries become [`Junk`] with
/// diagnostic annotations instead of failing the whole resource.
pub fn parse(source: &str) -> Resource {
    Parser::new(source, ParseOptions::default()).parse()
}

/// Recursive-descent parser over one source buffer.
///
/// Options are fixed for the lifetime of the instance. Distinct parsers
/// share no state and may run on any thread.
pub struct Parser<'s> {
    pub(crate) stream: ParserStream<'s>,
    options: ParseOptions,
}

impl<'s> Parser<'s> {
    /// Creates a parser over `source` with explicit options.
    pub fn new(source: &'s str, options: ParseOptions) -> Self {
        Self {
            stream: ParserStream::new(source),
            options,
        }
    }

    /// Consumes the parser and produces the resource.
    pub fn parse(mut self) -> Resource {
        self.get_resource()
    }

    /// Builds a span from `start` to the current commit index, when tracking
    /// is enabled.
    pub(crate) fn span(&self, start: usize) -> Option<Span> {
        self.span_at(start, self.stream.index())
    }

    pub(crate) fn span_at(&self, start: usize, end: usize) -> Option<Span> {
        self.options.with_spans.then(|| Span::new(start, end))
    }

    fn get_resource(&mut self) -> Resource {
        let mut body = Vec::new();
        let mut last_comment: Option<Comment> = None;

        self.stream.skip_blank_block();
        while self.stream.current_char().is_some() {
            let mut entry = self.get_entry_or_junk();
            let blank_lines = self.stream.skip_blank_block();

            // A standalone comment with no blank line after it may belong to
            // the entry that follows; stash it and decide on the next turn.
            let attachable = matches!(entry, Entry::Comment(_))
                && blank_lines.is_empty()
                && self.stream.current_char().is_some();
            if attachable {
                if let Entry::Comment(comment) = entry {
                    last_comment = Some(comment);
                }
                continue;
            }

            if let Some(comment) = last_comment.take() {
                match &mut entry {
                    Entry::Message(message) => {
                        if let (Some(span), Some(comment_span)) = (&mut message.span, comment.span)
                        {
                            span.start = comment_span.start;
                        }
                        message.comment = Some(comment);
                    }
                    Entry::Term(term) => {
                        if let (Some(span), Some(comment_span)) = (&mut term.span, comment.span) {
                            span.start = comment_span.start;
                        }
                        term.comment = Some(comment);
                    }
                    _ => body.push(Entry::Comment(comment)),
                }
            }
            body.push(entry);
        }

        Resource {
            body,
            span: self.span_at(0, self.stream.index()),
        }
    }

    /// Parses one entry, or packages the failed region as junk.
    fn get_entry_or_junk(&mut self) -> Entry {
        let entry_start = self.stream.index();

        let parsed = self.get_entry().and_then(|entry| {
            self.stream.expect_line_end()?;
            Ok(entry)
        });
        let error = match parsed {
            Ok(entry) => return entry,
            Err(error) => error,
        };

        self.stream.skip_to_next_entry_start(entry_start);
        let next_entry_start = self.stream.index();
        // The annotation must stay inside the junk span.
        let error_index = error.pos.min(next_entry_start);

        let annotation = Annotation {
            code: error.code().to_string(),
            arguments: error.kind.arguments(),
            message: error.to_string(),
            span: Span::new(error_index, error_index),
        };
        Entry::Junk(Junk {
            content: self.stream.slice(entry_start, next_entry_start).to_string(),
            annotations: vec![annotation],
            span: self.span_at(entry_start, next_entry_start),
        })
    }

    fn get_entry(&mut self) -> Result<Entry, ParseError> {
        match self.stream.current_char() {
            Some('#') => self.get_comment(),
            Some('-') => self.get_term().map(Entry::Term),
            Some(ch) if ch.is_ascii_alphabetic() => self.get_message().map(Entry::Message),
            _ => Err(ParseError::new(
                ErrorKind::ExpectedEntry,
                self.stream.index(),
            )),
        }
    }

    /// Parses a comment entry. The sigil count on the first line fixes the
    /// level; further lines join only when they repeat it exactly.
    fn get_comment(&mut self) -> Result<Entry, ParseError> {
        let start = self.stream.index();
        let mut sigil_count: Option<usize> = None;
        let mut content = String::new();

        loop {
            let max_sigils = sigil_count.unwrap_or(3);
            let mut sigils = 0;
            while sigils < max_sigils && self.stream.current_char() == Some('#') {
                self.stream.next_char();
                sigils += 1;
            }
            let count = *sigil_count.get_or_insert(sigils);

            if self.stream.current_char() != Some(EOL) {
                self.stream.expect_char(' ')?;
                while let Some(ch) = self.stream.take_char(|ch| ch != EOL) {
                    content.push(ch);
                }
            }

            if self.stream.is_next_line_comment(Some(count - 1)) {
                content.push(EOL);
                self.stream.next_char();
            } else {
                break;
            }
        }

        let comment = Comment {
            content,
            span: self.span(start),
        };
        Ok(match sigil_count {
            Some(1) => Entry::Comment(comment),
            Some(2) => Entry::GroupComment(comment),
            _ => Entry::ResourceComment(comment),
        })
    }

    fn get_message(&mut self) -> Result<Message, ParseError> {
        let start = self.stream.index();
        let id = self.get_identifier()?;
        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let value = self.maybe_get_pattern()?;
        let attributes = self.get_attributes()?;

        if value.is_none() && attributes.is_empty() {
            return Err(ParseError::new(
                ErrorKind::ExpectedMessageField {
                    entry_id: id.name.clone(),
                },
                self.stream.index(),
            ));
        }

        Ok(Message {
            id,
            value,
            attributes,
            comment: None,
            span: self.span(start),
        })
    }

    fn get_term(&mut self) -> Result<Term, ParseError> {
        let start = self.stream.index();
        self.stream.expect_char('-')?;
        let id = self.get_identifier()?;
        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let Some(value) = self.maybe_get_pattern()? else {
            return Err(ParseError::new(
                ErrorKind::ExpectedTermValue {
                    entry_id: id.name.clone(),
                },
                self.stream.index(),
            ));
        };
        let attributes = self.get_attributes()?;

        Ok(Term {
            id,
            value,
            attributes,
            comment: None,
            span: self.span(start),
        })
    }

    fn get_attributes(&mut self) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = Vec::new();
        self.stream.peek_blank();
        while self.stream.is_attribute_start() {
            self.stream.skip_to_peek();
            attributes.push(self.get_attribute()?);
            self.stream.peek_blank();
        }
        Ok(attributes)
    }

    fn get_attribute(&mut self) -> Result<Attribute, ParseError> {
        let start = self.stream.index();
        self.stream.expect_char('.')?;
        let id = self.get_identifier()?;
        self.stream.skip_blank_inline();
        self.stream.expect_char('=')?;

        let Some(value) = self.maybe_get_pattern()? else {
            return Err(ParseError::new(
                ErrorKind::MissingValue,
                self.stream.index(),
            ));
        };

        Ok(Attribute {
            id,
            value,
            span: self.span(start),
        })
    }

    pub(crate) fn get_identifier(&mut self) -> Result<Identifier, ParseError> {
        let start = self.stream.index();
        let mut name = String::new();
        name.push(self.stream.take_id_start()?);
        while let Some(ch) = self.stream.take_id_char() {
            name.push(ch);
        }
        Ok(Identifier {
            name,
            span: self.span(start),
        })
    }
}
