//! Expression grammar: placeables, selectors, references, call arguments,
//! variants, and literals.

use std::collections::HashSet;

use crate::ast::{
    CallArguments, Expression, FunctionReference, InlineExpression, Literal, MessageReference,
    NamedArgument, NumberLiteral, Placeable, SelectExpression, StringLiteral, TermReference,
    VariableReference, Variant, VariantKey,
};
use crate::error::{ErrorKind, ParseError};
use crate::parser::parser::Parser;
use crate::stream::EOL;

/// One parsed call argument, not yet sorted into its list.
enum CallArgument {
    Positional(InlineExpression),
    Named(NamedArgument),
}

/// Returns `true` when `name` is a valid function callee: an upper-case
/// identifier of the form `[A-Z][A-Z0-9_-]*`.
fn is_callee(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_' || ch == '-')
        }
        _ => false,
    }
}

impl<'s> Parser<'s> {
    pub(crate) fn get_placeable(&mut self) -> Result<Placeable, ParseError> {
        let start = self.stream.index();
        self.stream.expect_char('{')?;
        self.stream.skip_blank();
        let expression = self.get_expression()?;
        self.stream.expect_char('}')?;
        Ok(Placeable {
            expression,
            span: self.span(start),
        })
    }

    /// Parses the expression inside a placeable: an inline expression, or a
    /// select expression when `->` follows the candidate selector.
    fn get_expression(&mut self) -> Result<Expression, ParseError> {
        let start = self.stream.index();
        let selector = self.get_inline_expression()?;
        self.stream.skip_blank();

        if self.stream.current_char() == Some('-') {
            if self.stream.peek_char() != Some('>') {
                self.stream.reset_peek(0);
                return Ok(Expression::Inline(selector));
            }

            match &selector {
                InlineExpression::MessageReference(reference) => {
                    let kind = if reference.attribute.is_none() {
                        ErrorKind::MessageReferenceAsSelector
                    } else {
                        ErrorKind::MessageAttributeAsSelector
                    };
                    return Err(ParseError::new(kind, self.stream.index()));
                }
                InlineExpression::TermReference(reference) if reference.attribute.is_none() => {
                    return Err(ParseError::new(
                        ErrorKind::TermReferenceAsSelector,
                        self.stream.index(),
                    ));
                }
                InlineExpression::Placeable(_) => {
                    return Err(ParseError::new(
                        ErrorKind::ExpectedSimpleExpressionAsSelector,
                        self.stream.index(),
                    ));
                }
                _ => {}
            }

            self.stream.next_char();
            self.stream.next_char();
            self.stream.skip_blank_inline();
            self.stream.expect_line_end()?;

            let variants = self.get_variants()?;
            return Ok(Expression::Select(SelectExpression {
                selector,
                variants,
                span: self.span(start),
            }));
        }

        if let InlineExpression::TermReference(reference) = &selector {
            if reference.attribute.is_some() {
                return Err(ParseError::new(
                    ErrorKind::TermAttributeAsPlaceable,
                    self.stream.index(),
                ));
            }
        }

        Ok(Expression::Inline(selector))
    }

    fn get_inline_expression(&mut self) -> Result<InlineExpression, ParseError> {
        let start = self.stream.index();

        if self.stream.current_char() == Some('{') {
            let placeable = self.get_placeable()?;
            return Ok(InlineExpression::Placeable(Box::new(placeable)));
        }

        if self.stream.is_number_start() {
            return self.get_number().map(InlineExpression::NumberLiteral);
        }

        if self.stream.current_char() == Some('"') {
            return self.get_string().map(InlineExpression::StringLiteral);
        }

        if self.stream.current_char() == Some('$') {
            self.stream.next_char();
            let id = self.get_identifier()?;
            return Ok(InlineExpression::VariableReference(VariableReference {
                id,
                span: self.span(start),
            }));
        }

        if self.stream.current_char() == Some('-') {
            self.stream.next_char();
            let id = self.get_identifier()?;

            let mut attribute = None;
            if self.stream.current_char() == Some('.') {
                self.stream.next_char();
                attribute = Some(self.get_identifier()?);
            }

            let mut arguments = None;
            self.stream.peek_blank();
            if self.stream.current_peek() == Some('(') {
                self.stream.skip_to_peek();
                arguments = Some(self.get_call_arguments()?);
            }

            return Ok(InlineExpression::TermReference(TermReference {
                id,
                attribute,
                arguments,
                span: self.span(start),
            }));
        }

        if self.stream.is_identifier_start() {
            let id = self.get_identifier()?;
            self.stream.peek_blank();

            if self.stream.current_peek() == Some('(') {
                if !is_callee(&id.name) {
                    return Err(ParseError::new(
                        ErrorKind::ForbiddenCallee,
                        self.stream.index(),
                    ));
                }
                self.stream.skip_to_peek();
                let arguments = self.get_call_arguments()?;
                return Ok(InlineExpression::FunctionReference(FunctionReference {
                    id,
                    arguments,
                    span: self.span(start),
                }));
            }

            let mut attribute = None;
            if self.stream.current_char() == Some('.') {
                self.stream.next_char();
                attribute = Some(self.get_identifier()?);
            }
            return Ok(InlineExpression::MessageReference(MessageReference {
                id,
                attribute,
                span: self.span(start),
            }));
        }

        Err(ParseError::new(
            ErrorKind::ExpectedInlineExpression,
            self.stream.index(),
        ))
    }

    fn get_call_arguments(&mut self) -> Result<CallArguments, ParseError> {
        let start = self.stream.index();
        let mut positional = Vec::new();
        let mut named = Vec::new();
        let mut argument_names: HashSet<String> = HashSet::new();

        self.stream.expect_char('(')?;
        self.stream.skip_blank();

        loop {
            if self.stream.current_char() == Some(')') {
                break;
            }

            match self.get_call_argument()? {
                CallArgument::Named(argument) => {
                    if !argument_names.insert(argument.name.name.clone()) {
                        return Err(ParseError::new(
                            ErrorKind::DuplicatedNamedArgument(argument.name.name.clone()),
                            self.stream.index(),
                        ));
                    }
                    named.push(argument);
                }
                CallArgument::Positional(expression) => {
                    if !named.is_empty() {
                        return Err(ParseError::new(
                            ErrorKind::PositionalArgumentFollowsNamed,
                            self.stream.index(),
                        ));
                    }
                    positional.push(expression);
                }
            }

            self.stream.skip_blank();
            if self.stream.current_char() == Some(',') {
                self.stream.next_char();
                self.stream.skip_blank();
            } else {
                break;
            }
        }

        self.stream.expect_char(')')?;
        Ok(CallArguments {
            positional,
            named,
            span: self.span(start),
        })
    }

    fn get_call_argument(&mut self) -> Result<CallArgument, ParseError> {
        let start = self.stream.index();
        let expression = self.get_inline_expression()?;
        self.stream.skip_blank();

        if self.stream.current_char() != Some(':') {
            return Ok(CallArgument::Positional(expression));
        }

        if let InlineExpression::MessageReference(reference) = expression {
            if reference.attribute.is_none() {
                self.stream.next_char();
                self.stream.skip_blank();
                let value = self.get_literal()?;
                return Ok(CallArgument::Named(NamedArgument {
                    name: reference.id,
                    value,
                    span: self.span(start),
                }));
            }
        }

        Err(ParseError::new(
            ErrorKind::ForbiddenArgumentName,
            self.stream.index(),
        ))
    }

    fn get_literal(&mut self) -> Result<Literal, ParseError> {
        if self.stream.is_number_start() {
            return self.get_number().map(Literal::Number);
        }
        if self.stream.current_char() == Some('"') {
            return self.get_string().map(Literal::String);
        }
        Err(ParseError::new(
            ErrorKind::ExpectedLiteral,
            self.stream.index(),
        ))
    }

    fn get_variants(&mut self) -> Result<Vec<Variant>, ParseError> {
        let mut variants = Vec::new();
        let mut has_default = false;

        self.stream.skip_blank();
        while self.stream.is_variant_start() {
            let variant = self.get_variant(has_default)?;
            has_default = has_default || variant.default;
            variants.push(variant);
            self.stream.expect_line_end()?;
            self.stream.skip_blank();
        }

        if variants.is_empty() {
            return Err(ParseError::new(
                ErrorKind::MissingVariants,
                self.stream.index(),
            ));
        }
        if !has_default {
            return Err(ParseError::new(
                ErrorKind::MissingDefaultVariant,
                self.stream.index(),
            ));
        }
        Ok(variants)
    }

    fn get_variant(&mut self, has_default: bool) -> Result<Variant, ParseError> {
        let start = self.stream.index();
        let mut default = false;

        if self.stream.current_char() == Some('*') {
            if has_default {
                return Err(ParseError::new(
                    ErrorKind::MultipleDefaultVariants,
                    self.stream.index(),
                ));
            }
            self.stream.next_char();
            default = true;
        }

        self.stream.expect_char('[')?;
        self.stream.skip_blank();
        let key = self.get_variant_key()?;
        self.stream.skip_blank();
        self.stream.expect_char(']')?;

        let Some(value) = self.maybe_get_pattern()? else {
            return Err(ParseError::new(
                ErrorKind::MissingValue,
                self.stream.index(),
            ));
        };

        Ok(Variant {
            key,
            value,
            default,
            span: self.span(start),
        })
    }

    fn get_variant_key(&mut self) -> Result<VariantKey, ParseError> {
        match self.stream.current_char() {
            None => Err(ParseError::new(
                ErrorKind::MissingVariantKey,
                self.stream.index(),
            )),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => {
                self.get_number().map(VariantKey::NumberLiteral)
            }
            Some(_) => self.get_identifier().map(VariantKey::Identifier),
        }
    }

    fn get_number(&mut self) -> Result<NumberLiteral, ParseError> {
        let start = self.stream.index();
        let mut value = String::new();

        if self.stream.current_char() == Some('-') {
            self.stream.next_char();
            value.push('-');
        }
        self.get_digits(&mut value)?;
        if self.stream.current_char() == Some('.') {
            self.stream.next_char();
            value.push('.');
            self.get_digits(&mut value)?;
        }

        Ok(NumberLiteral {
            value,
            span: self.span(start),
        })
    }

    fn get_digits(&mut self, buffer: &mut String) -> Result<(), ParseError> {
        let mut taken = 0;
        while let Some(ch) = self.stream.take_digit() {
            buffer.push(ch);
            taken += 1;
        }
        if taken == 0 {
            return Err(ParseError::new(
                ErrorKind::ExpectedCharRange {
                    range: "0-9".to_string(),
                },
                self.stream.index(),
            ));
        }
        Ok(())
    }

    /// Parses a string literal, capturing escape sequences verbatim into the
    /// value rather than decoding them.
    fn get_string(&mut self) -> Result<StringLiteral, ParseError> {
        let start = self.stream.index();
        self.stream.expect_char('"')?;

        let mut value = String::new();
        while let Some(ch) = self.stream.take_char(|ch| ch != '"' && ch != EOL) {
            if ch == '\\' {
                self.get_escape_sequence(&mut value)?;
            } else {
                value.push(ch);
            }
        }

        if self.stream.current_char() == Some(EOL) {
            return Err(ParseError::new(
                ErrorKind::UnterminatedStringLiteral,
                self.stream.index(),
            ));
        }
        self.stream.expect_char('"')?;

        Ok(StringLiteral {
            value,
            span: self.span(start),
        })
    }

    fn get_escape_sequence(&mut self, buffer: &mut String) -> Result<(), ParseError> {
        match self.stream.current_char() {
            Some(next @ ('\\' | '"')) => {
                self.stream.next_char();
                buffer.push('\\');
                buffer.push(next);
                Ok(())
            }
            Some('u') => self.get_unicode_escape_sequence('u', 4, buffer),
            Some('U') => self.get_unicode_escape_sequence('U', 6, buffer),
            other => Err(ParseError::new(
                ErrorKind::UnknownEscapeSequence(other.map(String::from).unwrap_or_default()),
                self.stream.index(),
            )),
        }
    }

    fn get_unicode_escape_sequence(
        &mut self,
        sigil: char,
        digits: usize,
        buffer: &mut String,
    ) -> Result<(), ParseError> {
        self.stream.expect_char(sigil)?;

        let mut sequence = String::with_capacity(digits);
        for _ in 0..digits {
            match self.stream.take_hex_digit() {
                Some(ch) => sequence.push(ch),
                None => {
                    let mut found = format!("\\{sigil}{sequence}");
                    if let Some(ch) = self.stream.current_char() {
                        found.push(ch);
                    }
                    return Err(ParseError::new(
                        ErrorKind::InvalidUnicodeEscapeSequence(found),
                        self.stream.index(),
                    ));
                }
            }
        }

        buffer.push('\\');
        buffer.push(sigil);
        buffer.push_str(&sequence);
        Ok(())
    }
}
