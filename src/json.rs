//! Stable JSON form of the AST.
//!
//! Every node serializes as an object whose first field is its `type` tag,
//! followed by the node's own fields in declared order. The `span` field is
//! present only on nodes that carry one, as `{"type": "Span", start, end}`.
//! Optional child slots (a message value, a reference attribute) serialize
//! as `null` when absent.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ast::{
    Annotation, Attribute, CallArguments, Comment, Entry, Expression, FunctionReference,
    Identifier, InlineExpression, Junk, Literal, Message, MessageReference, NamedArgument,
    NumberLiteral, Pattern, PatternElement, Placeable, Resource, SelectExpression, Span,
    StringLiteral, Term, TermReference, TextElement, Variant, VariableReference, VariantKey,
};

fn count_span(span: &Option<Span>) -> usize {
    usize::from(span.is_some())
}

fn serialize_span<S>(state: &mut S, span: &Option<Span>) -> Result<(), S::Error>
where
    S: SerializeStruct,
{
    if let Some(span) = span {
        state.serialize_field("span", span)?;
    }
    Ok(())
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Span", 3)?;
        state.serialize_field("type", "Span")?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Resource", 2 + count_span(&self.span))?;
        state.serialize_field("type", "Resource")?;
        state.serialize_field("body", &self.body)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(message) => message.serialize(serializer),
            Self::Term(term) => term.serialize(serializer),
            Self::Comment(comment) => serialize_comment(comment, "Comment", serializer),
            Self::GroupComment(comment) => serialize_comment(comment, "GroupComment", serializer),
            Self::ResourceComment(comment) => {
                serialize_comment(comment, "ResourceComment", serializer)
            }
            Self::Junk(junk) => junk.serialize(serializer),
        }
    }
}

fn serialize_comment<S: Serializer>(
    comment: &Comment,
    tag: &'static str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct(tag, 2 + count_span(&comment.span))?;
    state.serialize_field("type", tag)?;
    state.serialize_field("content", &comment.content)?;
    serialize_span(&mut state, &comment.span)?;
    state.end()
}

impl Serialize for Comment {
    // An attached comment is always a plain level-one comment.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_comment(self, "Comment", serializer)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Message", 5 + count_span(&self.span))?;
        state.serialize_field("type", "Message")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("attributes", &self.attributes)?;
        state.serialize_field("comment", &self.comment)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Term", 5 + count_span(&self.span))?;
        state.serialize_field("type", "Term")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("attributes", &self.attributes)?;
        state.serialize_field("comment", &self.comment)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Junk {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Junk", 3 + count_span(&self.span))?;
        state.serialize_field("type", "Junk")?;
        state.serialize_field("annotations", &self.annotations)?;
        state.serialize_field("content", &self.content)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Annotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Annotation", 5)?;
        state.serialize_field("type", "Annotation")?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("arguments", &self.arguments)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("span", &self.span)?;
        state.end()
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Attribute", 3 + count_span(&self.span))?;
        state.serialize_field("type", "Attribute")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("value", &self.value)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Identifier", 2 + count_span(&self.span))?;
        state.serialize_field("type", "Identifier")?;
        state.serialize_field("name", &self.name)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pattern", 2 + count_span(&self.span))?;
        state.serialize_field("type", "Pattern")?;
        state.serialize_field("elements", &self.elements)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for PatternElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::TextElement(text) => text.serialize(serializer),
            Self::Placeable(placeable) => placeable.serialize(serializer),
        }
    }
}

impl Serialize for TextElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TextElement", 2 + count_span(&self.span))?;
        state.serialize_field("type", "TextElement")?;
        state.serialize_field("value", &self.value)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Placeable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Placeable", 2 + count_span(&self.span))?;
        state.serialize_field("type", "Placeable")?;
        state.serialize_field("expression", &self.expression)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Select(select) => select.serialize(serializer),
            Self::Inline(inline) => inline.serialize(serializer),
        }
    }
}

impl Serialize for InlineExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::StringLiteral(literal) => literal.serialize(serializer),
            Self::NumberLiteral(literal) => literal.serialize(serializer),
            Self::VariableReference(reference) => reference.serialize(serializer),
            Self::MessageReference(reference) => reference.serialize(serializer),
            Self::TermReference(reference) => reference.serialize(serializer),
            Self::FunctionReference(reference) => reference.serialize(serializer),
            Self::Placeable(placeable) => placeable.serialize(serializer),
        }
    }
}

impl Serialize for StringLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StringLiteral", 2 + count_span(&self.span))?;
        state.serialize_field("type", "StringLiteral")?;
        state.serialize_field("value", &self.value)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for NumberLiteral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NumberLiteral", 2 + count_span(&self.span))?;
        state.serialize_field("type", "NumberLiteral")?;
        state.serialize_field("value", &self.value)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for VariableReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state =
            serializer.serialize_struct("VariableReference", 2 + count_span(&self.span))?;
        state.serialize_field("type", "VariableReference")?;
        state.serialize_field("id", &self.id)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for MessageReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state =
            serializer.serialize_struct("MessageReference", 3 + count_span(&self.span))?;
        state.serialize_field("type", "MessageReference")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("attribute", &self.attribute)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for TermReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TermReference", 4 + count_span(&self.span))?;
        state.serialize_field("type", "TermReference")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("attribute", &self.attribute)?;
        state.serialize_field("arguments", &self.arguments)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for FunctionReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state =
            serializer.serialize_struct("FunctionReference", 3 + count_span(&self.span))?;
        state.serialize_field("type", "FunctionReference")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("arguments", &self.arguments)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for SelectExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state =
            serializer.serialize_struct("SelectExpression", 3 + count_span(&self.span))?;
        state.serialize_field("type", "SelectExpression")?;
        state.serialize_field("selector", &self.selector)?;
        state.serialize_field("variants", &self.variants)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for CallArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CallArguments", 3 + count_span(&self.span))?;
        state.serialize_field("type", "CallArguments")?;
        state.serialize_field("positional", &self.positional)?;
        state.serialize_field("named", &self.named)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for NamedArgument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NamedArgument", 3 + count_span(&self.span))?;
        state.serialize_field("type", "NamedArgument")?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("value", &self.value)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(literal) => literal.serialize(serializer),
            Self::Number(literal) => literal.serialize(serializer),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Variant", 4 + count_span(&self.span))?;
        state.serialize_field("type", "Variant")?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("default", &self.default)?;
        serialize_span(&mut state, &self.span)?;
        state.end()
    }
}

impl Serialize for VariantKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Identifier(identifier) => identifier.serialize(serializer),
            Self::NumberLiteral(literal) => literal.serialize(serializer),
        }
    }
}
