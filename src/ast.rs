//! AST contracts for parsed Fluent resources.
//!
//! Every node carries an optional half-open byte [`Span`] over the original
//! source. Spans are populated only when the parser runs with span tracking
//! enabled; nodes produced without it leave the slot empty.

/// Half-open `[start, end)` byte span over the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a span and normalizes offset ordering.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the span length in bytes.
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Returns `true` when the span contains no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Root node: an ordered sequence of entries parsed from one source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resource {
    /// Entries in source order, junk included.
    pub body: Vec<Entry>,
    /// Span covering the whole input, when tracked.
    pub span: Option<Span>,
}

/// Top-level entry family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Message definition.
    Message(Message),
    /// Term definition.
    Term(Term),
    /// Standalone comment (`#`).
    Comment(Comment),
    /// Group comment (`##`).
    GroupComment(Comment),
    /// Resource comment (`###`).
    ResourceComment(Comment),
    /// A contiguous region of source that failed to parse.
    Junk(Junk),
}

/// Message entry: `id = value` with optional attributes.
///
/// A message must carry a value or at least one attribute; the parser rejects
/// entries with neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message identifier.
    pub id: Identifier,
    /// Optional pattern value.
    pub value: Option<Pattern>,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Comment attached from the immediately preceding line.
    pub comment: Option<Comment>,
    /// Source span for this entry, when tracked.
    pub span: Option<Span>,
}

/// Term entry: `-id = value`. The value is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Term identifier, without the leading `-`.
    pub id: Identifier,
    /// Pattern value.
    pub value: Pattern,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Comment attached from the immediately preceding line.
    pub comment: Option<Comment>,
    /// Source span for this entry, when tracked.
    pub span: Option<Span>,
}

/// Comment content at any sigil level.
///
/// The level (`#`, `##`, `###`) is carried by the [`Entry`] variant; an
/// attached comment on a message or term is always level one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment text with the sigils and one leading space per line removed.
    pub content: String,
    /// Source span for this comment, when tracked.
    pub span: Option<Span>,
}

/// Skipped source preserved verbatim with attached diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Junk {
    /// The raw source slice that failed to parse.
    pub content: String,
    /// Diagnostics observed while parsing this region.
    pub annotations: Vec<Annotation>,
    /// Source span for this region, when tracked.
    pub span: Option<Span>,
}

/// One diagnostic attached to a [`Junk`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Stable diagnostic code (`E0002`..`E0029`).
    pub code: String,
    /// Code-specific arguments.
    pub arguments: Vec<String>,
    /// Human-readable message text.
    pub message: String,
    /// Zero-length span at the byte index where the error was observed.
    pub span: Span,
}

/// Attribute of a message or term: `.id = value`. The value is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute key.
    pub id: Identifier,
    /// Pattern value.
    pub value: Pattern,
    /// Source span for this attribute, when tracked.
    pub span: Option<Span>,
}

/// Value side of a message, term, attribute, or variant.
///
/// After dedentation no two adjacent elements are text, no text element is
/// empty, and the final text element carries no trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Alternating text and placeable elements.
    pub elements: Vec<PatternElement>,
    /// Source span for this pattern, when tracked.
    pub span: Option<Span>,
}

/// One element of a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternElement {
    /// Literal text.
    TextElement(TextElement),
    /// Embedded `{ ... }` expression.
    Placeable(Placeable),
}

/// Literal text inside a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextElement {
    /// Text content after dedentation.
    pub value: String,
    /// Source span for this element, when tracked.
    pub span: Option<Span>,
}

/// `{ ... }` expression inside a pattern or another expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeable {
    /// The wrapped expression.
    pub expression: Expression,
    /// Source span including the braces, when tracked.
    pub span: Option<Span>,
}

/// Expression family inside a placeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Selector with variants.
    Select(SelectExpression),
    /// Plain inline expression.
    Inline(InlineExpression),
}

/// Select expression: `selector -> variants`.
///
/// Exactly one variant is marked default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectExpression {
    /// Discriminating expression.
    pub selector: InlineExpression,
    /// Variants in source order.
    pub variants: Vec<Variant>,
    /// Source span for this expression, when tracked.
    pub span: Option<Span>,
}

/// Inline expression family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineExpression {
    /// `"..."` literal with escapes still encoded.
    StringLiteral(StringLiteral),
    /// Numeric literal preserved verbatim.
    NumberLiteral(NumberLiteral),
    /// `$id` variable reference.
    VariableReference(VariableReference),
    /// `id` or `id.attribute` message reference.
    MessageReference(MessageReference),
    /// `-id` term reference with optional attribute and arguments.
    TermReference(TermReference),
    /// `ID(...)` function call.
    FunctionReference(FunctionReference),
    /// Nested placeable.
    Placeable(Box<Placeable>),
}

/// String literal. The value retains its raw escaped form; use
/// [`crate::unicode::unescape_to_string`] to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Raw value between the quotes, escapes included.
    pub value: String,
    /// Source span including the quotes, when tracked.
    pub span: Option<Span>,
}

/// Number literal preserved verbatim as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    /// Literal text: optional `-`, digits, optional `.` and digits.
    pub value: String,
    /// Source span for this literal, when tracked.
    pub span: Option<Span>,
}

/// `$id` reference to an external variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableReference {
    /// Variable identifier, without the `$`.
    pub id: Identifier,
    /// Source span including the `$`, when tracked.
    pub span: Option<Span>,
}

/// Reference to a message or one of its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReference {
    /// Message identifier.
    pub id: Identifier,
    /// Optional attribute accessor.
    pub attribute: Option<Identifier>,
    /// Source span for this reference, when tracked.
    pub span: Option<Span>,
}

/// Reference to a term, optionally parameterized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermReference {
    /// Term identifier, without the leading `-`.
    pub id: Identifier,
    /// Optional attribute accessor.
    pub attribute: Option<Identifier>,
    /// Optional call arguments.
    pub arguments: Option<CallArguments>,
    /// Source span including the `-`, when tracked.
    pub span: Option<Span>,
}

/// Call to a built-in function. The identifier is upper-case by grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReference {
    /// Function identifier.
    pub id: Identifier,
    /// Call arguments.
    pub arguments: CallArguments,
    /// Source span for this call, when tracked.
    pub span: Option<Span>,
}

/// Argument list of a function or term call.
///
/// All positional arguments precede all named ones, and named-argument names
/// are unique; the parser rejects violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArguments {
    /// Positional arguments in source order.
    pub positional: Vec<InlineExpression>,
    /// Named arguments in source order.
    pub named: Vec<NamedArgument>,
    /// Source span including the parentheses, when tracked.
    pub span: Option<Span>,
}

/// `name: literal` argument inside a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArgument {
    /// Argument name.
    pub name: Identifier,
    /// Literal argument value.
    pub value: Literal,
    /// Source span for this argument, when tracked.
    pub span: Option<Span>,
}

/// Literal value family, used for named-argument values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// String literal.
    String(StringLiteral),
    /// Number literal.
    Number(NumberLiteral),
}

/// One branch of a select expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Branch key.
    pub key: VariantKey,
    /// Pattern value.
    pub value: Pattern,
    /// Whether this variant is the `*` default.
    pub default: bool,
    /// Source span for this variant, when tracked.
    pub span: Option<Span>,
}

/// Key of a [`Variant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKey {
    /// Symbolic key.
    Identifier(Identifier),
    /// Numeric key.
    NumberLiteral(NumberLiteral),
}

/// Identifier matching `[A-Za-z][A-Za-z0-9_-]*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Identifier text.
    pub name: String,
    /// Source span for this identifier, when tracked.
    pub span: Option<Span>,
}
