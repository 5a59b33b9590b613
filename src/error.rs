//! Parse-error contracts with stable diagnostic codes.

use std::fmt;

/// Grammar error categories, each mapped to a stable `E`-code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// `E0002`: no entry starts at the current position.
    ExpectedEntry,
    /// `E0003`: a specific character was required.
    ExpectedToken(char),
    /// `E0004`: a character from the given class was required.
    ExpectedCharRange {
        /// Character class rendered as a range, e.g. `a-zA-Z`.
        range: String,
    },
    /// `E0005`: the message has neither a value nor attributes.
    ExpectedMessageField {
        /// Identifier of the offending message.
        entry_id: String,
    },
    /// `E0006`: the term has no value.
    ExpectedTermValue {
        /// Identifier of the offending term.
        entry_id: String,
    },
    /// `E0008`: a callee must be an upper-case identifier.
    ForbiddenCallee,
    /// `E0009`: a named-argument name must be a simple identifier.
    ForbiddenArgumentName,
    /// `E0010`: no variant is marked as default.
    MissingDefaultVariant,
    /// `E0011`: a select expression has no variants.
    MissingVariants,
    /// `E0012`: a pattern value was required.
    MissingValue,
    /// `E0013`: a variant key was required.
    MissingVariantKey,
    /// `E0014`: a string or number literal was required.
    ExpectedLiteral,
    /// `E0015`: more than one variant is marked as default.
    MultipleDefaultVariants,
    /// `E0016`: a message reference cannot be a selector.
    MessageReferenceAsSelector,
    /// `E0017`: a term reference cannot be a selector.
    TermReferenceAsSelector,
    /// `E0018`: a message attribute cannot be a selector.
    MessageAttributeAsSelector,
    /// `E0019`: a term attribute can only be used as a selector.
    TermAttributeAsPlaceable,
    /// `E0020`: a string literal reached end of line unterminated.
    UnterminatedStringLiteral,
    /// `E0021`: a positional argument follows a named argument.
    PositionalArgumentFollowsNamed,
    /// `E0022`: a named argument appears twice.
    DuplicatedNamedArgument(String),
    /// `E0025`: unknown escape sequence after `\`.
    UnknownEscapeSequence(String),
    /// `E0026`: a unicode escape is missing hex digits.
    InvalidUnicodeEscapeSequence(String),
    /// `E0027`: a closing brace appears outside a placeable.
    UnbalancedClosingBrace,
    /// `E0028`: an inline expression was required.
    ExpectedInlineExpression,
    /// `E0029`: a select expression selector must be simple.
    ExpectedSimpleExpressionAsSelector,
}

impl ErrorKind {
    /// Returns the stable diagnostic code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExpectedEntry => "E0002",
            Self::ExpectedToken(_) => "E0003",
            Self::ExpectedCharRange { .. } => "E0004",
            Self::ExpectedMessageField { .. } => "E0005",
            Self::ExpectedTermValue { .. } => "E0006",
            Self::ForbiddenCallee => "E0008",
            Self::ForbiddenArgumentName => "E0009",
            Self::MissingDefaultVariant => "E0010",
            Self::MissingVariants => "E0011",
            Self::MissingValue => "E0012",
            Self::MissingVariantKey => "E0013",
            Self::ExpectedLiteral => "E0014",
            Self::MultipleDefaultVariants => "E0015",
            Self::MessageReferenceAsSelector => "E0016",
            Self::TermReferenceAsSelector => "E0017",
            Self::MessageAttributeAsSelector => "E0018",
            Self::TermAttributeAsPlaceable => "E0019",
            Self::UnterminatedStringLiteral => "E0020",
            Self::PositionalArgumentFollowsNamed => "E0021",
            Self::DuplicatedNamedArgument(_) => "E0022",
            Self::UnknownEscapeSequence(_) => "E0025",
            Self::InvalidUnicodeEscapeSequence(_) => "E0026",
            Self::UnbalancedClosingBrace => "E0027",
            Self::ExpectedInlineExpression => "E0028",
            Self::ExpectedSimpleExpressionAsSelector => "E0029",
        }
    }

    /// Returns the code-specific arguments carried by this kind.
    pub fn arguments(&self) -> Vec<String> {
        match self {
            Self::ExpectedToken(ch) => vec![ch.to_string()],
            Self::ExpectedCharRange { range } => vec![range.clone()],
            Self::ExpectedMessageField { entry_id } | Self::ExpectedTermValue { entry_id } => {
                vec![entry_id.clone()]
            }
            Self::DuplicatedNamedArgument(name) => vec![name.clone()],
            Self::UnknownEscapeSequence(sequence)
            | Self::InvalidUnicodeEscapeSequence(sequence) => vec![sequence.clone()],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedEntry => write!(f, "Expected an entry start"),
            Self::ExpectedToken(ch) => write!(f, "Expected token: \"{ch}\""),
            Self::ExpectedCharRange { range } => {
                write!(f, "Expected a character from range: \"{range}\"")
            }
            Self::ExpectedMessageField { entry_id } => {
                write!(
                    f,
                    "Expected message \"{entry_id}\" to have a value or attributes"
                )
            }
            Self::ExpectedTermValue { entry_id } => {
                write!(f, "Expected term \"-{entry_id}\" to have a value")
            }
            Self::ForbiddenCallee => {
                write!(f, "The callee has to be an upper-case identifier or a term")
            }
            Self::ForbiddenArgumentName => {
                write!(f, "The argument name has to be a simple identifier")
            }
            Self::MissingDefaultVariant => {
                write!(f, "Expected one of the variants to be marked as default (*)")
            }
            Self::MissingVariants => {
                write!(f, "Expected at least one variant after \"->\"")
            }
            Self::MissingValue => write!(f, "Expected value"),
            Self::MissingVariantKey => write!(f, "Expected variant key"),
            Self::ExpectedLiteral => write!(f, "Expected literal"),
            Self::MultipleDefaultVariants => {
                write!(f, "Only one variant can be marked as default (*)")
            }
            Self::MessageReferenceAsSelector => {
                write!(f, "Message references cannot be used as selectors")
            }
            Self::TermReferenceAsSelector => {
                write!(f, "Terms cannot be used as selectors")
            }
            Self::MessageAttributeAsSelector => {
                write!(f, "Attributes of messages cannot be used as selectors")
            }
            Self::TermAttributeAsPlaceable => {
                write!(f, "Attributes of terms cannot be used as placeables")
            }
            Self::UnterminatedStringLiteral => write!(f, "Unterminated string expression"),
            Self::PositionalArgumentFollowsNamed => {
                write!(f, "Positional arguments must not follow named arguments")
            }
            Self::DuplicatedNamedArgument(name) => {
                write!(f, "The \"{name}\" argument appears twice")
            }
            Self::UnknownEscapeSequence(sequence) => {
                write!(f, "Unknown escape sequence: \\{sequence}")
            }
            Self::InvalidUnicodeEscapeSequence(sequence) => {
                write!(f, "Invalid Unicode escape sequence: {sequence}")
            }
            Self::UnbalancedClosingBrace => {
                write!(f, "Unbalanced closing brace in TextElement")
            }
            Self::ExpectedInlineExpression => write!(f, "Expected an inline expression"),
            Self::ExpectedSimpleExpressionAsSelector => {
                write!(f, "Expected simple expression as selector")
            }
        }
    }
}

/// Grammar error observed at a byte position.
///
/// Errors never escape [`crate::parser::parse`]; the entry boundary converts
/// them into junk annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error category with its arguments.
    pub kind: ErrorKind,
    /// Byte index at which the error was observed.
    pub pos: usize,
}

impl ParseError {
    /// Creates a parse error at the given byte position.
    pub fn new(kind: ErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    /// Returns the stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for ParseError {}
