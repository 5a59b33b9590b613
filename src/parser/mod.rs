//! Recursive-descent grammar driver over the character stream.
//!
//! The driver parses one entry at a time. A grammar error anywhere inside an
//! entry discards that entry's partial result and packages the failed region
//! as junk; parsing resumes at the next plausible entry start.

mod expression;
#[allow(clippy::module_inception)]
mod parser;
mod pattern;

pub use parser::{parse, ParseOptions, Parser};
