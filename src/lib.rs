//! Recoverable parser for the Fluent localization syntax.
//!
//! The parser turns UTF-8 FTL source into a typed [`ast::Resource`]. It never
//! fails as a whole: malformed entries are packaged as [`ast::Junk`] carrying
//! diagnostic annotations, and parsing resumes at the next plausible entry
//! start. Byte spans over the original source are attached when requested
//! through [`ParseOptions`].

pub mod ast;
pub mod error;
pub mod parser;
pub mod stream;
pub mod unicode;

mod json;

pub use ast::Resource;
pub use error::{ErrorKind, ParseError};
pub use parser::{parse, ParseOptions, Parser};
