//! Parsers for the definitions file.
//!
//! - `literal`: Lexer for quoted strings, braces and colons
//! - `definitions`: Locale block and key extraction on top of the lexer

pub mod definitions;
pub mod literal;
