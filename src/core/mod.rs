//! Core analysis engine.
//!
//! The pipeline has two independent extraction passes feeding the rules:
//!
//! 1. **Definitions** (`parsers`) → `LocaleKeySet`
//! 2. **Usages** (`extract`, `file_scanner`) → `UsedKeySet`
//! 3. **Rules** (`crate::rules`) → `AllLocaleAnalysis`
//!
//! ## Module Structure
//!
//! - `context`: Merged configuration and resolved paths for a run
//! - `data`: LocaleKeySet, UsedKeySet, LocaleAnalysis
//! - `extract`: Lookup call extraction from source files
//! - `file_scanner`: Source tree walking
//! - `parsers`: Definitions file lexer and parser

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;

pub use context::AnalysisContext;
pub use data::*;
