//! textusage - translation key usage checker for Flutter projects
//!
//! textusage is a CLI tool and library that cross-references the keys defined
//! in a Dart `TextProvider` map literal against `getText('key')` and
//! `getTextWithParams('key', ...)` call sites, reporting unused keys per
//! locale and keys missing from the reference locale.
//!
//! Keys built at runtime (concatenation, `$` interpolation) cannot be seen
//! by a static scan and are not reported.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction of defined and used keys
//! - `report`: Markdown report rendering and writing
//! - `rules`: Unused/missing key detection and per-locale analysis
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod rules;
pub mod utils;
