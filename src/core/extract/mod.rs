//! Usage extraction: find keys referenced by lookup calls in source files.
//!
//! - `call_patterns`: Regexes for the two lookup call shapes
//! - `usage`: Walk the source tree and union the keys of every file

pub mod call_patterns;
pub mod usage;

pub use call_patterns::{CallPatterns, FileUsages};
pub use usage::{ScanUsagesResult, scan_usages};
