//! Rule implementations for textusage.
//!
//! Pure functions over the extraction results. Each takes only the inputs it
//! needs and returns its findings sorted for deterministic output.
//!
//! ## Module Structure
//!
//! - `unused`: Defined but unused keys
//! - `missing`: Used keys absent from the reference locale
//! - `usage`: Per-locale counts and percentages combining both rules

pub mod missing;
pub mod unused;
pub mod usage;

pub use usage::analyze_usage;
