//! Core data types shared by the extraction and analysis stages.
//!
//! ## Module Structure
//!
//! - `locale_keys`: Defined keys per locale (LocaleKeySet) and used keys (UsedKeySet)
//! - `analysis`: Per-locale analysis results (LocaleAnalysis)

pub mod analysis;
pub mod locale_keys;

pub use analysis::{AllLocaleAnalysis, LocaleAnalysis};
pub use locale_keys::{LocaleKeySet, UsedKeySet};
