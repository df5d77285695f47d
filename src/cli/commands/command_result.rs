use std::path::PathBuf;

use crate::{
    config::LocaleNames,
    core::{AllLocaleAnalysis, file_scanner::ScanWarning},
};

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(AnalyzeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub analysis: AllLocaleAnalysis,
    /// Display names used for the terminal summary.
    pub locale_names: LocaleNames,
    pub used_key_count: usize,
    pub files_scanned: usize,
    pub dynamic_call_count: usize,
    pub warnings: Vec<ScanWarning>,
    pub report_path: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running textusage commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Keys used in code but missing from the reference locale.
    pub missing_count: usize,
    /// If true, exit code 1 should be returned when missing_count > 0.
    pub exit_on_missing: bool,
}
