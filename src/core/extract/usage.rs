use std::{fs, path::Path};

use anyhow::Result;

use super::CallPatterns;
use crate::core::{
    UsedKeySet,
    file_scanner::{ScanWarning, scan_files},
};

#[derive(Debug, Default)]
pub struct ScanUsagesResult {
    pub used_keys: UsedKeySet,
    /// Files (or directories) that could not be read.
    pub warnings: Vec<ScanWarning>,
    /// Number of source files whose contents were scanned.
    pub files_scanned: usize,
    /// Call sites skipped because their key is built at runtime.
    pub dynamic_call_count: usize,
}

/// Scan every `extension` file under `root` for lookup calls.
///
/// Unreadable files become warnings and are skipped. Only a missing or
/// invalid `root` fails the scan.
pub fn scan_usages(
    root: &Path,
    extension: &str,
    ignore_patterns: &[String],
    patterns: &CallPatterns,
) -> Result<ScanUsagesResult> {
    let scan = scan_files(root, extension, ignore_patterns)?;

    let mut result = ScanUsagesResult {
        warnings: scan.warnings,
        ..Default::default()
    };

    for file in &scan.files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                result.warnings.push(ScanWarning {
                    file_path: file.to_string_lossy().to_string(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let usages = patterns.extract(&content);
        result.used_keys.extend(usages.keys);
        result.dynamic_call_count += usages.dynamic_calls;
        result.files_scanned += 1;
    }

    Ok(result)
}
