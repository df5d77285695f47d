use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::WalkDir;

/// A source path that could not be read. The scan continues without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries the walker could not access.
    pub warnings: Vec<ScanWarning>,
}

/// Recursively collect files under `root` whose extension is `extension`.
///
/// Fails when `root` is not an existing directory.
pub fn scan_files(root: &Path, extension: &str, ignore_patterns: &[String]) -> Result<ScanResult> {
    if !root.is_dir() {
        bail!("Source root is not a directory: {:?}", root);
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            let pattern = Pattern::new(p)
                .with_context(|| format!("Invalid ignore pattern: \"{}\"", p))?;
            glob_patterns.push(pattern);
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.warnings.push(ScanWarning {
                    file_path: e
                        .path()
                        .map(|p| p.to_string_lossy().to_string())
                        .unwrap_or_else(|| root.to_string_lossy().to_string()),
                    error: e.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && has_extension(path, extension) {
            result.files.push(path.to_path_buf());
        }
    }

    Ok(result)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}
