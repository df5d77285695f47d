use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
};

/// Settings for one analysis run, with every path resolved.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--reference-locale en`)
/// 2. `.textusagerc.json` config file
/// 3. Built-in defaults
///
/// Relative paths resolve against the project root (`--root`, default `.`).
pub struct AnalysisContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory.
    pub root_dir: PathBuf,

    /// File holding the per-locale key maps.
    pub definitions_path: PathBuf,

    /// Directory scanned for lookup calls.
    pub source_root: PathBuf,

    /// Where the markdown report is written.
    pub output_path: PathBuf,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl AnalysisContext {
    /// Load configuration from the project root and apply CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if let Some(ref reference_locale) = common_args.reference_locale {
            config.reference_locale = reference_locale.clone();
        }
        if let Some(ref definitions) = common_args.definitions {
            config.definitions_file = definitions.to_string_lossy().to_string();
        }
        if let Some(ref source_root) = common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        if let Some(ref output) = common_args.output {
            config.output = output.to_string_lossy().to_string();
        }

        let definitions_path = resolve_path(&root_dir, &config.definitions_file);
        let source_root = resolve_path(&root_dir, &config.source_root);
        let output_path = resolve_path(&root_dir, &config.output);

        Ok(Self {
            config,
            root_dir,
            definitions_path,
            source_root,
            output_path,
            verbose,
        })
    }
}

/// Resolve `path` against `root_dir` unless it is absolute.
fn resolve_path(root_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
