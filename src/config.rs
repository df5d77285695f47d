use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".textusagerc.json";

/// Locale code to human-readable name.
pub type LocaleNames = BTreeMap<String, String>;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_definitions_file")]
    pub definitions_file: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_reference_locale")]
    pub reference_locale: String,
    #[serde(default = "default_lookup_function")]
    pub lookup_function: String,
    #[serde(default = "default_param_lookup_function")]
    pub param_lookup_function: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_locale_names")]
    pub locale_names: LocaleNames,
}

fn default_definitions_file() -> String {
    "lib/presentation/providers/text_provider.dart".to_string()
}

fn default_source_root() -> String {
    "lib".to_string()
}

fn default_source_extension() -> String {
    "dart".to_string()
}

fn default_reference_locale() -> String {
    "ar".to_string()
}

fn default_lookup_function() -> String {
    "getText".to_string()
}

fn default_param_lookup_function() -> String {
    "getTextWithParams".to_string()
}

fn default_output() -> String {
    "text_usage_report.md".to_string()
}

fn default_locale_names() -> LocaleNames {
    [("ar", "Arabic"), ("en", "English")]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            definitions_file: default_definitions_file(),
            source_root: default_source_root(),
            source_extension: default_source_extension(),
            ignores: Vec::new(),
            reference_locale: default_reference_locale(),
            lookup_function: default_lookup_function(),
            param_lookup_function: default_param_lookup_function(),
            output: default_output(),
            locale_names: default_locale_names(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, call names that
    /// are not plain identifiers (or are identical), or an empty extension.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for (field, name) in [
            ("lookupFunction", &self.lookup_function),
            ("paramLookupFunction", &self.param_lookup_function),
        ] {
            if !is_identifier(name) {
                bail!("Invalid function name in '{}': \"{}\"", field, name);
            }
        }

        if self.lookup_function == self.param_lookup_function {
            bail!(
                "'lookupFunction' and 'paramLookupFunction' must differ (both are \"{}\")",
                self.lookup_function
            );
        }

        if self.extension().is_empty() {
            bail!("'sourceExtension' must not be empty");
        }

        Ok(())
    }

    /// Source file extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }
}

/// Human-readable name for a locale code, falling back to the code itself.
pub fn locale_display_name<'a>(names: &'a LocaleNames, code: &'a str) -> &'a str {
    names.get(code).map(String::as_str).unwrap_or(code)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
