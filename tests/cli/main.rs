use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod init;

const BIN_NAME: &str = "textusage";

pub const PROVIDER_PATH: &str = "lib/presentation/providers/text_provider.dart";

pub const REPORT_PATH: &str = "text_usage_report.md";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project whose text provider defines `locales` as `(code, [(key, value)])`.
    pub fn with_provider(locales: &[(&str, &[(&str, &str)])]) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(PROVIDER_PATH, &provider_source(locales))?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        self.write_bytes(path, content.as_bytes())
    }

    pub fn write_bytes(&self, path: &str, content: &[u8]) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn analyze_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("analyze");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Render a Dart `TextProvider` class holding one map per locale.
pub fn provider_source(locales: &[(&str, &[(&str, &str)])]) -> String {
    let mut out = String::from(
        "class TextProvider extends ChangeNotifier {\n  \
         static const Map<String, Map<String, String>> _texts = {\n",
    );
    for (locale, entries) in locales {
        out.push_str(&format!("    '{}': {{\n", locale));
        for (key, value) in *entries {
            out.push_str(&format!("      '{}': '{}',\n", key, value));
        }
        out.push_str("    },\n");
    }
    out.push_str("  };\n\n  String getText(String key) => _texts[_locale]?[key] ?? key;\n}\n");
    out
}

pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(mut cmd: Command) -> Result<RunOutput> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run textusage")?;
    Ok(RunOutput {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}
