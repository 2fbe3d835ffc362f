//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:line:col: error[code]: message` lines.
    #[default]
    Text,
    /// One JSON document per run.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "viewmodel-lint",
    version,
    about = "Check #[view_model] modules for State, Action and reduce"
)]
pub struct Args {
    /// Files or directories to scan.
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Apply the suggested insertions in place.
    #[arg(long, env = "VIEWMODEL_LINT_FIX")]
    pub fix: bool,

    #[arg(long, value_enum, env = "VIEWMODEL_LINT_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Attribute name that marks a view-model module.
    #[arg(long, env = "VIEWMODEL_LINT_ATTRIBUTE", default_value = "view_model")]
    pub attribute: String,
}

/// Resolved lint settings.
#[derive(Debug, Clone)]
pub struct LintConfig {
    pub paths: Vec<PathBuf>,
    pub fix: bool,
    pub format: OutputFormat,
    pub attribute: String,
}

impl LintConfig {
    /// Settings for scanning `paths` with the default attribute and text output.
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            fix: false,
            format: OutputFormat::Text,
            attribute: "view_model".to_string(),
        }
    }

    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl From<Args> for LintConfig {
    fn from(args: Args) -> Self {
        Self {
            paths: args.paths,
            fix: args.fix,
            format: args.format,
            attribute: args.attribute,
        }
    }
}
