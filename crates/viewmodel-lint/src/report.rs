//! Rendering lint results.

use crate::scan::DeclarationReport;
use crate::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Results for one scanned file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Parse or I/O failure, if the file could not be checked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Fix-its applied to this file.
    pub fixed: usize,
    pub declarations: Vec<DeclarationReport>,
}

impl FileReport {
    pub(crate) fn failed(path: PathBuf, error: impl ToString) -> Self {
        Self {
            path,
            error: Some(error.to_string()),
            fixed: 0,
            declarations: Vec::new(),
        }
    }

    /// Diagnostics still present in the file.
    pub fn diagnostic_count(&self) -> usize {
        self.declarations.iter().map(|d| d.diagnostics.len()).sum()
    }
}

/// Totals for a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub declarations: usize,
    pub diagnostics: usize,
    pub fixed: usize,
    pub failures: usize,
}

impl Summary {
    pub fn from_files(files: &[FileReport]) -> Self {
        files.iter().fold(
            Summary {
                files: files.len(),
                ..Summary::default()
            },
            |mut summary, file| {
                summary.declarations += file.declarations.len();
                summary.diagnostics += file.diagnostic_count();
                summary.fixed += file.fixed;
                summary.failures += usize::from(file.error.is_some());
                summary
            },
        )
    }

    /// No diagnostics left and every file was checked.
    pub fn is_clean(&self) -> bool {
        self.diagnostics == 0 && self.failures == 0
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileReport],
    summary: Summary,
}

pub fn render<W: Write>(
    format: OutputFormat,
    files: &[FileReport],
    summary: Summary,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(files, summary, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport { files, summary })?;
            writeln!(out)
        }
    }
}

fn render_text<W: Write>(files: &[FileReport], summary: Summary, out: &mut W) -> io::Result<()> {
    for file in files {
        let path = file.path.display();
        if let Some(error) = &file.error {
            writeln!(out, "{path}: error: {error}")?;
            continue;
        }
        for decl in &file.declarations {
            for diagnostic in &decl.diagnostics {
                writeln!(
                    out,
                    "{path}:{}:{}: {}[{}]: {}",
                    decl.line, decl.column, diagnostic.severity, diagnostic.code, diagnostic.message
                )?;
                writeln!(out, "  --> in `mod {}`", decl.name)?;
                for fix_it in &diagnostic.fix_its {
                    writeln!(
                        out,
                        "  = help: {} at {}:{}: `{}`",
                        fix_it.message,
                        fix_it.line,
                        fix_it.column,
                        fix_it.insertion.trim()
                    )?;
                }
            }
        }
    }

    writeln!(
        out,
        "checked {} file(s), {} view model(s): {} error(s), {} fix(es) applied{}",
        summary.files,
        summary.declarations,
        summary.diagnostics,
        summary.fixed,
        if summary.failures > 0 {
            format!(", {} file(s) failed", summary.failures)
        } else {
            String::new()
        }
    )
}
