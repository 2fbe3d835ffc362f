//! Lint for `#[view_model]` modules.
//!
//! Runs the same validation as the attribute macro over source files,
//! reports missing `State` / `Action` / `reduce` members with their
//! suggested insertions, and applies those insertions with `--fix`.

mod config;
mod discover;
mod report;
mod scan;

pub use config::{Args, LintConfig, OutputFormat};
pub use discover::rust_files;
pub use report::{FileReport, Summary};
pub use scan::{scan_source, DeclarationReport, DiagnosticReport, FixItReport};

use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;
use viewmodel_syntax::fixit;

/// Scan, optionally fix, and report. Returns the run totals.
pub async fn run<W: Write>(config: &LintConfig, out: &mut W) -> anyhow::Result<Summary> {
    let paths = rust_files(&config.paths)
        .await
        .context("failed to discover source files")?;

    let reads: Vec<_> = paths
        .into_iter()
        .map(|path| {
            tokio::spawn(async move {
                let source = tokio::fs::read_to_string(&path).await;
                (path, source)
            })
        })
        .collect();
    let mut sources = Vec::with_capacity(reads.len());
    for read in reads {
        sources.push(read.await.context("file read task failed")?);
    }

    let mut files = Vec::with_capacity(sources.len());
    for (path, source) in sources {
        let report = match source {
            Ok(source) => check_file(config, path, &source).await,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "failed to read file");
                FileReport::failed(path, err)
            }
        };
        files.push(report);
    }

    let summary = Summary::from_files(&files);
    report::render(config.format, &files, summary, out).context("failed to write report")?;
    Ok(summary)
}

async fn check_file(config: &LintConfig, path: PathBuf, source: &str) -> FileReport {
    let declarations = match scan_source(source, &config.attribute) {
        Ok(declarations) => declarations,
        Err(err) => {
            let start = err.span().start();
            tracing::warn!(path = %path.display(), line = start.line, %err, "failed to check file");
            return FileReport::failed(path, format!("{}:{}: {err}", start.line, start.column + 1));
        }
    };

    let fix_its: Vec<_> = declarations.iter().flat_map(|d| &d.fix_its).collect();
    if !config.fix || fix_its.is_empty() {
        return FileReport {
            path,
            error: None,
            fixed: 0,
            declarations,
        };
    }

    let fixed = match fixit::apply(source, fix_its.iter().copied()) {
        Ok(fixed) => fixed,
        Err(err) => return FileReport::failed(path, err),
    };
    if let Err(err) = tokio::fs::write(&path, &fixed).await {
        tracing::warn!(path = %path.display(), %err, "failed to write fixes");
        return FileReport::failed(path, err);
    }
    tracing::info!(path = %path.display(), count = fix_its.len(), "applied fix-its");

    // Re-check so the report shows what is left after fixing.
    match scan_source(&fixed, &config.attribute) {
        Ok(remaining) => FileReport {
            path,
            error: None,
            fixed: fix_its.len(),
            declarations: remaining,
        },
        Err(err) => FileReport::failed(path, err),
    }
}
