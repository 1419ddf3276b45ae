//! Scan, analyze, fix and persist, one file at a time.
//!
//! Files are processed strictly in sequence: each is read, analyzed, fixed
//! in memory and (in fix mode) written back before the next is touched. The
//! first error aborts the run; files already rewritten stay rewritten.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    analyzer::{Analyzer, FileAnalysis},
    context::RunContext,
    file_scanner::scan_files,
    fixer::fix_content,
};
use crate::issues::{Change, Issue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Report what would change, never write.
    Check,
    /// Rewrite files in place.
    Fix,
}

/// Outcome for one file that has at least one issue.
#[derive(Debug)]
pub struct FileReport<'r> {
    pub file_name: String,
    pub path: PathBuf,
    pub issues: Vec<Issue<'r>>,
    /// Substitutions that altered content. In check mode these are the
    /// changes `fix` would make.
    pub changes: Vec<Change>,
}

impl FileReport<'_> {
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

#[derive(Debug)]
pub struct RunSummary<'r> {
    pub mode: RunMode,
    pub source_dir: PathBuf,
    pub files_scanned: usize,
    /// Files containing the table binding marker.
    pub binding_files: usize,
    /// Files with issues, in scan order.
    pub files: Vec<FileReport<'r>>,
}

impl RunSummary<'_> {
    pub fn problem_file_count(&self) -> usize {
        self.files.len()
    }

    pub fn issue_count(&self) -> usize {
        self.files.iter().map(|f| f.issues.len()).sum()
    }

    /// Files rewritten (fix mode) or that would be rewritten (check mode).
    pub fn fixed_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_changed()).count()
    }
}

pub fn run(ctx: &RunContext, mode: RunMode) -> Result<RunSummary<'_>> {
    let source_dir = ctx.source_dir();
    let analyzer = Analyzer::new(&ctx.config.binding_attribute, &ctx.registry)?;

    let mut summary = RunSummary {
        mode,
        source_dir: source_dir.clone(),
        files_scanned: 0,
        binding_files: 0,
        files: Vec::new(),
    };

    for path in scan_files(&source_dir, &ctx.extensions, &ctx.config.ignores)? {
        let path = path?;
        let content = read_source(&path)?;
        summary.files_scanned += 1;

        let issues = match analyzer.analyze(&content)? {
            FileAnalysis::NotApplicable => {
                if ctx.verbose {
                    eprintln!(
                        "{} {}: no table binding, skipped",
                        "note:".bold().cyan(),
                        path.display()
                    );
                }
                continue;
            }
            FileAnalysis::Applicable { issues, .. } => issues,
        };
        summary.binding_files += 1;

        if issues.is_empty() {
            continue;
        }

        let outcome = fix_content(&content, &issues)?;
        if mode == RunMode::Fix && outcome.is_changed() {
            fs::write(&path, &outcome.content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }

        summary.files.push(FileReport {
            file_name: file_name(&path),
            path,
            issues,
            changes: outcome.changes,
        });
    }

    Ok(summary)
}

/// Read a whole file as UTF-8.
fn read_source(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    String::from_utf8(bytes).with_context(|| format!("{} is not valid UTF-8", path.display()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
