//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format, followed by scan counts and
//! the list of rewritten files. Separate from the engine so tablefix can be
//! used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{FileReport, RunMode, RunSummary};
use crate::issues::Issue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(summary: &RunSummary<'_>) {
    print_to(summary, &mut io::stdout().lock());
}

/// Print the full run report to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary<'_>, writer: &mut W) {
    report_issues_to(&summary.files, writer);
    print_counts_to(summary, writer);

    if summary.problem_file_count() == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No unsafe table data assignments found".green()
        );
        return;
    }

    match summary.mode {
        RunMode::Fix => print_fixed_to(summary, writer),
        RunMode::Check => print_would_fix_to(summary, writer),
    }
}

/// Print every issue of every problem file.
pub fn report_issues_to<W: Write>(files: &[FileReport<'_>], writer: &mut W) {
    let max_line_width = files
        .iter()
        .flat_map(|f| f.issues.iter())
        .map(|i| i.location.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    let mut total = 0;
    for file in files {
        for issue in &file.issues {
            print_issue(file, issue, writer, max_line_width);
            total += 1;
        }
    }

    if total > 0 {
        let _ = writeln!(
            writer,
            "{} {} problem(s) in {} file(s)\n",
            FAILURE_MARK.red(),
            total,
            files.len()
        );
    }
}

fn print_issue<W: Write>(
    file: &FileReport<'_>,
    issue: &Issue<'_>,
    writer: &mut W,
    max_line_width: usize,
) {
    let loc = &issue.location;

    let _ = writeln!(
        writer,
        "{}: unchecked response assigned to \"{}\"  {}",
        "warning".bold().yellow(),
        issue.variable,
        format!("[{}]", issue.kind()).dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        file.path.display(),
        loc.line,
        loc.col
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        loc.line.to_string().blue(),
        "|".blue(),
        loc.source_line,
        width = max_line_width
    );

    // col is 1-based
    let prefix: String = loc.source_line.chars().take(loc.col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );

    let _ = writeln!(
        writer,
        "{:>width$} {} {} {}",
        "",
        "=".blue(),
        "fix:".bold().cyan(),
        issue.entry.replacement(&issue.variable),
        width = max_line_width
    );
    let _ = writeln!(writer);
}

fn print_counts_to<W: Write>(summary: &RunSummary<'_>, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Scanned {} file(s) in {}: {} use table bindings, {} with issues.",
        summary.files_scanned,
        summary.source_dir.display(),
        summary.binding_files,
        summary.problem_file_count()
    );
}

fn print_fixed_to<W: Write>(summary: &RunSummary<'_>, writer: &mut W) {
    let fixed = summary.fixed_file_count();
    let _ = writeln!(
        writer,
        "{} {} file(s){}",
        "Fixed".green().bold(),
        fixed,
        if fixed > 0 { ":" } else { "." }
    );
    for file in summary.files.iter().filter(|f| f.is_changed()) {
        let _ = writeln!(writer, "  {} {}", SUCCESS_MARK.green(), file.file_name);
        for change in &file.changes {
            let _ = writeln!(writer, "     - {}", change);
        }
    }
}

fn print_would_fix_to<W: Write>(summary: &RunSummary<'_>, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} file(s):",
        "Would fix".yellow().bold(),
        summary.fixed_file_count()
    );
    for file in summary.files.iter().filter(|f| f.is_changed()) {
        let _ = writeln!(writer, "  - {}", file.file_name);
        for change in &file.changes {
            let _ = writeln!(writer, "     - {}", change);
        }
    }
    let _ = writeln!(
        writer,
        "Run {} to apply these changes.",
        "tablefix fix".cyan()
    );
}
