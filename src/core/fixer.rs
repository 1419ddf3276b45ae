//! Textual rewriting of unsafe assignments into their guarded form.

use anyhow::Result;
use regex::Captures;

use crate::issues::{Change, Issue};

/// Final content plus the substitutions that altered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub content: String,
    pub changes: Vec<Change>,
}

impl FixOutcome {
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Apply every issue's substitution in order.
///
/// Each substitution runs against the content produced by the previous ones.
/// A substitution that matches nothing is skipped. Re-applying an issue to
/// already fixed content is a no-op since the guarded form no longer matches.
pub fn fix_content(content: &str, issues: &[Issue<'_>]) -> Result<FixOutcome> {
    let mut fixed = content.to_string();
    let mut changes = Vec::new();

    for issue in issues {
        let detector = issue.entry.detector(&issue.variable)?;
        let replacement = issue.entry.replacement(&issue.variable);

        // Closure output is inserted literally; `$` is never expanded.
        let mut replacements = 0;
        let updated = detector.replace_all(&fixed, |_: &Captures<'_>| {
            replacements += 1;
            replacement.as_str()
        });
        if replacements > 0 && updated != fixed {
            fixed = updated.into_owned();
            changes.push(Change {
                kind: issue.kind().to_string(),
                variable: issue.variable.clone(),
                replacements,
            });
        }
    }

    Ok(FixOutcome {
        content: fixed,
        changes,
    })
}
