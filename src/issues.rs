//! Issue and change records produced by analysis and fixing.
//!
//! An issue names a bound variable and the registry entry whose detection
//! pattern matched it. Issues live only for the duration of one file's pass.

use std::fmt;

use crate::core::patterns::PatternEntry;

/// Position of the first unsafe assignment for an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
    /// Full text of the line, without the trailing newline.
    pub source_line: String,
}

impl SourceLocation {
    /// Location of the byte `offset` within `content`.
    pub fn from_offset(content: &str, offset: usize) -> Self {
        let line_start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = content[offset..]
            .find('\n')
            .map_or(content.len(), |i| offset + i);
        let line = content[..offset].matches('\n').count() + 1;
        let col = content[line_start..offset].chars().count() + 1;

        Self {
            line,
            col,
            source_line: content[line_start..line_end].trim_end_matches('\r').to_string(),
        }
    }
}

/// Unsafe assignment to the setter of a table-bound variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue<'r> {
    pub entry: &'r PatternEntry,
    pub variable: String,
    pub location: SourceLocation,
}

impl Issue<'_> {
    pub fn kind(&self) -> &str {
        &self.entry.kind
    }
}

/// A substitution that altered file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub kind: String,
    pub variable: String,
    /// Number of occurrences rewritten.
    pub replacements: usize,
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed {}: {}", self.kind, self.variable)?;
        if self.replacements > 1 {
            write!(f, " ({} occurrences)", self.replacements)?;
        }
        Ok(())
    }
}
