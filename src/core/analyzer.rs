//! Per-file detection of unsafe table data assignments.
//!
//! Detection is lexical: a variable is flagged whenever its table binding and
//! an unsafe setter call both appear in the file, regardless of control flow.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use super::patterns::PatternRegistry;
use crate::issues::{Issue, SourceLocation};

/// Result of analyzing one file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileAnalysis<'r> {
    /// The file has no table binding marker.
    NotApplicable,
    Applicable {
        bound_variables: BTreeSet<String>,
        issues: Vec<Issue<'r>>,
    },
}

impl<'r> FileAnalysis<'r> {
    pub fn issues(&self) -> &[Issue<'r>] {
        match self {
            FileAnalysis::NotApplicable => &[],
            FileAnalysis::Applicable { issues, .. } => issues.as_slice(),
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, FileAnalysis::Applicable { .. })
    }
}

pub struct Analyzer<'r> {
    marker: String,
    binding: Regex,
    registry: &'r PatternRegistry,
}

impl<'r> Analyzer<'r> {
    /// Build an analyzer for `<attribute>={Var}` bindings.
    pub fn new(attribute: &str, registry: &'r PatternRegistry) -> Result<Self> {
        let attr = regex::escape(attribute);
        let binding = Regex::new(&format!(r"{attr}=\{{(\w+)\}}"))
            .with_context(|| format!("Invalid binding attribute: \"{}\"", attribute))?;

        Ok(Self {
            marker: format!("{attribute}="),
            binding,
            registry,
        })
    }

    pub fn registry(&self) -> &'r PatternRegistry {
        self.registry
    }

    /// True if the file contains the table binding marker at all.
    pub fn uses_binding(&self, content: &str) -> bool {
        content.contains(&self.marker)
    }

    /// Distinct identifiers bound as table data.
    pub fn bound_variables(&self, content: &str) -> BTreeSet<String> {
        self.binding
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    pub fn analyze(&self, content: &str) -> Result<FileAnalysis<'r>> {
        if !self.uses_binding(content) {
            return Ok(FileAnalysis::NotApplicable);
        }

        let bound_variables = self.bound_variables(content);
        let mut issues = Vec::new();

        for variable in &bound_variables {
            for entry in self.registry.entries() {
                let detector = entry.detector(variable)?;
                if let Some(found) = detector.find(content) {
                    issues.push(Issue {
                        entry,
                        variable: variable.clone(),
                        location: SourceLocation::from_offset(content, found.start()),
                    });
                }
            }
        }

        Ok(FileAnalysis::Applicable {
            bound_variables,
            issues,
        })
    }
}
