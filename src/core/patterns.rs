//! Registry of unsafe-assignment patterns.
//!
//! Each entry pairs a detection template with a replacement template. Both
//! templates carry the `{var}` placeholder, which is substituted with a bound
//! variable name before use. Adding a new kind only requires adding an entry.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the bound variable name.
pub const VAR_PLACEHOLDER: &str = "{var}";

/// One shape of unsafe assignment and its guarded rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternEntry {
    /// Issue kind identifier, e.g. `response-data-list`.
    pub kind: String,
    /// Regex template matching the unsafe form.
    pub detect: String,
    /// Literal replacement template for the guarded form.
    pub replace: String,
}

impl PatternEntry {
    pub fn new(kind: &str, detect: &str, replace: &str) -> Self {
        Self {
            kind: kind.to_string(),
            detect: detect.to_string(),
            replace: replace.to_string(),
        }
    }

    /// Concrete detection regex for one variable.
    pub fn detector(&self, var: &str) -> Result<Regex> {
        let pattern = self.detect.replace(VAR_PLACEHOLDER, &regex::escape(var));
        Regex::new(&pattern)
            .with_context(|| format!("Invalid detection pattern for '{}': {}", self.kind, pattern))
    }

    /// Concrete replacement text for one variable.
    pub fn replacement(&self, var: &str) -> String {
        self.replace.replace(VAR_PLACEHOLDER, var)
    }

    pub fn validate(&self) -> Result<()> {
        if self.kind.trim().is_empty() {
            bail!("Pattern kind must not be empty");
        }
        if !self.detect.contains(VAR_PLACEHOLDER) {
            bail!(
                "Pattern '{}': 'detect' must contain {}",
                self.kind,
                VAR_PLACEHOLDER
            );
        }
        if !self.replace.contains(VAR_PLACEHOLDER) {
            bail!(
                "Pattern '{}': 'replace' must contain {}",
                self.kind,
                VAR_PLACEHOLDER
            );
        }
        self.detector("Sample")?;
        Ok(())
    }
}

/// Ordered, immutable set of pattern entries.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<PatternEntry>,
}

impl PatternRegistry {
    /// The three builtin shapes: payload bound directly, nested one level,
    /// and nested under a `list` field.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                PatternEntry::new(
                    "direct-response-data",
                    r"set{var}\(response\.data\)",
                    "set{var}(Array.isArray(response.data) ? response.data : [])",
                ),
                PatternEntry::new(
                    "response-data-data",
                    r"set{var}\(response\.data\.data\)",
                    "set{var}(Array.isArray(response.data.data) ? response.data.data : [])",
                ),
                PatternEntry::new(
                    "response-data-list",
                    r"set{var}\(response\.data\.list\)",
                    "set{var}(Array.isArray(response.data.list) ? response.data.list : [])",
                ),
            ],
        }
    }

    /// Builtin entries followed by `extra`, in order.
    pub fn with_extra(extra: impl IntoIterator<Item = PatternEntry>) -> Self {
        let mut registry = Self::builtin();
        registry.entries.extend(extra);
        registry
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn get(&self, kind: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Every entry must be valid and kinds must be unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &self.entries {
            entry.validate()?;
            if !seen.insert(entry.kind.as_str()) {
                bail!("Duplicate pattern kind: \"{}\"", entry.kind);
            }
        }
        Ok(())
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
