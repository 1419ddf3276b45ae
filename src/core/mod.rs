//! Detection and rewriting engine.
//!
//! ```text
//! file_scanner ──> analyzer ──> fixer ──> driver (persist + summary)
//!                     ↑
//!                  patterns
//! ```

pub mod analyzer;
pub mod context;
pub mod driver;
pub mod file_scanner;
pub mod fixer;
pub mod patterns;

pub use analyzer::{Analyzer, FileAnalysis};
pub use context::RunContext;
pub use driver::{FileReport, RunMode, RunSummary, run};
pub use fixer::{FixOutcome, fix_content};
pub use patterns::{PatternEntry, PatternRegistry};
