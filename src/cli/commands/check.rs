//! Check command - report unsafe table data assignments.
//!
//! Runs the full analysis and fix pass in memory but never writes files.
//! Exits with failure when any problem file is found, so it can gate CI.

use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus, report};
use crate::core::{RunContext, RunMode, run};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;
    let summary = run(&ctx, RunMode::Check)?;

    report::print(&summary);

    if summary.problem_file_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
