//! Fix command - wrap unchecked response assignments in an array guard.
//!
//! Every file with at least one actual change is overwritten in place.
//! Files are processed one after another; an error stops the run and
//! leaves already rewritten files as they are.

use anyhow::Result;

use super::super::{args::FixCommand, exit_status::ExitStatus, report};
use crate::core::{RunContext, RunMode, run};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.common)?;
    let summary = run(&ctx, RunMode::Fix)?;

    report::print(&summary);

    Ok(ExitStatus::Success)
}
