use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;

pub mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(command) = args.command else {
        Arguments::command().print_help().ok();
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Command::Check(cmd) => commands::check::check(cmd)?,
        Command::Fix(cmd) => commands::fix::fix(cmd)?,
        Command::Init => commands::init::init()?,
    };

    Ok(status.into())
}
