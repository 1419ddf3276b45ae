use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; `fix` exits here after rewriting
/// - `Failure` (1): `check` found unsafe assignments
/// - `Error` (2): Command failed (I/O error, invalid UTF-8, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but found issues.
    Failure,
    /// Command failed due to an internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
