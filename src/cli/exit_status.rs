use std::process::ExitCode;

/// Process exit status of a CLI run.
///
/// Unloadable dictionary files are only warnings and never change it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// 0: every file was resolved, or the config file was created.
    Success,
    /// 1: `hints` could not read one of its files, or `init` found a config
    /// file already there.
    Failure,
    /// 2: the run was aborted, e.g. by an invalid `.finei18nrc.json`.
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
