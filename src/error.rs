use std::fmt;
use std::process;

/// Stable exit codes as defined in the CLI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// 0 — success, including the "not a repository" empty-output case
    Success = 0,
    /// 1 — the porcelain branch header could not be parsed
    Unparseable = 1,
}

impl From<ExitCode> for process::ExitCode {
    fn from(code: ExitCode) -> Self {
        process::ExitCode::from(code as u8)
    }
}

/// Application-level error with a stable exit code.
#[derive(Debug)]
pub struct AppError {
    pub code: ExitCode,
    pub message: String,
}

impl AppError {
    pub fn unparseable(msg: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Unparseable,
            message: msg.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

pub type Result<T> = std::result::Result<T, AppError>;
