use std::path::Path;
use std::process::Command as Cmd;

/// Environment variables that can leak from parent git processes (e.g. hooks
/// or a wrapping prompt) and redirect us to the wrong repository.
const GIT_ENV_OVERRIDES: &[&str] = &[
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
    "GIT_PREFIX",
];

/// Run a git command in `cwd`, returning trimmed stdout on success.
///
/// A non-zero exit or spawn failure is not surfaced as an error here — every
/// caller in this crate treats Git subcommand failure as "information
/// unavailable", never as fatal.
fn run_trimmed(args: &[&str], cwd: &Path) -> Option<String> {
    run_raw(args, cwd).map(|s| s.trim().to_string())
}

/// Run a git command in `cwd`, returning raw (untrimmed) stdout on success.
///
/// Used for porcelain output, where leading/trailing whitespace on
/// individual lines is part of the format.
fn run_raw(args: &[&str], cwd: &Path) -> Option<String> {
    let mut cmd = Cmd::new("git");
    cmd.args(args).current_dir(cwd);

    for var in GIT_ENV_OVERRIDES {
        cmd.env_remove(var);
    }

    let output = cmd.output().ok()?;
    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Invoke `git status --branch --porcelain` in `cwd`.
pub fn status_porcelain(cwd: &Path) -> Option<String> {
    run_raw(&["status", "--branch", "--porcelain"], cwd)
}

/// Invoke `git rev-parse --short HEAD` in `cwd`. Returns `None` if HEAD
/// cannot be resolved (e.g. the probe runs outside any repository).
pub fn short_head_hash(cwd: &Path) -> Option<String> {
    run_trimmed(&["rev-parse", "--short", "HEAD"], cwd).filter(|s| !s.is_empty())
}

/// Count non-empty lines of `git stash list`. Zero on any failure.
pub fn stash_count(cwd: &Path) -> u32 {
    run_raw(&["stash", "list"], cwd)
        .map(|out| out.lines().filter(|l| !l.trim().is_empty()).count() as u32)
        .unwrap_or(0)
}
