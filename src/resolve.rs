use std::fs;
use std::path::Path;

use crate::domain::{BranchState, Operation, RepoContext};
use crate::git;
use crate::porcelain::{HeaderBranch, HeaderInfo};

/// Turn a parsed header into the final `BranchState`. A detached header
/// needs a subprocess probe for the short hash, run in `cwd`; named and
/// unborn branches carry their name straight from the header.
pub fn resolve(header: &HeaderInfo, _ctx: Option<&RepoContext>, cwd: &Path) -> BranchState {
    match &header.branch {
        HeaderBranch::Named(name) => BranchState::OnBranch(name.clone()),
        HeaderBranch::Unborn(name) => BranchState::Unborn(name.clone()),
        HeaderBranch::Detached => {
            BranchState::Detached(git::short_head_hash(cwd).unwrap_or_default())
        }
    }
}

/// Inspect `meta_dir` for `MERGE_HEAD` / `rebase-merge` / `rebase-apply`
/// markers. Returns `Operation::None` if no metadata directory is
/// available to inspect.
pub fn detect_operation(ctx: Option<&RepoContext>) -> Operation {
    let Some(ctx) = ctx else {
        return Operation::None;
    };
    let meta_dir = &ctx.meta_dir;

    if meta_dir.join("MERGE_HEAD").is_file() {
        return Operation::Merge;
    }

    if let Some(rebase) = read_rebase_progress(&meta_dir.join("rebase-merge"), "msgnum", "end") {
        return rebase;
    }
    if let Some(rebase) = read_rebase_progress(&meta_dir.join("rebase-apply"), "next", "last") {
        return rebase;
    }

    Operation::None
}

fn read_rebase_progress(dir: &Path, done_file: &str, total_file: &str) -> Option<Operation> {
    if !dir.is_dir() {
        return None;
    }
    let done = read_u32(&dir.join(done_file))?;
    let total = read_u32(&dir.join(total_file))?;
    Some(Operation::Rebase { done, total })
}

fn read_u32(path: &Path) -> Option<u32> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}

/// Count stash entries via `git stash list`, zero when no repository is
/// available.
pub fn stash_count(ctx: Option<&RepoContext>, cwd: &Path) -> u32 {
    if ctx.is_none() {
        return 0;
    }
    git::stash_count(cwd)
}
