use std::path::PathBuf;

/// Filesystem facts discovered by `GitRootLocator`, constructed once per
/// invocation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RepoContext {
    pub working_tree_root: PathBuf,
    pub meta_dir: PathBuf,
}

/// What the branch header says HEAD currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchState {
    OnBranch(String),
    Detached(String),
    Unborn(String),
}

impl BranchState {
    /// The string the Formatter places in the `<branch>` slot.
    pub fn display_name(&self) -> String {
        match self {
            BranchState::OnBranch(name) => name.clone(),
            BranchState::Detached(hash) => format!(":{hash}"),
            BranchState::Unborn(name) => name.clone(),
        }
    }
}

/// An in-progress multi-step operation, read from the metadata directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    None,
    Merge,
    Rebase {
        done: u32,
        total: u32,
    },
}

impl Operation {
    pub fn merge_active(&self) -> bool {
        matches!(self, Operation::Merge)
    }

    /// The `<rebase_progress_or_0>` Formatter slot.
    pub fn rebase_token(&self) -> String {
        match self {
            Operation::Rebase { done, total } => format!("{done}/{total}"),
            _ => "0".to_string(),
        }
    }
}

/// Divergence against a configured upstream, as reported by the branch
/// header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UpstreamState {
    #[default]
    None,
    Tracking {
        name: String,
        ahead: u32,
        behind: u32,
    },
}

impl UpstreamState {
    /// The `<upstream_or_..>` Formatter slot.
    pub fn display_name(&self) -> &str {
        match self {
            UpstreamState::None => "..",
            UpstreamState::Tracking { name, .. } => name,
        }
    }

    pub fn ahead(&self) -> u32 {
        match self {
            UpstreamState::Tracking { ahead, .. } => *ahead,
            UpstreamState::None => 0,
        }
    }

    pub fn behind(&self) -> u32 {
        match self {
            UpstreamState::Tracking { behind, .. } => *behind,
            UpstreamState::None => 0,
        }
    }
}

/// The seven porcelain-derived counters. Ahead/behind live on
/// `UpstreamState` and are folded in by the Formatter, not duplicated here;
/// the no-upstream flag is derived by the Formatter from `BranchState` and
/// `UpstreamState` directly, so it isn't tracked here either.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounters {
    pub staged: u32,
    pub changed: u32,
    pub untracked: u32,
    pub conflicts: u32,
    pub stashes: u32,
}
