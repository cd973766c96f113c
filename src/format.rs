use crate::domain::{BranchState, Operation, StatusCounters, UpstreamState};

/// Assemble the fixed-position output line.
///
/// ```text
/// <branch> <ahead> <behind> <staged> <conflicts> <changed> <untracked>
/// <stashes> <initial_commit_flag> <upstream_or_..> <merge_active>
/// <rebase_progress_or_0>
/// ```
pub fn format_line(
    branch: &BranchState,
    upstream: &UpstreamState,
    counters: &StatusCounters,
    operation: Operation,
) -> String {
    format!(
        "{branch} {ahead} {behind} {staged} {conflicts} {changed} {untracked} {stashes} {initial} {upstream} {merge_active} {rebase}",
        branch = branch.display_name(),
        ahead = upstream.ahead(),
        behind = upstream.behind(),
        staged = counters.staged,
        conflicts = counters.conflicts,
        changed = counters.changed,
        untracked = counters.untracked,
        stashes = counters.stashes,
        initial = no_upstream_flag(branch, upstream) as u8,
        upstream = upstream.display_name(),
        merge_active = operation.merge_active() as u8,
        rebase = operation.rebase_token(),
    )
}

/// The `<initial_commit_flag>` slot: 1 on a named or unborn branch with no
/// upstream configured, 0 otherwise. Detached HEAD is always 0, since it
/// has no branch to lack an upstream on.
fn no_upstream_flag(branch: &BranchState, upstream: &UpstreamState) -> bool {
    !matches!(branch, BranchState::Detached(_)) && matches!(upstream, UpstreamState::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_repo_no_commits() {
        let line = format_line(
            &BranchState::Unborn("master".into()),
            &UpstreamState::None,
            &StatusCounters::default(),
            Operation::None,
        );
        assert_eq!(line, "master 0 0 0 0 0 0 0 1 .. 0 0");
    }

    #[test]
    fn named_branch_with_no_upstream_sets_flag() {
        let line = format_line(
            &BranchState::OnBranch("master".into()),
            &UpstreamState::None,
            &StatusCounters::default(),
            Operation::None,
        );
        assert_eq!(line, "master 0 0 0 0 0 0 0 1 .. 0 0");
    }

    #[test]
    fn detached_head() {
        let line = format_line(
            &BranchState::Detached("abc1234".into()),
            &UpstreamState::None,
            &StatusCounters::default(),
            Operation::None,
        );
        assert_eq!(line, ":abc1234 0 0 0 0 0 0 0 0 .. 0 0");
    }

    #[test]
    fn tracking_with_staged_changed_untracked_and_stash() {
        let line = format_line(
            &BranchState::OnBranch("master".into()),
            &UpstreamState::Tracking {
                name: "up/master".into(),
                ahead: 0,
                behind: 0,
            },
            &StatusCounters {
                staged: 3,
                changed: 1,
                untracked: 2,
                stashes: 1,
                ..StatusCounters::default()
            },
            Operation::None,
        );
        assert_eq!(line, "master 0 0 3 0 1 2 1 0 up/master 0 0");
    }

    #[test]
    fn merge_conflict_with_stash() {
        let line = format_line(
            &BranchState::OnBranch("master".into()),
            &UpstreamState::Tracking {
                name: "up/master".into(),
                ahead: 1,
                behind: 1,
            },
            &StatusCounters {
                conflicts: 1,
                stashes: 1,
                ..StatusCounters::default()
            },
            Operation::Merge,
        );
        assert_eq!(line, "master 1 1 0 1 0 0 1 0 up/master 1 0");
    }

    #[test]
    fn diverged_ahead_and_behind() {
        let line = format_line(
            &BranchState::OnBranch("master".into()),
            &UpstreamState::Tracking {
                name: "up/master".into(),
                ahead: 1,
                behind: 2,
            },
            &StatusCounters::default(),
            Operation::None,
        );
        assert_eq!(line, "master 1 2 0 0 0 0 0 0 up/master 0 0");
    }

    #[test]
    fn in_progress_merge_into_dev() {
        let line = format_line(
            &BranchState::OnBranch("dev".into()),
            &UpstreamState::None,
            &StatusCounters {
                conflicts: 1,
                ..StatusCounters::default()
            },
            Operation::Merge,
        );
        assert_eq!(line, "dev 0 0 0 1 0 0 0 1 .. 1 0");
    }

    #[test]
    fn rebase_step_in_progress() {
        let line = format_line(
            &BranchState::Detached("deadbee".into()),
            &UpstreamState::None,
            &StatusCounters {
                conflicts: 1,
                ..StatusCounters::default()
            },
            Operation::Rebase { done: 1, total: 2 },
        );
        assert_eq!(line, ":deadbee 0 0 0 1 0 0 0 0 .. 0 1/2");
    }

    #[test]
    fn upstream_gone_still_shown() {
        let line = format_line(
            &BranchState::OnBranch("dev".into()),
            &UpstreamState::Tracking {
                name: "up/dev".into(),
                ahead: 0,
                behind: 0,
            },
            &StatusCounters::default(),
            Operation::None,
        );
        assert_eq!(line, "dev 0 0 0 0 0 0 0 0 up/dev 0 0");
    }
}
