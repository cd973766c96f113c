use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::RepoContext;

/// Walk upward from `start`, looking for a `.git` entry at each ancestor.
///
/// Pure filesystem inspection — never shells out to Git, so a linked
/// worktree's `gitdir:` pointer is resolved correctly before the first
/// subprocess runs. Returns `None` for "not a repository", including when a
/// permission error is hit partway up the walk.
pub fn locate(start: &Path) -> Option<RepoContext> {
    let mut dir = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    loop {
        let git_path = dir.join(".git");
        match fs::symlink_metadata(&git_path) {
            Ok(meta) if meta.is_dir() => {
                return Some(RepoContext {
                    working_tree_root: dir.clone(),
                    meta_dir: git_path,
                });
            }
            Ok(meta) if meta.is_file() => {
                return resolve_gitdir_file(&git_path).map(|meta_dir| RepoContext {
                    working_tree_root: dir.clone(),
                    meta_dir,
                });
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(_) => return None,
        }

        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve a `.git` file's `gitdir: <path>` line to the real metadata
/// directory of a linked worktree.
fn resolve_gitdir_file(git_file: &Path) -> Option<PathBuf> {
    let content = fs::read_to_string(git_file).ok()?;
    let line = content.lines().next()?;
    let target = line.strip_prefix("gitdir:")?.trim();
    if target.is_empty() {
        return None;
    }

    let candidate = PathBuf::from(target);
    let parent = git_file.parent()?;
    let resolved = if candidate.is_absolute() {
        candidate
    } else {
        parent.join(candidate)
    };
    Some(resolved.canonicalize().unwrap_or(resolved))
}
