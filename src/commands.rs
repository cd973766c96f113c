use std::io::{IsTerminal, Read};

use crate::cli::Cli;
use crate::error::Result;
use crate::format;
use crate::git;
use crate::locate;
use crate::porcelain;
use crate::resolve;

/// Entry point: produce the one line this tool ever prints, or an empty
/// string outside a repository with no transcript supplied.
pub fn run(_cli: Cli) -> Result<String> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let transcript = read_stdin_transcript();
    let ctx = locate::locate(&cwd);

    let porcelain_text = match transcript {
        Some(text) => text,
        None => match &ctx {
            Some(ctx) => match git::status_porcelain(&ctx.working_tree_root) {
                Some(text) => text,
                None => return Ok(String::new()),
            },
            None => return Ok(String::new()),
        },
    };

    let (header, mut counters) = porcelain::parse(&porcelain_text)?;
    let upstream = header.upstream.clone();
    let branch = resolve::resolve(&header, ctx.as_ref(), &cwd);
    let operation = resolve::detect_operation(ctx.as_ref());
    counters.stashes = resolve::stash_count(ctx.as_ref(), &cwd);

    Ok(format::format_line(&branch, &upstream, &counters, operation))
}

/// Read the entire porcelain transcript from stdin when stdin is not a
/// terminal. A non-terminal stream that yields zero bytes is treated as "no
/// transcript supplied" so the tool falls back
/// to invoking `git status` directly.
fn read_stdin_transcript() -> Option<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf).ok()?;
    if buf.is_empty() {
        None
    } else {
        Some(buf)
    }
}

