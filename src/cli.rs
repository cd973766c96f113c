use clap::Parser;

/// Single-line Git working tree summary for shell prompts.
///
/// Takes no arguments; run it inside (or below) a Git working tree, or pipe
/// a `git status --branch --porcelain` transcript to it on stdin.
#[derive(Parser, Debug)]
#[command(name = "gitline", version, about)]
pub struct Cli {}
