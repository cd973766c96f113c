use crate::domain::{StatusCounters, UpstreamState};
use crate::error::{AppError, Result};

/// What the branch header line said about HEAD, before the `:<hash>` /
/// stash / operation lookups that only `BranchResolver` can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderBranch {
    Named(String),
    Detached,
    Unborn(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub branch: HeaderBranch,
    pub upstream: UpstreamState,
}

/// The two-letter codes that denote a merge conflict.
const CONFLICT_CODES: [&str; 7] = ["DD", "AU", "UD", "UA", "DU", "AA", "UU"];

/// Parse the full output of `git status --branch --porcelain` (or an
/// equivalent transcript fed on stdin) into a header plus disjoint counters.
pub fn parse(text: &str) -> Result<(HeaderInfo, StatusCounters)> {
    let mut lines = text.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| AppError::unparseable("empty porcelain output: missing branch header"))?;
    let header = parse_header(header_line)?;

    let mut counters = StatusCounters::default();

    for line in lines {
        if line.is_empty() {
            continue;
        }
        classify_entry(line, &mut counters)?;
    }

    Ok((header, counters))
}

/// Parse the first line of porcelain output (`## ...`).
fn parse_header(line: &str) -> Result<HeaderInfo> {
    let rest = line.strip_prefix("## ").ok_or_else(|| {
        AppError::unparseable(format!("malformed branch header: {line:?}"))
    })?;

    if rest == "HEAD (no branch)" {
        return Ok(HeaderInfo {
            branch: HeaderBranch::Detached,
            upstream: UpstreamState::None,
        });
    }

    if let Some(name) = rest.strip_prefix("No commits yet on ") {
        return Ok(HeaderInfo {
            branch: HeaderBranch::Unborn(name.to_string()),
            upstream: UpstreamState::None,
        });
    }

    if let Some((name, upstream_part)) = rest.split_once("...") {
        return Ok(HeaderInfo {
            branch: HeaderBranch::Named(name.to_string()),
            upstream: parse_upstream(upstream_part)?,
        });
    }

    Ok(HeaderInfo {
        branch: HeaderBranch::Named(rest.to_string()),
        upstream: UpstreamState::None,
    })
}

/// Parse the segment after `...` in a branch header: the upstream name and
/// an optional `[ahead N]` / `[behind M]` / `[ahead N, behind M]` / `[gone]`
/// bracket.
fn parse_upstream(segment: &str) -> Result<UpstreamState> {
    let (name, bracket) = match segment.split_once(" [") {
        Some((name, rest)) => (name, rest.strip_suffix(']')),
        None => (segment, None),
    };

    if name.is_empty() {
        return Err(AppError::unparseable(format!(
            "malformed upstream segment: {segment:?}"
        )));
    }

    // `[gone]` is authoritative: zero ahead/behind regardless of anything
    // else present in the bracket.
    let Some(bracket) = bracket else {
        return Ok(UpstreamState::Tracking {
            name: name.to_string(),
            ahead: 0,
            behind: 0,
        });
    };
    if bracket == "gone" {
        return Ok(UpstreamState::Tracking {
            name: name.to_string(),
            ahead: 0,
            behind: 0,
        });
    }

    let mut ahead = 0;
    let mut behind = 0;
    for part in bracket.split(", ") {
        if let Some(n) = part.strip_prefix("ahead ") {
            ahead = n
                .parse()
                .map_err(|_| AppError::unparseable(format!("malformed ahead count: {n:?}")))?;
        } else if let Some(n) = part.strip_prefix("behind ") {
            behind = n
                .parse()
                .map_err(|_| AppError::unparseable(format!("malformed behind count: {n:?}")))?;
        }
    }

    Ok(UpstreamState::Tracking {
        name: name.to_string(),
        ahead,
        behind,
    })
}

/// Classify one porcelain entry line into `counters`, per the XY precedence
/// rules. Classification depends solely on the two-character code, never on
/// the path field, so `orig -> new` rename segments never confuse it.
fn classify_entry(line: &str, counters: &mut StatusCounters) -> Result<()> {
    if line.len() < 2 {
        return Err(AppError::unparseable(format!(
            "malformed status entry: {line:?}"
        )));
    }
    let code = &line[0..2];

    if CONFLICT_CODES.contains(&code) {
        counters.conflicts += 1;
        return Ok(());
    }
    if code == "??" {
        counters.untracked += 1;
        return Ok(());
    }
    if code == "!!" {
        return Ok(());
    }

    let mut chars = code.chars();
    let x = chars.next().unwrap();
    let y = chars.next().unwrap();

    if matches!(x, 'M' | 'A' | 'D' | 'R' | 'C' | 'T') {
        counters.staged += 1;
    }
    if matches!(y, 'M' | 'D' | 'T') {
        counters.changed += 1;
    }

    Ok(())
}
