use std::io::{self, Write};

use regex::Regex;

use crate::{config::StageDefinition, style::Printer};

use super::StageError;

/// Capture group whose text is preferred over the whole match.
pub const MATCH_GROUP: &str = "match";

/// Label used for `print-match` when `match-msg` is not set.
pub const DEFAULT_MATCH_MSG: &str = "Result matched:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// No `match-stdout` configured.
    Skipped,
    Matched(String),
    NoMatch,
}

impl MatchOutcome {
    /// The trailer text this outcome selects. Empty means print nothing.
    pub fn token<'a>(&self, stage: &'a StageDefinition) -> &'a str {
        match self {
            Self::Skipped => "",
            Self::Matched(_) => &stage.on_success,
            Self::NoMatch if stage.allow_fail => "",
            Self::NoMatch => &stage.on_failure,
        }
    }

    pub fn matched(&self) -> Option<&str> {
        match self {
            Self::Matched(m) => Some(m.as_str()),
            _ => None,
        }
    }
}

/// Applies the stage's pattern to captured stdout.
pub fn match_output(
    stage_no: usize,
    stage: &StageDefinition,
    stdout: &str,
) -> Result<MatchOutcome, StageError> {
    let Some(pattern) = stage.pattern() else {
        return Ok(MatchOutcome::Skipped);
    };

    let re = Regex::new(pattern).map_err(|source| StageError::InvalidPattern {
        stage: stage_no,
        pattern: pattern.to_string(),
        source,
    })?;

    let Some(caps) = re.captures(stdout) else {
        tracing::debug!(stage = stage_no, %pattern, "no match");
        return Ok(MatchOutcome::NoMatch);
    };

    // named group wins only if it captured something
    let result = caps
        .name(MATCH_GROUP)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| caps.get(0).map_or("", |m| m.as_str()));

    tracing::debug!(stage = stage_no, matched = %result, "match");
    Ok(MatchOutcome::Matched(result.to_string()))
}

/// Prints `<match-msg> <result>` when `print-match` is on and something matched.
pub fn print_match<W: Write>(
    stage: &StageDefinition,
    outcome: &MatchOutcome,
    printer: &mut Printer<W>,
) -> io::Result<()> {
    if !stage.print_match {
        return Ok(());
    }
    let Some(result) = outcome.matched() else {
        return Ok(());
    };

    let label = stage
        .match_msg
        .as_deref()
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MATCH_MSG);

    let line = format!("{label} {result}\n");
    printer.print(&[line.as_str()])
}
