//! One stage: validate, run, match, present.

use std::io::{self, Write};

use anyhow::Result;

use crate::{config::StageDefinition, style::Printer};

pub mod matcher;
pub mod present;
pub mod runner;
pub mod validate;

pub use matcher::{match_output, print_match, MatchOutcome};
pub use present::present;
pub use runner::{run_commands, run_quiet};
pub use validate::validate;

/// Conditions that stop the whole process. `stage` is 1-based.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("stage {stage}: no command to execute")]
    EmptyCommand { stage: usize },

    #[error("stage {stage}: error compiling regex {pattern:?}")]
    InvalidPattern {
        stage: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Runs a single stage end to end.
///
/// On a fatal error the stage's failure text (if any) is still shown before
/// the error goes back up.
pub fn execute<W: Write>(
    index: usize,
    stage: &StageDefinition,
    printer: &mut Printer<W>,
) -> Result<()> {
    let stage_no = index + 1;
    tracing::debug!(stage = stage_no, "execute stage");

    if let Err(e) = validate(stage_no, stage) {
        present_failure(stage, printer)?;
        return Err(e.into());
    }

    let stdout = run_commands(stage, printer)?;

    let outcome = match match_output(stage_no, stage, &stdout) {
        Ok(outcome) => outcome,
        Err(e) => {
            present_failure(stage, printer)?;
            return Err(e.into());
        }
    };

    print_match(stage, &outcome, printer)?;
    present(stage, outcome.token(stage), printer)?;
    Ok(())
}

/// Failure text shown when a stage cannot run at all. `print-on-end` is skipped.
fn present_failure<W: Write>(
    stage: &StageDefinition,
    printer: &mut Printer<W>,
) -> io::Result<()> {
    if stage.on_failure.is_empty() {
        return Ok(());
    }
    printer.print(&[stage.on_failure.as_str(), "\n"])
}
