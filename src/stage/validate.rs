use crate::config::StageDefinition;

use super::StageError;

/// A stage is runnable only when `cmd` names a program.
pub fn validate(stage_no: usize, stage: &StageDefinition) -> Result<(), StageError> {
    if stage.cmd.is_empty() {
        return Err(StageError::EmptyCommand { stage: stage_no });
    }
    Ok(())
}
