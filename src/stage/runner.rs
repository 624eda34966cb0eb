use std::{
    io::{self, Write},
    process::Command,
};

use crate::{config::StageDefinition, style::Printer};

/// Runs pre-cmd, cmd and post-cmd in order and returns cmd's stdout.
///
/// Exit codes and launch failures are not errors here: a failing command just
/// leaves less (or no) output for the matcher to look at. The only error is a
/// failed write to the printer.
pub fn run_commands<W: Write>(
    stage: &StageDefinition,
    printer: &mut Printer<W>,
) -> io::Result<String> {
    if !stage.pre_cmd.is_empty() {
        run_quiet("pre-cmd", &stage.pre_cmd);
    }

    let stdout = capture_stdout(&stage.cmd);

    if !stage.post_cmd.is_empty() {
        run_quiet("post-cmd", &stage.post_cmd);
    }

    if stage.print_stdout {
        printer.print(&[stdout.as_str(), "\n"])?;
    }

    Ok(stdout)
}

/// Best-effort run of a side-effect command; output is dropped.
pub fn run_quiet(label: &str, argv: &[String]) {
    let Some((program, args)) = argv.split_first() else {
        return;
    };

    match Command::new(program).args(args).output() {
        Ok(out) if !out.status.success() => {
            tracing::debug!(
                %label,
                %program,
                status = %out.status,
                "command exited unsuccessfully"
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::debug!(%label, %program, error = %e, "command failed to start");
        }
    }
}

fn capture_stdout(argv: &[String]) -> String {
    let Some((program, args)) = argv.split_first() else {
        return String::new();
    };

    match Command::new(program).args(args).output() {
        Ok(out) => {
            if !out.status.success() {
                tracing::debug!(%program, status = %out.status, "cmd exited unsuccessfully");
            }
            String::from_utf8_lossy(&out.stdout).into_owned()
        }
        Err(e) => {
            tracing::debug!(%program, error = %e, "cmd failed to start");
            String::new()
        }
    }
}
