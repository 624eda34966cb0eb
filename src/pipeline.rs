use std::io::{self, Write};

use anyhow::{Context as _, Result};

use crate::{
    cli::Mode,
    config::AliasDefinition,
    context::ContextEnv,
    stage,
    style::Printer,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const BASE_HELP: &str = "[style.bold][style.bright.magenta]toml-alias[style.reset] - tool for easy TOML configurable alias creation.
Depending on current shell prompt localize configuration file in [style.italic][style.bright.yellow]$HOME/.config/toml-alias/config.toml[style.reset] .
Configuration file consists custom aliases activated by binary call (eg. by adding the binary into $PATH directory).
Binary name should be renamed to alias what is configured in TOML file.
For more info please visit [style.italic][style.underline][style.bright.blue]https://github.com/kkuba91/toml-alias[style.reset]

Default args:
    -h, --help      [style.italic]Prints out this help message[style.reset]
    -V, --version   [style.italic]Returns version of the tool[style.reset]

";

/// Entry point used by the binary: real environment, real argv, stdout.
pub fn run() -> Result<()> {
    let ctx = ContextEnv::new()?;
    let cfg = ctx.load_config()?;
    let alias = cfg.alias(ctx.alias_name());
    let mode = Mode::from_args(std::env::args_os().skip(1));

    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock());
    run_with(&alias, mode, &mut printer)
}

pub fn run_with<W: Write>(
    alias: &AliasDefinition,
    mode: Mode,
    printer: &mut Printer<W>,
) -> Result<()> {
    tracing::debug!(
        ?mode,
        hide_base_version = alias.hide_base_version,
        hide_base_help = alias.hide_base_help,
        "dispatch"
    );

    match mode {
        Mode::Version => print_version(alias, printer).context("failed to write version")?,
        Mode::Help => print_help(alias, printer).context("failed to write help")?,
        Mode::Execute => execute_stages(alias, printer)?,
    }
    Ok(())
}

pub fn print_version<W: Write>(
    alias: &AliasDefinition,
    printer: &mut Printer<W>,
) -> io::Result<()> {
    if !alias.hide_base_version {
        printer.print(&["Version=", VERSION, "\n"])?;
    }
    if let Some(custom) = alias.custom_version.as_deref().filter(|s| !s.is_empty()) {
        printer.print(&[custom, "\n"])?;
    }
    Ok(())
}

pub fn print_help<W: Write>(
    alias: &AliasDefinition,
    printer: &mut Printer<W>,
) -> io::Result<()> {
    if !alias.hide_base_help {
        printer.print(&[BASE_HELP])?;
    }
    if let Some(custom) = alias.custom_help.as_deref().filter(|s| !s.is_empty()) {
        printer.print(&[custom, "\n"])?;
    }
    Ok(())
}

/// Runs every stage in order; the first fatal error stops the rest.
pub fn execute_stages<W: Write>(
    alias: &AliasDefinition,
    printer: &mut Printer<W>,
) -> Result<()> {
    for (i, st) in alias.stages.iter().enumerate() {
        stage::execute(i, st, printer)?;
    }
    printer.print(&["\n"])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::StageDefinition, stage::StageError, style::STYLE_RESET};

    fn capture(alias: &AliasDefinition, mode: Mode) -> (Result<()>, String) {
        let mut p = Printer::new(Vec::new());
        let res = run_with(alias, mode, &mut p);
        (res, String::from_utf8(p.into_inner()).unwrap())
    }

    fn cmd(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn version_prints_base_then_custom() {
        let alias = AliasDefinition {
            custom_version: Some("wrapper 2.0".into()),
            ..Default::default()
        };
        let (res, out) = capture(&alias, Mode::Version);
        res.unwrap();
        assert_eq!(
            out,
            format!("Version={VERSION}\n{STYLE_RESET}wrapper 2.0\n{STYLE_RESET}")
        );
    }

    #[test]
    fn hidden_base_version() {
        let alias = AliasDefinition {
            hide_base_version: true,
            ..Default::default()
        };
        let (res, out) = capture(&alias, Mode::Version);
        res.unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn help_prints_base_then_custom_and_skips_stages() {
        let alias = AliasDefinition {
            custom_help: Some("EXTRA".into()),
            stages: vec![StageDefinition {
                cmd: cmd(&["echo", "should not run"]),
                print_stdout: true,
                ..Default::default()
            }],
            ..Default::default()
        };
        let (res, out) = capture(&alias, Mode::Help);
        res.unwrap();
        assert!(out.contains("toml-alias"));
        assert!(out.contains("-V, --version"));
        assert!(out.ends_with(&format!("EXTRA\n{STYLE_RESET}")));
        assert!(!out.contains("[style."));
        assert!(!out.contains("should not run"));
    }

    #[test]
    fn hidden_base_help_leaves_custom_only() {
        let alias = AliasDefinition {
            hide_base_help: true,
            custom_help: Some("[style.green]usage: deploy".into()),
            ..Default::default()
        };
        let (res, out) = capture(&alias, Mode::Help);
        res.unwrap();
        assert_eq!(out, format!("\x1b[32musage: deploy\n{STYLE_RESET}"));
    }

    #[test]
    fn empty_alias_executes_to_blank_line() {
        let (res, out) = capture(&AliasDefinition::default(), Mode::Execute);
        res.unwrap();
        assert_eq!(out, format!("\n{STYLE_RESET}"));
    }

    #[cfg(unix)]
    #[test]
    fn stages_run_in_order_with_trailer() {
        let alias = AliasDefinition {
            stages: vec![
                StageDefinition {
                    cmd: cmd(&["echo", "hi"]),
                    print_stdout: true,
                    ..Default::default()
                },
                StageDefinition {
                    cmd: cmd(&["false"]),
                    match_stdout: Some("^x$".into()),
                    on_failure: "[style.red]FAIL[style.reset]".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let (res, out) = capture(&alias, Mode::Execute);
        res.unwrap();
        assert_eq!(
            out,
            format!(
                "hi\n\n{r}\x1b[31mFAIL{r}\n{r}\n{r}",
                r = STYLE_RESET
            )
        );
    }

    #[cfg(unix)]
    #[test]
    fn later_invalid_stage_aborts_after_earlier_ran() {
        let alias = AliasDefinition {
            stages: vec![
                StageDefinition {
                    cmd: cmd(&["echo", "first"]),
                    print_stdout: true,
                    ..Default::default()
                },
                StageDefinition::default(),
                StageDefinition {
                    cmd: cmd(&["echo", "third"]),
                    print_stdout: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let (res, out) = capture(&alias, Mode::Execute);
        let err = res.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StageError>(),
            Some(StageError::EmptyCommand { stage: 2 })
        ));
        assert!(out.contains("first"));
        assert!(!out.contains("third"));
        assert!(!out.ends_with(&format!("\n{STYLE_RESET}\n{STYLE_RESET}")));
    }
}
