use std::io::{self, Write};

use crate::{config::StageDefinition, style::Printer};

/// Stage trailer: `print-on-end` plus a space, then the result token and a newline.
pub fn present<W: Write>(
    stage: &StageDefinition,
    token: &str,
    printer: &mut Printer<W>,
) -> io::Result<()> {
    if !stage.on_end.is_empty() {
        printer.print(&[stage.on_end.as_str(), " "])?;
    }

    if !token.is_empty() {
        printer.print(&[token, "\n"])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::STYLE_RESET;

    fn render(on_end: &str, token: &str) -> String {
        let stage = StageDefinition {
            on_end: on_end.into(),
            ..Default::default()
        };
        let mut p = Printer::new(Vec::new());
        present(&stage, token, &mut p).unwrap();
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn nothing_when_both_empty() {
        assert_eq!(render("", ""), "");
    }

    #[test]
    fn end_text_without_newline() {
        assert_eq!(render("Checked:", ""), format!("Checked: {STYLE_RESET}"));
    }

    #[test]
    fn token_alone() {
        assert_eq!(
            render("", "[style.red]FAIL[style.reset]"),
            format!("\x1b[31mFAIL{STYLE_RESET}\n{STYLE_RESET}")
        );
    }

    #[test]
    fn end_then_token() {
        assert_eq!(
            render("[style.bold]build", "ok"),
            format!("\x1b[1mbuild {STYLE_RESET}ok\n{STYLE_RESET}")
        );
    }
}
