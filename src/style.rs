//! `[style.*]` tag substitution for terminal output.

use std::io::{self, Write};

pub const STYLE_RESET: &str = "\x1b[0m";

const TAG_OPEN: &str = "[style.";

/// Tag → ANSI escape sequence.
pub static STYLE_TABLE: &[(&str, &str)] = &[
    // foreground
    ("[style.black]", "\x1b[30m"),
    ("[style.red]", "\x1b[31m"),
    ("[style.green]", "\x1b[32m"),
    ("[style.yellow]", "\x1b[33m"),
    ("[style.blue]", "\x1b[34m"),
    ("[style.magenta]", "\x1b[35m"),
    ("[style.cyan]", "\x1b[36m"),
    ("[style.white]", "\x1b[37m"),
    ("[style.gray]", "\x1b[90m"),
    ("[style.bright.red]", "\x1b[91m"),
    ("[style.bright.green]", "\x1b[92m"),
    ("[style.bright.yellow]", "\x1b[93m"),
    ("[style.bright.blue]", "\x1b[94m"),
    ("[style.bright.magenta]", "\x1b[95m"),
    ("[style.bright.cyan]", "\x1b[96m"),
    ("[style.bright.white]", "\x1b[97m"),
    // font
    ("[style.bold]", "\x1b[1m"),
    ("[style.italic]", "\x1b[3m"),
    ("[style.underline]", "\x1b[4m"),
    ("[style.strikethrough]", "\x1b[9m"),
    // general
    ("[style.reset]", STYLE_RESET),
];

#[derive(Debug, Clone, Copy)]
pub struct StyleRenderer {
    table: &'static [(&'static str, &'static str)],
}

impl Default for StyleRenderer {
    fn default() -> Self {
        Self { table: STYLE_TABLE }
    }
}

impl StyleRenderer {
    /// Replaces every known tag in a single left-to-right pass.
    /// Unknown `[style.…]` text is copied through untouched.
    pub fn render(&self, input: &str) -> String {
        // Fast path
        if !input.contains(TAG_OPEN) {
            return input.to_string();
        }

        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(pos) = rest.find(TAG_OPEN) {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];

            match self.lookup(rest) {
                Some((tag, code)) => {
                    out.push_str(code);
                    rest = &rest[tag.len()..];
                }
                None => {
                    out.push('[');
                    rest = &rest[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn lookup(&self, at: &str) -> Option<(&'static str, &'static str)> {
        self.table
            .iter()
            .find(|(tag, _)| at.starts_with(tag))
            .copied()
    }
}

/// Writes styled text to a sink. Every `print` ends with a reset.
pub struct Printer<W: Write> {
    out: W,
    renderer: StyleRenderer,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            renderer: StyleRenderer::default(),
        }
    }

    /// Renders each segment on its own, then writes them joined plus the reset sequence.
    pub fn print(&mut self, segments: &[&str]) -> io::Result<()> {
        let mut line = String::new();
        for seg in segments {
            line.push_str(&self.renderer.render(seg));
        }
        line.push_str(STYLE_RESET);

        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
