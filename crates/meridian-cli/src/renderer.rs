//! Terminal rendering of markdown panels
//!
//! Panels from `meridian-core` are markdown. With color enabled they are
//! styled with termimad; otherwise they are printed as they are.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        // Formatted zone times are bold.
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            // Headers keep their hashes so zone names stand out in a scroll.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(stdout, "\x1b[34m{line}\x1b[0m")?;
                } else {
                    writeln!(stdout, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(stdout, "{markdown}")?;
        }
        stdout.flush().context("Failed to write to stdout")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
