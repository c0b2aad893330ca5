//! Styled output: ratatui `Line`s for embedding in a TUI, and ANSI-colored
//! text for printing straight to a terminal.

use crate::text::{sanitize_terminal_text, strip_ansi};
use crate::tree::{Fragment, FragmentKind, TreeBlock};
use crossterm::style::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::io::{self, Write};

/// Configuration for the styling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to emit color styling.
    pub use_color: bool,
}

const LABEL_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
const BRANCH_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Convert one line of fragments into a styled `Line`.
///
/// ratatui does its own styling, so escape sequences inside labels are
/// dropped and any remaining control characters are made visible.
pub fn fragments_to_line(fragments: &[Fragment], config: &RenderConfig) -> Line<'static> {
    let spans: Vec<Span<'static>> = fragments
        .iter()
        .map(|fragment| match fragment.kind {
            FragmentKind::Space => Span::raw(fragment.text.clone()),
            FragmentKind::Label => {
                let safe = sanitize_terminal_text(&strip_ansi(&fragment.text));
                if config.use_color {
                    Span::styled(safe, LABEL_STYLE)
                } else {
                    Span::raw(safe)
                }
            }
            FragmentKind::Branch => {
                if config.use_color {
                    Span::styled(fragment.text.clone(), BRANCH_STYLE)
                } else {
                    Span::raw(fragment.text.clone())
                }
            }
        })
        .collect();
    Line::from(spans)
}

/// Convert a rendered tree into styled ratatui `Line`s, padded to the block width.
pub fn tree_to_lines(block: &TreeBlock, config: &RenderConfig) -> Vec<Line<'static>> {
    rows_to_lines(&block.fragment_lines(), config)
}

/// Convert fragment lines (from a block or from packed rows) into `Line`s.
pub fn rows_to_lines(lines: &[Vec<Fragment>], config: &RenderConfig) -> Vec<Line<'static>> {
    lines
        .iter()
        .map(|line| fragments_to_line(line, config))
        .collect()
}

/// Extract plain text from a `Line`.
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Write fragment lines to `writer`, coloring branches and emboldening
/// labels when color is on. Labels keep their own escape sequences.
pub fn write_lines<W: Write>(
    writer: &mut W,
    lines: &[Vec<Fragment>],
    config: &RenderConfig,
) -> io::Result<()> {
    for line in lines {
        for fragment in line {
            let text = fragment.text.as_str();
            match fragment.kind {
                FragmentKind::Label if config.use_color => write!(writer, "{}", text.bold())?,
                FragmentKind::Branch if config.use_color => {
                    write!(writer, "{}", text.dark_grey())?
                }
                _ => writer.write_all(text.as_bytes())?,
            }
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}
