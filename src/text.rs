//! Visible width of labels and terminal-safe text.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

/// CSI sequences (SGR colors like `\x1b[31m`) and OSC sequences (window
/// titles, hyperlinks) ended by BEL or ST.
static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[^0-9;?]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .expect("valid ANSI pattern")
});

/// Remove ANSI escape sequences, leaving only the text a terminal would show.
pub fn strip_ansi(input: &str) -> String {
    ANSI_RE.replace_all(input, "").into_owned()
}

/// Number of terminal columns `input` occupies, ignoring escape sequences
/// and counting wide characters as two columns.
pub fn display_width(input: &str) -> usize {
    if input.contains('\x1b') {
        strip_ansi(input).width()
    } else {
        input.width()
    }
}

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}
