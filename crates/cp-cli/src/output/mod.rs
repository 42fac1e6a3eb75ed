//! Output formatting utilities for the CLI
//!
//! Report lines go to stdout with an `[INFO]` or `[ERROR]` tag. The tag is
//! colored only when stdout is a terminal, so piped output stays plain.

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;

/// Tag for informational lines
pub const INFO_TAG: &str = "[INFO]";

/// Tag for error lines
pub const ERROR_TAG: &str = "[ERROR]";

/// Build a report line without color
pub fn format_line(tag: &str, msg: &str) -> String {
    format!("{}: {}", tag, msg)
}

fn print_tagged(tag: &str, color: Color, msg: &str) {
    let mut stdout = std::io::stdout();

    if !stdout.is_tty() {
        println!("{}", format_line(tag, msg));
        return;
    }

    let _ = crossterm::execute!(
        stdout,
        SetForegroundColor(color),
        Print(tag),
        ResetColor,
        Print(": "),
        Print(msg),
        Print("\n")
    );
}

/// Print an informational message with a cyan `[INFO]` tag
pub fn print_info(msg: &str) {
    print_tagged(INFO_TAG, Color::Cyan, msg);
}

/// Print an error message with a red `[ERROR]` tag
///
/// Errors share stdout with the informational lines so the report reads
/// in order.
pub fn print_error(msg: &str) {
    print_tagged(ERROR_TAG, Color::Red, msg);
}
