//! Terminal width discovery.

use console::Term;

/// Width reported when stdout is not a terminal (redirected to a file or pipe).
pub const UNBOUNDED_WIDTH: usize = 9999;

/// Assumed terminal width when a terminal does not report its size.
pub const FALLBACK_WIDTH: usize = 80;

/// Gets the current terminal width, or None if not available.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Column budget for output written to stdout.
///
/// On a terminal this is the terminal width minus one, so a full-width line
/// never triggers the terminal's automatic wrap. Redirected output gets
/// [`UNBOUNDED_WIDTH`].
pub fn console_width() -> usize {
    budget_for(Term::stdout().is_term(), terminal_width())
}

fn budget_for(is_term: bool, reported: Option<usize>) -> usize {
    if is_term {
        reported.unwrap_or(FALLBACK_WIDTH).saturating_sub(1)
    } else {
        UNBOUNDED_WIDTH
    }
}
