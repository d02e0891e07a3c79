//! Greedy paragraph wrapping.
//!
//! Wrapping works on raw character counts, not visual length. Cells that
//! carry escape sequences must not be routed through a wrap column.

/// Wraps `s` into lines of at most `width` characters and joins them with `\n`.
///
/// Whitespace runs (spaces, tabs, line breaks) collapse to single spaces
/// first. Words are never split: a word longer than `width` gets a line of
/// its own and overflows. Continuation lines start with `indent` spaces.
/// Each line keeps one trailing space when that space still fits within
/// `width`.
///
/// # Example
///
/// ```rust
/// use termgrid::wrap;
///
/// assert_eq!(wrap("the quick brown fox", 10, 2), "the quick \n  brown \n  fox ");
/// assert_eq!(wrap("", 10, 0), "");
/// ```
pub fn wrap(s: &str, width: usize, indent: usize) -> String {
    wrap_lines(s, width, indent).join("\n")
}

/// Same as [`wrap`], returning the lines instead of joining them.
///
/// Empty or whitespace-only input yields no lines.
pub fn wrap_lines(s: &str, width: usize, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in normalize(s).split(' ').filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();

        if line_len == 0 {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len <= width {
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            lines.push(close_line(line, line_len, width));
            line = format!("{}{}", " ".repeat(indent), word);
            line_len = indent + word_len;
        }
    }

    if line_len != 0 {
        lines.push(close_line(line, line_len, width));
    }

    lines
}

/// Collapses every whitespace run to a single space. Carriage returns vanish.
fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for c in s.chars().filter(|&c| c != '\r') {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out
}

fn close_line(mut line: String, line_len: usize, width: usize) -> String {
    if line_len < width {
        line.push(' ');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(wrap("", 10, 0), "");
        assert_eq!(wrap(" \t\n ", 10, 4), "");
        assert!(wrap_lines("", 10, 0).is_empty());
    }

    #[test]
    fn test_fits_on_one_line() {
        assert_eq!(wrap("hello world", 20, 0), "hello world ");
    }

    #[test]
    fn test_exact_fit_drops_trailing_space() {
        assert_eq!(wrap("hello world", 11, 0), "hello world");
    }

    #[test]
    fn test_greedy_break() {
        assert_eq!(
            wrap_lines("aaa bbb ccc ddd", 7, 0),
            vec!["aaa bbb", "ccc ddd"]
        );
    }

    #[test]
    fn test_continuation_indent() {
        assert_eq!(
            wrap_lines("one two three four", 9, 3),
            vec!["one two ", "   three ", "   four "]
        );
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(wrap("a\tb\r\nc   d", 80, 0), "a b c d ");
    }

    #[test]
    fn test_long_word_overflows_unsplit() {
        assert_eq!(
            wrap_lines("supercalifragilistic is long", 8, 0),
            vec!["supercalifragilistic", "is long "]
        );
    }

    #[test]
    fn test_long_word_on_continuation_line_is_indented() {
        assert_eq!(
            wrap_lines("ab abcdefghij", 5, 2),
            vec!["ab ", "  abcdefghij"]
        );
    }

    #[test]
    fn test_zero_width_puts_each_word_on_its_own_line() {
        assert_eq!(wrap_lines("a b c", 0, 0), vec!["a", "b", "c"]);
    }
}
