//! Visual-length measurement and escape-aware padding.
//!
//! Terminal cells often carry invisible bytes: SGR color codes
//! (`ESC[31m ... ESC[0m`) and OSC 8 hyperlinks
//! (`ESC]8;;uri ESC\ label ESC]8;; ESC\`). Those bytes occupy no columns, so
//! every width decision in this crate goes through [`visual_length`] instead
//! of counting characters directly.
//!
//! # Known limitation
//!
//! Only the first wrapper in a string is recognized. A string holding two
//! independently colored segments is measured as if the second segment's
//! escape codes were visible text. Callers that need several colored runs in
//! one cell should use an auto-width column (`A`) and size the content
//! themselves.

use once_cell::sync::Lazy;
use regex::Regex;

const ESC: char = '\x1b';
const BEL: char = '\x07';

static HYPERLINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\]8;;(.*?)\x1b\\(.*?)\x1b\]8;;\x1b\\").expect("hyperlink pattern is valid")
});

static COLOR_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[\d+m\x1b\[\d+m(.*?)\x1b\[0m").expect("color pair pattern is valid")
});

static COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[\d+m(.*?)\x1b\[0m").expect("color pattern is valid"));

/// Returns the number of terminal columns `s` occupies when printed.
///
/// The first hyperlink wrapper, or failing that the first color wrapper (one
/// or two opening codes followed by a reset), contributes only its visible
/// label. Text outside the wrapper counts one column per character. Strings
/// without a recognized wrapper are measured by character count.
///
/// # Example
///
/// ```rust
/// use termgrid::visual_length;
///
/// assert_eq!(visual_length("hello"), 5);
/// assert_eq!(visual_length("\x1b[31m\x1b[40mred\x1b[0m"), 3);
/// assert_eq!(visual_length("\x1b]8;;https://example.com\x1b\\docs\x1b]8;;\x1b\\"), 4);
/// ```
pub fn visual_length(s: &str) -> usize {
    let total = s.chars().count();

    // Group 2 of the hyperlink pattern and group 1 of the color patterns hold
    // the visible label.
    let found = HYPERLINK
        .captures(s)
        .map(|caps| (caps.get(0), caps.get(2)))
        .or_else(|| COLOR_PAIR.captures(s).map(|caps| (caps.get(0), caps.get(1))))
        .or_else(|| COLOR.captures(s).map(|caps| (caps.get(0), caps.get(1))));

    match found {
        Some((Some(whole), Some(label))) => {
            total - whole.as_str().chars().count() + label.as_str().chars().count()
        }
        _ => total,
    }
}

/// Hard-cuts `s` to at most `width` visible columns, without an ellipsis.
///
/// Escape sequences are copied through even after the cut point, so a
/// clipped colored or linked cell still closes its reset and link
/// terminators.
///
/// # Example
///
/// ```rust
/// use termgrid::clip;
///
/// assert_eq!(clip("Alexander", 4), "Alex");
/// assert_eq!(clip("\x1b[32mgreen\x1b[0m", 2), "\x1b[32mgr\x1b[0m");
/// ```
pub fn clip(s: &str, width: usize) -> String {
    if visual_length(s) <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut visible = 0;
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        if c == ESC {
            let len = escape_len(rest);
            result.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        if visible < width {
            result.push(c);
            visible += 1;
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}

/// Pads `s` on the right to `width` visible columns (left alignment).
///
/// Content already at or beyond `width` is returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visual_length(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Pads `s` on the left to `width` visible columns (right alignment).
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visual_length(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Centers `s` within `width` visible columns.
///
/// When the padding is odd, the extra space goes on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visual_length(s));
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
}

/// Byte length of the escape sequence starting at the beginning of `s`.
///
/// Handles CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or `ESC ] ... ESC \`)
/// and two-character escapes. An unterminated sequence runs to the end.
fn escape_len(s: &str) -> usize {
    let mut chars = s.char_indices().skip(1);
    match chars.next() {
        Some((_, '[')) => {
            for (i, c) in chars {
                if ('@'..='~').contains(&c) {
                    return i + c.len_utf8();
                }
            }
            s.len()
        }
        Some((_, ']')) => {
            let mut prev_esc = false;
            for (i, c) in chars {
                if c == BEL || (prev_esc && c == '\\') {
                    return i + c.len_utf8();
                }
                prev_esc = c == ESC;
            }
            s.len()
        }
        Some((i, c)) => i + c.len_utf8(),
        None => s.len(),
    }
}
