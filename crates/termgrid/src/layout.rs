//! Column width negotiation.
//!
//! A table costs one leading border character plus, per column, its width
//! and one trailing separator. Columns are admitted left to right until the
//! running total would exceed the terminal budget; everything after that is
//! dropped. When columns were dropped and some columns are resizable, every
//! resizable column is narrowed by one per pass (never below its header
//! width) and the budget is re-negotiated after each full pass, until the
//! table fits or nothing can shrink any further.

use tracing::{debug, trace};

use crate::attrs::ColumnAttrs;
use crate::measure::visual_length;

/// Outcome of fitting column widths into a width budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Budget {
    /// Number of leading columns that fit.
    pub visible: usize,
    /// Border plus width and separator of every fitting column.
    pub table_width: usize,
    /// True when at least one column did not fit.
    pub truncated: bool,
}

/// Admits columns left to right while `1 + Σ(width + 1)` stays within `budget`.
///
/// # Example
///
/// ```rust
/// use termgrid::layout::negotiate;
///
/// let fit = negotiate(&[2, 5], 80);
/// assert_eq!((fit.visible, fit.table_width, fit.truncated), (2, 10, false));
///
/// let fit = negotiate(&[2, 5], 6);
/// assert_eq!((fit.visible, fit.table_width, fit.truncated), (1, 4, true));
/// ```
pub fn negotiate(widths: &[usize], budget: usize) -> Budget {
    let mut table_width = 1;
    for (i, width) in widths.iter().enumerate() {
        if table_width + width + 1 > budget {
            return Budget {
                visible: i,
                table_width,
                truncated: true,
            };
        }
        table_width += width + 1;
    }
    Budget {
        visible: widths.len(),
        table_width,
        truncated: false,
    }
}

/// Final column widths for one rendering call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Width of every column, including the ones that did not fit.
    pub widths: Vec<usize>,
    /// Result of the last negotiation against the budget.
    pub budget: Budget,
}

impl Layout {
    /// Negotiates `natural` widths against `budget`, shrinking resizable
    /// columns toward their `floors` when the table does not fit.
    ///
    /// `natural`, `floors` and `attrs` must have the same length.
    pub fn fit(natural: Vec<usize>, floors: &[usize], attrs: &[ColumnAttrs], budget: usize) -> Self {
        let mut widths = natural;
        let mut fit = negotiate(&widths, budget);
        trace!(?widths, budget, "natural column widths");

        if !fit.truncated || !attrs.iter().any(|a| a.resizable) {
            return Layout {
                widths,
                budget: fit,
            };
        }

        debug!(
            visible = fit.visible,
            columns = widths.len(),
            budget,
            "table too wide, shrinking resizable columns"
        );

        let mut passes = 0usize;
        while fit.truncated {
            let mut shrunk = false;
            for ((width, floor), attr) in widths.iter_mut().zip(floors).zip(attrs) {
                if attr.resizable && *width > *floor {
                    *width -= 1;
                    shrunk = true;
                }
            }
            if !shrunk {
                break;
            }
            passes += 1;
            fit = negotiate(&widths, budget);
            debug!(
                passes,
                visible = fit.visible,
                table_width = fit.table_width,
                "shrink pass"
            );
        }

        debug!(
            passes,
            visible = fit.visible,
            truncated = fit.truncated,
            ?widths,
            "shrink finished"
        );

        Layout {
            widths,
            budget: fit,
        }
    }

    /// Number of columns that are drawn.
    ///
    /// At least one column is always drawn, even when it alone exceeds the
    /// budget.
    pub fn rendered_columns(&self) -> usize {
        self.budget.visible.max(1).min(self.widths.len())
    }

    /// Widths of the drawn columns.
    pub fn rendered_widths(&self) -> &[usize] {
        &self.widths[..self.rendered_columns()]
    }

    /// Width of a horizontal rule spanning the drawn columns.
    pub fn rule_width(&self) -> usize {
        1 + self.rendered_widths().iter().map(|w| w + 1).sum::<usize>()
    }

    /// True when some column did not fit the budget, including a lone
    /// column that is drawn anyway.
    pub fn is_column_truncated(&self) -> bool {
        self.budget.truncated
    }
}

/// Widest visual length per column across the heading labels and `rows`.
///
/// Rows shorter than `labels` only contribute to the columns they have.
pub fn natural_widths<S: AsRef<str>>(
    labels: &[S],
    sublabels: Option<&[S]>,
    rows: &[Vec<String>],
) -> Vec<usize> {
    let mut widths = header_widths(labels, sublabels);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(visual_length(cell));
        }
    }
    widths
}

/// Widest heading label per column: the floor no column shrinks below.
pub fn header_widths<S: AsRef<str>>(labels: &[S], sublabels: Option<&[S]>) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let sub = sublabels
                .and_then(|s| s.get(i))
                .map_or(0, |s| visual_length(s.as_ref()));
            visual_length(label.as_ref()).max(sub)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(flags: &[&str]) -> Vec<ColumnAttrs> {
        ColumnAttrs::parse_all(flags).unwrap()
    }

    #[test]
    fn test_negotiate_everything_fits() {
        let fit = negotiate(&[3, 4, 5], 100);
        assert_eq!(fit.visible, 3);
        assert_eq!(fit.table_width, 1 + 4 + 5 + 6);
        assert!(!fit.truncated);
    }

    #[test]
    fn test_negotiate_exact_budget_fits() {
        let fit = negotiate(&[3, 4], 1 + 4 + 5);
        assert!(!fit.truncated);
        assert_eq!(fit.visible, 2);
    }

    #[test]
    fn test_negotiate_one_over_truncates() {
        let fit = negotiate(&[3, 4], 9);
        assert!(fit.truncated);
        assert_eq!(fit.visible, 1);
        assert_eq!(fit.table_width, 5);
    }

    #[test]
    fn test_negotiate_first_column_too_wide() {
        let fit = negotiate(&[50, 2], 10);
        assert!(fit.truncated);
        assert_eq!(fit.visible, 0);
        assert_eq!(fit.table_width, 1);
    }

    #[test]
    fn test_negotiate_no_columns() {
        let fit = negotiate(&[], 0);
        assert_eq!(fit.visible, 0);
        assert!(!fit.truncated);
    }

    #[test]
    fn test_fit_without_resizable_columns_drops_columns() {
        let layout = Layout::fit(vec![2, 5], &[2, 4], &attrs(&["R", "L"]), 6);
        assert_eq!(layout.widths, vec![2, 5]);
        assert_eq!(layout.rendered_columns(), 1);
        assert!(layout.is_column_truncated());
        assert_eq!(layout.rule_width(), 4);
    }

    #[test]
    fn test_fit_shrinks_until_it_fits() {
        // 1 + 5 + 21 = 27 > 20; the wrap column must lose 7.
        let layout = Layout::fit(vec![4, 20], &[4, 4], &attrs(&["", "M"]), 20);
        assert_eq!(layout.widths, vec![4, 13]);
        assert!(!layout.budget.truncated);
        assert_eq!(layout.rule_width(), 20);
    }

    #[test]
    fn test_fit_shrinks_all_resizable_columns_per_pass() {
        let layout = Layout::fit(vec![10, 10], &[2, 2], &attrs(&["W", "W"]), 19);
        // 1 + 11 + 11 = 23; two passes bring it to 1 + 9 + 9 = 19.
        assert_eq!(layout.widths, vec![8, 8]);
        assert!(!layout.budget.truncated);
    }

    #[test]
    fn test_fit_stops_at_header_floor() {
        let layout = Layout::fit(vec![4, 12], &[4, 10], &attrs(&["", "W"]), 10);
        assert_eq!(layout.widths, vec![4, 10]);
        assert!(layout.budget.truncated);
        assert_eq!(layout.rendered_columns(), 1);
    }

    #[test]
    fn test_fit_leaves_fixed_columns_alone() {
        let layout = Layout::fit(vec![9, 9], &[1, 1], &attrs(&["R", "W"]), 15);
        assert_eq!(layout.widths[0], 9);
        assert_eq!(layout.widths[1], 3);
    }

    #[test]
    fn test_rendered_columns_at_least_one() {
        let layout = Layout::fit(vec![30], &[30], &attrs(&[""]), 10);
        assert_eq!(layout.budget.visible, 0);
        assert_eq!(layout.rendered_columns(), 1);
        assert!(layout.is_column_truncated());
        assert_eq!(layout.rule_width(), 32);
    }

    #[test]
    fn test_natural_widths_uses_visual_length() {
        let rows = vec![
            vec!["1".to_string(), "\x1b[31mAlice\x1b[0m".to_string()],
            vec!["22".to_string(), "Bob".to_string()],
        ];
        assert_eq!(natural_widths(&["ID", "NAME"], None, &rows), vec![2, 5]);
    }

    #[test]
    fn test_natural_widths_includes_second_heading() {
        let rows = vec![vec!["x".to_string()]];
        assert_eq!(
            natural_widths(&["A"], Some(&["longer"][..]), &rows),
            vec![6]
        );
    }

    #[test]
    fn test_header_widths() {
        assert_eq!(
            header_widths(&["Name", "Id"], Some(&["", "Number"][..])),
            vec![4, 6]
        );
    }
}
