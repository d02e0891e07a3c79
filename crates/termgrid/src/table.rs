//! Bordered table rendering.
//!
//! # Example
//!
//! ```rust
//! use termgrid::Table;
//!
//! let table = Table::with_attributes(["ID", "NAME"], &["R", "L"])
//!     .unwrap()
//!     .width(80);
//!
//! let lines = table
//!     .render(&[vec!["1", "Alice"], vec!["22", "Bob"]])
//!     .unwrap();
//!
//! assert_eq!(
//!     lines,
//!     vec![
//!         "----------",
//!         "|ID|NAME |",
//!         "----------",
//!         "| 1|Alice|",
//!         "|22|Bob  |",
//!         "----------",
//!     ]
//! );
//! ```

use std::fmt::Display;
use std::io::Write;

use console::Term;
use tracing::debug;

use crate::attrs::{Align, ColumnAttrs};
use crate::error::{Result, TableError};
use crate::layout::{header_widths, natural_widths, Layout};
use crate::measure::{clip, pad_center, pad_left, pad_right, visual_length};
use crate::terminal::console_width;
use crate::wrap::wrap_lines;

/// First-cell value that turns a row into a horizontal rule.
pub const SEPARATOR_ID: &str = "$SEP$";

const RULE: char = '-';
const BORDER: char = '|';

/// A row that renders as a horizontal rule.
///
/// ```rust
/// use termgrid::{separator_row, SEPARATOR_ID};
///
/// let row: Vec<String> = separator_row();
/// assert_eq!(row, vec![SEPARATOR_ID.to_string()]);
/// ```
pub fn separator_row<S: From<&'static str>>() -> Vec<S> {
    vec![S::from(SEPARATOR_ID)]
}

/// A table definition: headings, column attributes and a width budget.
///
/// Rendering is call-scoped; a `Table` can render any number of row sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    heading: Vec<String>,
    subheading: Option<Vec<String>>,
    columns: Vec<ColumnAttrs>,
    width: Option<usize>,
}

/// Rows after text conversion, with separators marked as `None`.
type PreparedRows = Vec<Option<Vec<String>>>;

impl Table {
    /// Create a table with one heading label and one attribute set per column.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(
        heading: I,
        columns: Vec<ColumnAttrs>,
    ) -> Self {
        Table {
            heading: heading.into_iter().map(Into::into).collect(),
            subheading: None,
            columns,
            width: None,
        }
    }

    /// Create a table from attribute strings such as `"R"` or `"LM"`.
    pub fn with_attributes<S, I, A>(heading: I, attributes: &[A]) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
        A: AsRef<str>,
    {
        Ok(Self::new(heading, ColumnAttrs::parse_all(attributes)?))
    }

    /// Set a second heading row, one label per column.
    pub fn subheading<S: Into<String>, I: IntoIterator<Item = S>>(mut self, labels: I) -> Self {
        self.subheading = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Set the width budget. Without one, [`console_width`] is queried at
    /// render time.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.heading.len()
    }

    /// Column attributes.
    pub fn columns(&self) -> &[ColumnAttrs] {
        &self.columns
    }

    fn budget(&self) -> usize {
        self.width.unwrap_or_else(console_width)
    }

    /// Computes the final column widths `rows` would be rendered with.
    pub fn layout<S: Display>(&self, rows: &[Vec<S>]) -> Result<Layout> {
        let rows = self.prepare(rows)?;
        Ok(self.fit(&rows, self.budget()))
    }

    /// Renders `rows` into lines ready to print.
    ///
    /// Zero rows render nothing. Rows whose first cell is [`SEPARATOR_ID`]
    /// become horizontal rules; every other row must have one cell per column.
    pub fn render<S: Display>(&self, rows: &[Vec<S>]) -> Result<Vec<String>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self.prepare(rows)?;
        let budget = self.budget();
        let layout = self.fit(&rows, budget);
        let shown = layout.rendered_columns();
        let widths = layout.rendered_widths();
        let rule = RULE.to_string().repeat(layout.rule_width());

        let mut output = Vec::with_capacity(rows.len() + 6);
        output.push(rule.clone());
        output.push(header_line(&self.heading, widths));
        if let Some(subheading) = &self.subheading {
            output.push(header_line(subheading, widths));
        }
        output.push(rule.clone());

        for row in &rows {
            match row {
                None => output.push(rule.clone()),
                Some(cells) => {
                    let lines = self.expand(&cells[..shown], widths);
                    output.extend(lines.into_iter().filter(|line| !is_blank(line)));
                }
            }
        }
        output.push(rule);

        if layout.is_column_truncated() {
            debug!(
                shown,
                columns = self.num_columns(),
                budget,
                "table wider than budget"
            );
            output.push(format!(
                "Displaying {} columns out of {} columns due to console width ({} columns)",
                shown,
                self.num_columns(),
                budget
            ));
        }

        Ok(output)
    }

    /// Renders `rows` and writes them to stdout.
    pub fn print<S: Display>(&self, rows: &[Vec<S>]) -> Result<()> {
        let mut term = Term::stdout();
        self.print_to(&mut term, rows)
    }

    /// Renders `rows` and writes them to `out` in a single write.
    pub fn print_to<W: Write, S: Display>(&self, out: &mut W, rows: &[Vec<S>]) -> Result<()> {
        let lines = self.render(rows)?;
        if lines.is_empty() {
            return Ok(());
        }
        let mut buffer = lines.join("\n");
        buffer.push('\n');
        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Validates shapes and converts every cell to single-line text.
    fn prepare<S: Display>(&self, rows: &[Vec<S>]) -> Result<PreparedRows> {
        let expected = self.heading.len();
        if expected == 0 {
            return Err(TableError::EmptyHeading);
        }
        if self.columns.len() != expected {
            return Err(TableError::AttributeCount {
                expected,
                actual: self.columns.len(),
            });
        }
        if let Some(subheading) = &self.subheading {
            if subheading.len() != expected {
                return Err(TableError::HeadingLength {
                    expected,
                    actual: subheading.len(),
                });
            }
        }

        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let cells: Vec<String> = row.iter().map(|cell| single_line(cell)).collect();
                if cells.first().map(String::as_str) == Some(SEPARATOR_ID) {
                    return Ok(None);
                }
                if cells.len() != expected {
                    return Err(TableError::RowLength {
                        row: index,
                        expected,
                        actual: cells.len(),
                    });
                }
                Ok(Some(cells))
            })
            .collect()
    }

    fn fit(&self, rows: &PreparedRows, budget: usize) -> Layout {
        let data: Vec<Vec<String>> = rows.iter().flatten().cloned().collect();
        let natural = natural_widths(&self.heading, self.subheading.as_deref(), &data);
        let floors = header_widths(&self.heading, self.subheading.as_deref());
        Layout::fit(natural, &floors, &self.columns, budget)
    }

    /// Splits one data row into physical lines. Wrap columns contribute one
    /// sub-line per wrapped line; shorter columns are padded with blanks.
    fn expand(&self, cells: &[String], widths: &[usize]) -> Vec<String> {
        let sublines: Vec<Vec<String>> = cells
            .iter()
            .zip(widths)
            .zip(&self.columns)
            .map(|((cell, &width), attrs)| {
                if attrs.wrap {
                    let lines = wrap_lines(cell, width, 0);
                    if lines.is_empty() {
                        vec![String::new()]
                    } else {
                        lines
                    }
                } else {
                    vec![cell.clone()]
                }
            })
            .collect();

        let height = sublines.iter().map(Vec::len).max().unwrap_or(1);
        (0..height)
            .map(|line| {
                let mut out = String::from(BORDER);
                for ((column, &width), attrs) in sublines.iter().zip(widths).zip(&self.columns) {
                    let text = column.get(line).map_or("", String::as_str);
                    out.push_str(&render_cell(text, width, attrs));
                    out.push(BORDER);
                }
                out
            })
            .collect()
    }
}

/// Cuts and aligns one cell to `width`.
fn render_cell(text: &str, width: usize, attrs: &ColumnAttrs) -> String {
    if attrs.auto_width {
        return match attrs.auto_alignment() {
            Align::Left => pad_right(text, width),
            _ => pad_left(text, width),
        };
    }
    let text = clip(text, width);
    match attrs.alignment() {
        Align::Left => pad_right(&text, width),
        Align::Right => pad_left(&text, width),
        Align::Center => pad_center(&text, width),
    }
}

fn header_line(labels: &[String], widths: &[usize]) -> String {
    let mut line = String::from(BORDER);
    for (label, &width) in labels.iter().zip(widths) {
        line.push_str(&pad_center(label, width));
        line.push(BORDER);
    }
    line
}

/// Cell text with embedded line breaks removed.
fn single_line<S: Display>(cell: &S) -> String {
    cell.to_string().replace(['\n', '\r'], "")
}

/// True for lines holding nothing visible besides borders and padding.
fn is_blank(line: &str) -> bool {
    let content: String = line.chars().filter(|&c| c != ' ' && c != BORDER).collect();
    visual_length(&content) == 0
}
