//! # termgrid - Width-negotiating terminal tables
//!
//! `termgrid` renders rows of plain data into bordered, aligned tables that
//! fit a terminal width budget. Colored and hyperlinked cells line up
//! correctly because every width decision uses the visual length of a cell,
//! not its byte or character count.
//!
//! ## Core Concepts
//!
//! - [`Table`]: headings, per-column attributes and a width budget
//! - [`ColumnAttrs`]: alignment plus resizable / wrap / auto-width flags,
//!   parsed from short strings like `"R"`, `"LM"` or `"A"`
//! - [`visual_length`]: terminal columns a string occupies, ignoring color
//!   codes and hyperlink wrappers
//! - [`wrap`]: greedy paragraph wrapping used by multi-line columns
//! - [`Layout`]: the widths a table was rendered with
//!
//! ## Quick Start
//!
//! ```rust
//! use termgrid::{separator_row, Table};
//!
//! let table = Table::with_attributes(["Task", "Notes"], &["L", "LM"])
//!     .unwrap()
//!     .width(30);
//!
//! let rows = vec![
//!     vec!["build".to_string(), "compile every crate in the workspace".to_string()],
//!     separator_row(),
//!     vec!["test".to_string(), "run all suites".to_string()],
//! ];
//!
//! for line in table.render(&rows).unwrap() {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Width Negotiation
//!
//! Each column starts at its natural width (widest heading label or cell).
//! Columns are admitted left to right while `1 + Σ(width + 1)` fits the
//! budget. When some do not fit and resizable columns (`W`, `M`) exist, those
//! shrink one column per pass, never below their heading labels, until the
//! table fits or nothing can shrink. Columns that still do not fit are
//! dropped and a trailing note reports how many were shown.
//!
//! ## Colors
//!
//! ```rust
//! use termgrid::ansi::{paint, AnsiColor, Fg};
//! use termgrid::visual_length;
//!
//! let ok = paint("passed", Fg::Dark(AnsiColor::Green));
//! assert_eq!(visual_length(&ok), 6);
//! ```

pub mod ansi;
mod attrs;
mod error;
pub mod layout;
mod measure;
mod spec;
mod table;
pub mod terminal;
mod wrap;

// Error type
pub use error::{Result, TableError};

// Column attributes
pub use attrs::{Align, ColumnAttrs};

// Measurement and padding
pub use measure::{clip, pad_center, pad_left, pad_right, visual_length};

// Wrapping
pub use wrap::{wrap, wrap_lines};

// Rendering
pub use layout::Layout;
pub use spec::TableSpec;
pub use table::{separator_row, Table, SEPARATOR_ID};

// Terminal width
pub use terminal::{console_width, UNBOUNDED_WIDTH};
