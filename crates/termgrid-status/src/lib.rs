//! # termgrid-status - Overwritable status lines
//!
//! A small companion to `termgrid` for the lines a command-line tool prints
//! while it works: spinners, progress bars, class-tagged messages and
//! "volatile" lines that the next message overwrites in place.
//!
//! All state lives in a [`StatusPrinter`] value instead of globals, so tests
//! can point a printer at in-memory buffers and several printers can coexist.
//! Share one printer between threads behind a `Mutex`.
//!
//! ```rust
//! use termgrid_status::{PrintOptions, StatusPrinter};
//!
//! let mut status = StatusPrinter::with_writers(Vec::new(), Vec::new());
//! status.print("scanning", &PrintOptions::new().volatile().wheel()).unwrap();
//! status.info("scan complete").unwrap();
//! ```

mod error;
mod printer;

pub use error::{Result, StatusError};
pub use printer::{MessageClass, PrintOptions, Progress, StatusPrinter, WHEEL_CHARS};
