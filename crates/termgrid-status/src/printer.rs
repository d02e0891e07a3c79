//! The status printer.
//!
//! A [`StatusPrinter`] owns everything that used to be process-wide state in
//! simple status scripts: the last line written, whether it can be erased,
//! the spinner position, the progress step and the silent switch. Each
//! [`print`](StatusPrinter::print) call assembles the complete output in
//! memory, then writes and flushes it once, so a printer shared behind a
//! `Mutex` never interleaves partial lines.

use std::fmt;
use std::io::{self, Write};

use console::Term;
use tracing::trace;

use termgrid::{clip, console_width, visual_length};

use crate::error::Result;

/// Spinner frames, advanced once per wheel message.
pub const WHEEL_CHARS: [char; 4] = ['-', '\\', '|', '/'];

/// Message category shown as an uppercased `[CLASS] ` prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageClass {
    Info,
    Warn,
    Error,
    /// Any other label. `err`, `fail` and `failure` still count as errors.
    Custom(String),
}

impl MessageClass {
    /// The prefix label, uppercased.
    pub fn label(&self) -> String {
        match self {
            MessageClass::Info => "INFO".to_string(),
            MessageClass::Warn => "WARN".to_string(),
            MessageClass::Error => "ERROR".to_string(),
            MessageClass::Custom(label) => label.to_uppercase(),
        }
    }

    /// True when messages of this class go to the error writer.
    pub fn is_error(&self) -> bool {
        matches!(
            self.label().as_str(),
            "ERR" | "ERROR" | "FAIL" | "FAILURE"
        )
    }
}

impl fmt::Display for MessageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<&str> for MessageClass {
    fn from(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "INFO" => MessageClass::Info,
            "WARN" => MessageClass::Warn,
            "ERROR" => MessageClass::Error,
            _ => MessageClass::Custom(label.to_string()),
        }
    }
}

/// A progress bar prefix such as `[###.....] `.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Explicit position. `done` is clamped to `total`.
    Fixed { done: usize, total: usize },
    /// Advances the printer's own step counter by one, up to `total`.
    Step { total: usize },
}

/// Per-message options for [`StatusPrinter::print`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrintOptions {
    pub volatile: bool,
    pub partial: bool,
    pub wheel: bool,
    pub progress: Option<Progress>,
    pub class: Option<MessageClass>,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// No trailing newline; the next message erases this one.
    pub fn volatile(mut self) -> Self {
        self.volatile = true;
        self
    }

    /// No trailing newline, but the next message does not erase it.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Prefix with the next spinner frame.
    pub fn wheel(mut self) -> Self {
        self.wheel = true;
        self
    }

    pub fn progress(mut self, progress: Progress) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn class(mut self, class: impl Into<MessageClass>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Writes status lines, spinners and progress bars to a pair of writers.
///
/// # Example
///
/// ```rust
/// use termgrid_status::{PrintOptions, Progress, StatusPrinter};
///
/// let mut status = StatusPrinter::with_writers(Vec::new(), Vec::new()).width(80);
/// for done in 0..=4 {
///     let opts = PrintOptions::new()
///         .volatile()
///         .progress(Progress::Fixed { done, total: 4 });
///     status.print("copying files", &opts).unwrap();
/// }
/// status.println("done").unwrap();
/// ```
pub struct StatusPrinter {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    width: Option<usize>,
    silent: bool,
    last_text: String,
    last_volatile: bool,
    message_count: usize,
    bar_step: usize,
}

impl StatusPrinter {
    /// A printer on the process's stdout and stderr, sized to the console.
    pub fn new() -> Self {
        Self::with_writers(Term::stdout(), Term::stderr())
    }

    /// A printer on arbitrary writers, sized to the console at each print.
    pub fn with_writers(
        out: impl Write + Send + 'static,
        err: impl Write + Send + 'static,
    ) -> Self {
        StatusPrinter {
            out: Box::new(out),
            err: Box::new(err),
            width: None,
            silent: false,
            last_text: String::new(),
            last_volatile: false,
            message_count: 0,
            bar_step: 0,
        }
    }

    /// Fixes the width used to clip volatile and partial lines. Without one,
    /// [`console_width`] is queried on every print.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Turns output suppression on or off.
    pub fn set_silent(&mut self, silent: bool) {
        self.silent = silent;
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Writes one status message.
    ///
    /// Does nothing in silent mode. Otherwise the message is prefixed as
    /// `[CLASS] [###..] [c] text`, a pending volatile line is erased first,
    /// and the result is written and flushed in one go.
    pub fn print(&mut self, text: &str, opts: &PrintOptions) -> Result<()> {
        if self.silent {
            return Ok(());
        }

        let mut line = String::new();
        if let Some(class) = &opts.class {
            line.push_str(&format!("[{}] ", class.label()));
        }
        if let Some(progress) = opts.progress {
            line.push_str(&self.progress_bar(progress));
        }
        if opts.wheel {
            let frame = WHEEL_CHARS[self.message_count % WHEEL_CHARS.len()];
            self.message_count += 1;
            line.push_str(&format!("[{}] ", frame));
        }
        line.push_str(text);

        let mut output = String::new();
        if self.last_volatile {
            output.push('\r');
            output.push_str(&" ".repeat(visual_length(&self.last_text)));
            output.push('\r');
        }

        if opts.volatile || opts.partial {
            let width = self.width.unwrap_or_else(console_width);
            line = clip(&line, width.saturating_sub(2));
            output.push_str(&line);
        } else {
            output.push_str(&line);
            output.push('\n');
        }

        let to_err = opts.class.as_ref().is_some_and(MessageClass::is_error);
        trace!(
            volatile = opts.volatile,
            partial = opts.partial,
            stderr = to_err,
            "status line"
        );
        let writer = if to_err { &mut self.err } else { &mut self.out };
        write_flush(writer, output.as_bytes())?;

        self.last_text = line;
        self.last_volatile = opts.volatile;
        Ok(())
    }

    /// Writes a plain line.
    pub fn println(&mut self, text: &str) -> Result<()> {
        self.print(text, &PrintOptions::new())
    }

    /// Writes a line the next message will overwrite.
    pub fn volatile(&mut self, text: &str) -> Result<()> {
        self.print(text, &PrintOptions::new().volatile())
    }

    pub fn info(&mut self, text: &str) -> Result<()> {
        self.print(text, &PrintOptions::new().class(MessageClass::Info))
    }

    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.print(text, &PrintOptions::new().class(MessageClass::Warn))
    }

    /// Writes an `[ERROR] ` line to the error writer.
    pub fn error(&mut self, text: &str) -> Result<()> {
        self.print(text, &PrintOptions::new().class(MessageClass::Error))
    }

    fn progress_bar(&mut self, progress: Progress) -> String {
        let (done, total) = match progress {
            Progress::Fixed { done, total } => (done.min(total), total),
            Progress::Step { total } => {
                if self.bar_step < total {
                    self.bar_step += 1;
                }
                (self.bar_step.min(total), total)
            }
        };
        format!("[{}{}] ", "#".repeat(done), ".".repeat(total - done))
    }
}

impl Default for StatusPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StatusPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusPrinter")
            .field("width", &self.width)
            .field("silent", &self.silent)
            .field("last_text", &self.last_text)
            .field("last_volatile", &self.last_volatile)
            .field("message_count", &self.message_count)
            .field("bar_step", &self.bar_step)
            .finish_non_exhaustive()
    }
}

fn write_flush(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}
