//! Logger and Factory contracts.
//!
//! These are the capability sets a backend must implement. The facade ships a
//! single implementation of them, the no-op backend in [`crate::nop`].
//!
//! Every severity has four call shapes:
//!
//! | shape      | example                          | message                         |
//! |------------|----------------------------------|---------------------------------|
//! | print      | `logger.info(&[&a, &b])`         | operands concatenated           |
//! | println    | `logger.infoln(&[&a, &b])`       | operands joined by single space |
//! | format     | `infof!(logger, "x = {}", x)`    | `fmt::Arguments`                |
//! | structured | `logger.infow("msg", &[field])`  | message plus [`Field`]s         |
//!
//! Backends implement the four level-taking shape methods (`log`, `logln`,
//! `logf`, `logw`); the sixteen per-severity methods are provided.

use core::fmt::{self, Arguments, Display, Write as _};
use std::sync::Arc;

use crate::field::Field;
use crate::level::{Level, LevelEnabler};

/// Logging interface handed out by a [`Factory`].
///
/// If building the arguments is expensive, check [`LevelEnabler::enabled`]
/// first.
///
/// For fields sharing a key, backends usually let the later one win over the
/// earlier and built-in ones. The facade itself never deduplicates.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. Backends that block on I/O document
/// their own concurrency contract.
pub trait Logger: LevelEnabler + Send + Sync {
    /// Print-style call: operands rendered back to back.
    fn log(&self, level: Level, values: &[&dyn Display]);

    /// Println-style call: operands joined by a single space, with no trailing
    /// newline.
    fn logln(&self, level: Level, values: &[&dyn Display]);

    /// Format-string call.
    fn logf(&self, level: Level, args: Arguments<'_>);

    /// Structured call: a preformatted message plus extra fields.
    fn logw(&self, level: Level, message: &str, fields: &[Field]);

    /// Returns a logger carrying this logger's fields followed by `fields`.
    ///
    /// Never fails. Implementations without state may return `self`.
    fn with_field(self: Arc<Self>, fields: &[Field]) -> Arc<dyn Logger>;

    fn debug(&self, values: &[&dyn Display]) {
        self.log(Level::DEBUG, values);
    }

    fn debugln(&self, values: &[&dyn Display]) {
        self.logln(Level::DEBUG, values);
    }

    fn debugf(&self, args: Arguments<'_>) {
        self.logf(Level::DEBUG, args);
    }

    fn debugw(&self, message: &str, fields: &[Field]) {
        self.logw(Level::DEBUG, message, fields);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.log(Level::INFO, values);
    }

    fn infoln(&self, values: &[&dyn Display]) {
        self.logln(Level::INFO, values);
    }

    fn infof(&self, args: Arguments<'_>) {
        self.logf(Level::INFO, args);
    }

    fn infow(&self, message: &str, fields: &[Field]) {
        self.logw(Level::INFO, message, fields);
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.log(Level::WARN, values);
    }

    fn warnln(&self, values: &[&dyn Display]) {
        self.logln(Level::WARN, values);
    }

    fn warnf(&self, args: Arguments<'_>) {
        self.logf(Level::WARN, args);
    }

    fn warnw(&self, message: &str, fields: &[Field]) {
        self.logw(Level::WARN, message, fields);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.log(Level::ERROR, values);
    }

    fn errorln(&self, values: &[&dyn Display]) {
        self.logln(Level::ERROR, values);
    }

    fn errorf(&self, args: Arguments<'_>) {
        self.logf(Level::ERROR, args);
    }

    fn errorw(&self, message: &str, fields: &[Field]) {
        self.logw(Level::ERROR, message, fields);
    }
}

/// Produces loggers by name.
pub trait Factory: Send + Sync {
    /// Returns the logger for `name`, possibly cached. Never fails.
    fn logger(&self, name: &str) -> Arc<dyn Logger>;
}

/// Render print-style operands: concatenated with no separator.
pub fn render_print(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = write!(out, "{value}");
    }
    out
}

/// Render println-style operands: joined by single spaces, no trailing newline.
pub fn render_println(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out
}

/// Trait objects have no state worth printing; this keeps holders derivable.
impl fmt::Debug for dyn Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Logger")
    }
}

impl fmt::Debug for dyn Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Factory")
    }
}

/// Format-string logging at debug level.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debugf(format_args!($($arg)*))
    };
}

/// Format-string logging at info level.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)*) => {
        $logger.infof(format_args!($($arg)*))
    };
}

/// Format-string logging at warn level.
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warnf(format_args!($($arg)*))
    };
}

/// Format-string logging at error level.
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.errorf(format_args!($($arg)*))
    };
}
