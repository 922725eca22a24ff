//! No-op backend.
//!
//! The registry's default, so the facade is safe to call before a real backend
//! is installed. Nothing is ever rendered, so fields are dropped and
//! `with_field` hands back the same logger.

use core::fmt::{Arguments, Display};
use std::sync::Arc;

use crate::field::Field;
use crate::level::{Level, LevelEnabler};
use crate::logger::{Factory, Logger};

/// Returns a factory whose loggers discard everything.
pub fn new_nop_factory() -> Arc<dyn Factory> {
    Arc::new(NopFactory::default())
}

/// Factory handing out one shared [`NopLogger`] for every name.
#[derive(Debug, Clone)]
pub struct NopFactory {
    logger: Arc<NopLogger>,
}

impl Default for NopFactory {
    fn default() -> Self {
        Self {
            logger: Arc::new(NopLogger),
        }
    }
}

impl Factory for NopFactory {
    fn logger(&self, _name: &str) -> Arc<dyn Logger> {
        self.logger.clone()
    }
}

/// A logger that discards all calls.
///
/// `enabled` is false for every level, `DEBUG` through `OFF` and beyond.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl LevelEnabler for NopLogger {
    #[inline]
    fn enabled(&self, _level: Level) -> bool {
        false
    }
}

impl Logger for NopLogger {
    #[inline]
    fn log(&self, _level: Level, _values: &[&dyn Display]) {}

    #[inline]
    fn logln(&self, _level: Level, _values: &[&dyn Display]) {}

    #[inline]
    fn logf(&self, _level: Level, _args: Arguments<'_>) {}

    #[inline]
    fn logw(&self, _level: Level, _message: &str, _fields: &[Field]) {}

    fn with_field(self: Arc<Self>, _fields: &[Field]) -> Arc<dyn Logger> {
        self
    }
}
