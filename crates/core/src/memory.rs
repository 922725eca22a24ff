//! In-memory backend for tests/dev.
//!
//! - No IO, no formatting beyond the facade's own render helpers
//! - Captures every enabled call as a [`Record`] in a shared buffer
//! - Loggers from one factory share that buffer

use core::fmt::{Arguments, Display};
use std::sync::{Arc, Mutex, PoisonError};

use crate::field::Field;
use crate::level::{Level, LevelEnabler};
use crate::logger::{Factory, Logger, render_print, render_println};

/// Which of the four call shapes produced a record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CallShape {
    Print,
    Println,
    Format,
    Structured,
}

/// One captured logging call.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub logger: String,
    pub level: Level,
    pub shape: CallShape,
    pub message: String,
    /// Logger fields first, then the call's own fields, in append order.
    pub fields: Vec<Field>,
}

type Records = Arc<Mutex<Vec<Record>>>;

/// Factory of capturing loggers sharing one record buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryFactory {
    threshold: Level,
    records: Records,
}

impl MemoryFactory {
    pub fn new(threshold: Level) -> Self {
        Self {
            threshold,
            records: Records::default(),
        }
    }

    /// Snapshot of everything captured so far.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Factory for MemoryFactory {
    fn logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(MemoryLogger {
            name: name.to_string(),
            threshold: self.threshold,
            fields: Vec::new(),
            records: self.records.clone(),
        })
    }
}

/// Capturing logger produced by [`MemoryFactory`].
#[derive(Debug, Clone)]
pub struct MemoryLogger {
    name: String,
    threshold: Level,
    fields: Vec<Field>,
    records: Records,
}

impl MemoryLogger {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    fn record(&self, level: Level, shape: CallShape, message: String, extra: &[Field]) {
        if !self.threshold.enabled(level) {
            return;
        }
        let mut fields = self.fields.clone();
        fields.extend_from_slice(extra);
        let record = Record {
            logger: self.name.clone(),
            level,
            shape,
            message,
            fields,
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl LevelEnabler for MemoryLogger {
    fn enabled(&self, level: Level) -> bool {
        self.threshold.enabled(level)
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: Level, values: &[&dyn Display]) {
        self.record(level, CallShape::Print, render_print(values), &[]);
    }

    fn logln(&self, level: Level, values: &[&dyn Display]) {
        self.record(level, CallShape::Println, render_println(values), &[]);
    }

    fn logf(&self, level: Level, args: Arguments<'_>) {
        self.record(level, CallShape::Format, args.to_string(), &[]);
    }

    fn logw(&self, level: Level, message: &str, fields: &[Field]) {
        self.record(level, CallShape::Structured, message.to_string(), fields);
    }

    fn with_field(self: Arc<Self>, fields: &[Field]) -> Arc<dyn Logger> {
        let mut next = (*self).clone();
        next.fields.extend_from_slice(fields);
        Arc::new(next)
    }
}
