//! `logbridge-core` — vendor-neutral logging facade.
//!
//! This crate defines the **contract** between application code and a logging
//! backend (no formatting, buffering or I/O):
//!
//! - [`Field`]: typed structured values
//! - [`Level`]: ordered severities with monotonic enablement
//! - [`Logger`] / [`Factory`]: the capability set a backend implements
//! - [`get_factory`] / [`swap_factory`]: the process-wide backend slot
//! - [`Context`]: ambient fields merged into a logger on demand
//!
//! Until a backend is swapped in, every call lands in the no-op backend and
//! produces no output.
//!
//! ```
//! use logbridge_core::{Field, Level, LevelEnabler, Logger, infof};
//!
//! let logger = logbridge_core::logger("billing");
//! if logger.enabled(Level::DEBUG) {
//!     logger.debugw("expensive", &[Field::int64("rows", 10_000)]);
//! }
//! infof!(logger, "charged {} accounts", 3);
//! ```

pub mod context;
pub mod error;
pub mod field;
pub mod level;
pub mod logger;
pub mod memory;
pub mod nop;
pub mod registry;

pub use context::{Context, attach_fields, context_fields, merge_context_fields};
pub use error::{LoggingError, LoggingResult};
pub use field::{Complex, Field, FieldType, FieldValue, NilType, Opaque};
pub use level::{Level, LevelEnabler};
pub use logger::{Factory, Logger, render_print, render_println};
pub use memory::{CallShape, MemoryFactory, MemoryLogger, Record};
pub use nop::{NopFactory, NopLogger, new_nop_factory};
pub use registry::{FactoryStore, get_factory, logger, swap_factory};
