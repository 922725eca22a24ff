//! Process-wide factory registry.
//!
//! One slot holds the active [`Factory`]. It starts out as the no-op factory and
//! can be replaced at any time; a host application normally installs its
//! backend once at startup, before the first logging call.
//!
//! The factory is wrapped in an immutable `StoredFactory` holder and the
//! holder is swapped through an [`ArcSwap`], so both `load` and `swap` are a
//! single atomic pointer operation. Loads are lock-free and wait-free.

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::logger::{Factory, Logger};
use crate::nop::NopFactory;

/// Immutable holder of one installed factory.
#[derive(Debug)]
struct StoredFactory {
    factory: Arc<dyn Factory>,
}

/// Atomically swappable factory slot.
#[derive(Debug)]
pub struct FactoryStore {
    current: ArcSwap<StoredFactory>,
}

impl FactoryStore {
    pub fn new(factory: Arc<dyn Factory>) -> Self {
        Self {
            current: ArcSwap::from_pointee(StoredFactory { factory }),
        }
    }

    /// The active factory.
    pub fn load(&self) -> Arc<dyn Factory> {
        self.current.load().factory.clone()
    }

    /// Installs `factory` and returns the one active immediately before.
    pub fn swap(&self, factory: Arc<dyn Factory>) -> Arc<dyn Factory> {
        let previous = self.current.swap(Arc::new(StoredFactory { factory }));
        previous.factory.clone()
    }
}

impl Default for FactoryStore {
    fn default() -> Self {
        Self::new(Arc::new(NopFactory::default()))
    }
}

static FACTORY_STORE: LazyLock<FactoryStore> = LazyLock::new(FactoryStore::default);

/// Returns the registered factory, the no-op factory until one is swapped in.
pub fn get_factory() -> Arc<dyn Factory> {
    FACTORY_STORE.load()
}

/// Registers `factory` process-wide and returns the previous one.
pub fn swap_factory(factory: Arc<dyn Factory>) -> Arc<dyn Factory> {
    let previous = FACTORY_STORE.swap(factory);
    tracing::debug!("logging factory swapped");
    previous
}

/// Shorthand for `get_factory().logger(name)`.
pub fn logger(name: &str) -> Arc<dyn Logger> {
    get_factory().logger(name)
}
