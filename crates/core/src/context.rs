//! Ambient field propagation.
//!
//! [`Context`] is a persistent, request-scoped carrier of typed values. Every
//! `with_value` call produces a new carrier layered on the old one; nothing
//! already published is ever mutated, so carriers are freely shared across
//! threads.
//!
//! Log fields ride in the carrier under a private key. [`attach_fields`] adds a
//! layer of fields, and [`merge_context_fields`] applies everything attached so
//! far to a logger.

use core::any::{Any, TypeId};
use std::sync::Arc;

use crate::field::Field;
use crate::logger::Logger;

struct Entry {
    key: TypeId,
    value: Arc<dyn Any + Send + Sync>,
    parent: Option<Arc<Entry>>,
}

// Unlink iteratively; a recursive drop of a long chain exhausts the stack.
impl Drop for Entry {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(mut entry) = next.and_then(Arc::into_inner) {
            next = entry.parent.take();
        }
    }
}

/// Immutable carrier of request-scoped values.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Entry>>,
}

impl Context {
    /// The empty root carrier.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a carrier where `K` maps to `value`, shadowing any outer `K`.
    pub fn with_value<K, V>(&self, value: V) -> Context
    where
        K: 'static,
        V: Any + Send + Sync,
    {
        Context {
            head: Some(Arc::new(Entry {
                key: TypeId::of::<K>(),
                value: Arc::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// The value stored under the nearest `K`, if it is a `V`.
    pub fn value<K, V>(&self) -> Option<&V>
    where
        K: 'static,
        V: Any,
    {
        let key = TypeId::of::<K>();
        let mut cursor = self.head.as_deref();
        while let Some(entry) = cursor {
            if entry.key == key {
                return entry.value.downcast_ref::<V>();
            }
            cursor = entry.parent.as_deref();
        }
        None
    }
}

impl core::fmt::Debug for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut depth = 0usize;
        let mut cursor = self.head.as_deref();
        while let Some(entry) = cursor {
            depth += 1;
            cursor = entry.parent.as_deref();
        }
        f.debug_struct("Context").field("depth", &depth).finish()
    }
}

/// Private key for the field layers; no other code can name it.
struct FieldsKey;

struct FieldLayer {
    fields: Vec<Field>,
    parent: Option<Arc<FieldLayer>>,
    depth: usize,
}

impl Drop for FieldLayer {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(mut layer) = next.and_then(Arc::into_inner) {
            next = layer.parent.take();
        }
    }
}

/// Returns a carrier with `fields` layered over whatever `ctx` already holds.
pub fn attach_fields(ctx: &Context, fields: impl IntoIterator<Item = Field>) -> Context {
    let parent = ctx.value::<FieldsKey, Arc<FieldLayer>>().cloned();
    let depth = parent.as_ref().map_or(1, |p| p.depth + 1);
    let layer = FieldLayer {
        fields: fields.into_iter().collect(),
        parent,
        depth,
    };
    tracing::trace!(depth, fields = layer.fields.len(), "context fields attached");
    ctx.with_value::<FieldsKey, _>(Arc::new(layer))
}

/// All attached fields, outermost layer first, each layer in attach order.
pub fn context_fields(ctx: &Context) -> Vec<Field> {
    let mut layers = Vec::new();
    let mut cursor = ctx.value::<FieldsKey, Arc<FieldLayer>>().map(|layer| &**layer);
    while let Some(layer) = cursor {
        layers.push(layer);
        cursor = layer.parent.as_deref();
    }
    layers
        .iter()
        .rev()
        .flat_map(|layer| layer.fields.iter().cloned())
        .collect()
}

/// Applies the attached fields to `logger`.
///
/// With nothing attached, `logger` itself is returned; no wrapper is built.
pub fn merge_context_fields(ctx: &Context, logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
    let fields = context_fields(ctx);
    if fields.is_empty() {
        return logger;
    }
    logger.with_field(&fields)
}
