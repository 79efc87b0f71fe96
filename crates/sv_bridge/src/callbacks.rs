//! Function externalization through registry-issued handles.
//!
//! Functions cannot cross the transport boundary; the serializer registers
//! them here and writes an opaque handle instead. The handle stays valid
//! until deregistered and can be used to invoke the original function in
//! its original execution context.

use ahash::RandomState;
use hashbrown::HashMap;
use sv_engine::{ContextId, Engine, Value};
use sv_transport::primitives;
use sv_transport::slot::{Slot, SlotRef};
use sv_transport::TransportValue;

type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Opaque token addressing a registered function and its execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackHandle {
    pub id: i64,
    pub context: ContextId,
}

impl CallbackHandle {
    /// Encode this handle into a transport slot.
    pub fn write<S: Slot>(&self, slot: &mut S) {
        slot.set_binary(primitives::encode_callback(self.context.0, self.id));
    }

    /// Decode a handle from a transport slot, if the node is one.
    pub fn read<S: SlotRef>(slot: &S) -> Option<CallbackHandle> {
        match slot.node() {
            Some(TransportValue::Binary(bytes)) => primitives::decode_callback(bytes)
                .map(|(context, id)| CallbackHandle {
                    id,
                    context: ContextId(context),
                }),
            _ => None,
        }
    }
}

pub struct CallbackEntry {
    pub context: ContextId,
    pub function: Value,
}

/// Registry of externalized functions, keyed by monotonically increasing id.
pub struct CallbackRegistry {
    callbacks: FastHashMap<i64, CallbackEntry>,
    next_id: i64,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self {
            callbacks: FastHashMap::default(),
            next_id: 0,
        }
    }

    /// Bind `function` to `context` and issue a handle for it.
    pub fn register(&mut self, context: ContextId, function: Value) -> CallbackHandle {
        self.next_id += 1;
        let id = self.next_id;
        self.callbacks.insert(id, CallbackEntry { context, function });
        CallbackHandle { id, context }
    }

    pub fn resolve(&self, id: i64) -> Option<&CallbackEntry> {
        self.callbacks.get(&id)
    }

    pub fn deregister(&mut self, id: i64) -> Option<CallbackEntry> {
        self.callbacks.remove(&id)
    }

    /// Invoke the registered function inside its registered context.
    pub fn execute(&self, engine: &mut Engine, id: i64, args: &[Value]) -> Result<Value, String> {
        let entry = self
            .callbacks
            .get(&id)
            .ok_or_else(|| format!("No callback registered for id {id}"))?;
        engine.call_in_context(entry.context, entry.function, args)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn clear(&mut self) {
        self.callbacks.clear();
    }
}
