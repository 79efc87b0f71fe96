//! Indexable object instances and native functions.

use ahash::RandomState;
use indexmap::IndexMap;

use crate::engine::Engine;
use crate::value::Value;

/// Insertion-ordered property map, so key enumeration is deterministic.
pub type PropMap = IndexMap<String, Value, RandomState>;

/// Unified indexable/property container backing both arrays and objects.
///
/// Non-negative integer keys address `elements`; everything else lands in
/// `props`. An element equal to `Value::UNDEFINED` is a hole and is not
/// enumerable.
pub struct ObjectInstance {
    pub elements: Vec<Value>,
    pub props: PropMap,
}

impl ObjectInstance {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            props: PropMap::default(),
        }
    }

    pub fn with_len(len: usize) -> Self {
        Self {
            elements: vec![Value::UNDEFINED; len],
            props: PropMap::default(),
        }
    }

    /// Interpret a property key as an element index.
    pub fn element_index(key: &str) -> Option<usize> {
        if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        key.parse().ok()
    }
}

/// Native function signature, invoked with the engine entered.
pub type NativeFn = fn(&mut Engine, &[Value]) -> Result<Value, String>;

pub struct FunctionInstance {
    pub name: String,
    pub func: NativeFn,
}
