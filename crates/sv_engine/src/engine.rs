//! The engine: owns the heap and the current execution context, and exposes
//! the value operations the bridge traverses with: constructors, typed
//! extractors, identity comparison, key enumeration, and property access.

use crate::errors::messages::{NOT_A_FUNCTION, NOT_AN_OBJECT};
use crate::heap::{Heap, ManagedObject};
use crate::object::{FunctionInstance, NativeFn, ObjectInstance};
use crate::value::Value;

/// Identifier of a script execution context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(pub u32);

impl ContextId {
    pub const DEFAULT: ContextId = ContextId(0);
}

pub struct Engine {
    pub heap: Heap,
    context: ContextId,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            heap: Heap::new(),
            context: ContextId::DEFAULT,
        }
    }

    // ------------------------------------------------------------------
    // Execution contexts
    // ------------------------------------------------------------------

    pub fn current_context(&self) -> ContextId {
        self.context
    }

    /// Switch to `ctx`, returning the previously entered context.
    pub fn enter_context(&mut self, ctx: ContextId) -> ContextId {
        std::mem::replace(&mut self.context, ctx)
    }

    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    pub fn string(&mut self, s: &str) -> Value {
        Value::str(self.heap.alloc(ManagedObject::Str(s.to_string())))
    }

    pub fn date(&mut self, epoch_millis: f64) -> Value {
        Value::date(self.heap.alloc(ManagedObject::Date(epoch_millis)))
    }

    pub fn array(&mut self, len: usize) -> Value {
        let inst = ObjectInstance::with_len(len);
        Value::array(self.heap.alloc(ManagedObject::Object(Box::new(inst))))
    }

    pub fn object(&mut self) -> Value {
        let inst = ObjectInstance::new();
        Value::object(self.heap.alloc(ManagedObject::Object(Box::new(inst))))
    }

    pub fn function(&mut self, name: &str, func: NativeFn) -> Value {
        let inst = FunctionInstance {
            name: name.to_string(),
            func,
        };
        Value::function(self.heap.alloc(ManagedObject::Function(Box::new(inst))))
    }

    // ------------------------------------------------------------------
    // Extractors
    // ------------------------------------------------------------------

    pub fn str_value(&self, v: Value) -> Option<&str> {
        if !v.is_string() {
            return None;
        }
        match self.heap.get(v.as_obj_id()) {
            ManagedObject::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn date_value(&self, v: Value) -> Option<f64> {
        if !v.is_date() {
            return None;
        }
        match self.heap.get(v.as_obj_id()) {
            ManagedObject::Date(ms) => Some(*ms),
            _ => None,
        }
    }

    pub fn function_name(&self, v: Value) -> Option<&str> {
        if !v.is_function() {
            return None;
        }
        match self.heap.get(v.as_obj_id()) {
            ManagedObject::Function(f) => Some(f.name.as_str()),
            _ => None,
        }
    }

    /// Reference identity: same heap object, not same contents.
    pub fn is_same(&self, a: Value, b: Value) -> bool {
        a.is_obj() && b.is_obj() && a.as_obj_id() == b.as_obj_id()
    }

    // ------------------------------------------------------------------
    // Containers
    // ------------------------------------------------------------------

    fn container(&self, v: Value) -> Option<&ObjectInstance> {
        if !v.is_array() && !v.is_object() {
            return None;
        }
        match self.heap.get(v.as_obj_id()) {
            ManagedObject::Object(inst) => Some(inst),
            _ => None,
        }
    }

    fn container_mut(&mut self, v: Value) -> Option<&mut ObjectInstance> {
        if !v.is_array() && !v.is_object() {
            return None;
        }
        match self.heap.get_mut(v.as_obj_id()) {
            ManagedObject::Object(inst) => Some(inst),
            _ => None,
        }
    }

    /// Allocated length of an array value; 0 for anything else.
    pub fn array_len(&self, v: Value) -> usize {
        if !v.is_array() {
            return 0;
        }
        self.container(v).map_or(0, |inst| inst.elements.len())
    }

    /// Enumerable keys: set element indices first, then property names, in
    /// insertion order. Holes are not enumerated.
    pub fn get_keys(&self, v: Value) -> Result<Vec<String>, String> {
        let inst = self.container(v).ok_or(NOT_AN_OBJECT)?;
        let mut keys = Vec::with_capacity(inst.elements.len() + inst.props.len());
        let mut buf = itoa::Buffer::new();
        for (i, elem) in inst.elements.iter().enumerate() {
            if !elem.is_undefined() {
                keys.push(buf.format(i).to_string());
            }
        }
        for key in inst.props.keys() {
            keys.push(key.clone());
        }
        Ok(keys)
    }

    pub fn has_value(&self, v: Value, key: &str) -> bool {
        let Some(inst) = self.container(v) else {
            return false;
        };
        if let Some(i) = ObjectInstance::element_index(key) {
            return inst.elements.get(i).is_some_and(|e| !e.is_undefined());
        }
        inst.props.contains_key(key)
    }

    /// Value under `key`; `Value::UNDEFINED` for absent keys and holes.
    pub fn get_value(&self, v: Value, key: &str) -> Value {
        let Some(inst) = self.container(v) else {
            return Value::UNDEFINED;
        };
        if let Some(i) = ObjectInstance::element_index(key) {
            return inst.elements.get(i).copied().unwrap_or(Value::UNDEFINED);
        }
        inst.props.get(key).copied().unwrap_or(Value::UNDEFINED)
    }

    pub fn get_index(&self, v: Value, index: usize) -> Value {
        self.container(v)
            .and_then(|inst| inst.elements.get(index).copied())
            .unwrap_or(Value::UNDEFINED)
    }

    /// Assign at an element index, growing the element store if needed.
    pub fn set_index(&mut self, v: Value, index: usize, val: Value) {
        if let Some(inst) = self.container_mut(v) {
            if index >= inst.elements.len() {
                inst.elements.resize(index + 1, Value::UNDEFINED);
            }
            inst.elements[index] = val;
        }
    }

    /// Assign under a string key with default property attributes.
    pub fn set_value(&mut self, v: Value, key: &str, val: Value) {
        if let Some(i) = ObjectInstance::element_index(key) {
            self.set_index(v, i, val);
            return;
        }
        if let Some(inst) = self.container_mut(v) {
            inst.props.insert(key.to_string(), val);
        }
    }

    // ------------------------------------------------------------------
    // Calls
    // ------------------------------------------------------------------

    pub fn call(&mut self, f: Value, args: &[Value]) -> Result<Value, String> {
        if !f.is_function() {
            return Err(NOT_A_FUNCTION.to_string());
        }
        let func = match self.heap.get(f.as_obj_id()) {
            ManagedObject::Function(inst) => inst.func,
            _ => return Err(NOT_A_FUNCTION.to_string()),
        };
        func(self, args)
    }

    /// Call `f` with `ctx` entered, restoring the previous context on the
    /// way out regardless of the call's outcome.
    pub fn call_in_context(
        &mut self,
        ctx: ContextId,
        f: Value,
        args: &[Value],
    ) -> Result<Value, String> {
        let prev = self.enter_context(ctx);
        let result = self.call(f, args);
        self.context = prev;
        result
    }
}
