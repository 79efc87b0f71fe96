//! Script-value to transport-tree conversion.
//!
//! Depth-first recursion, written once against the [`Slot`] write
//! abstraction so ordered and keyed destinations share one code path. The
//! conversion never fails outward: a detected cycle collapses the whole
//! top-level call to Null at the originally requested slot, and every other
//! failure collapses just the offending subtree.

use sv_engine::{Engine, Value};
use sv_transport::slot::{IndexedSlot, KeyedSlot, Slot};
use sv_transport::{DictionaryValue, ListValue};

use crate::callbacks::CallbackRegistry;
use crate::date::DateBridge;
use crate::visited::VisitedSet;

/// Property names with this prefix are engine-internal and never serialized.
pub const HIDDEN_KEY_PREFIX: &str = "__";

/// Raised when a value already on the traversal path is re-entered.
/// Consumed at the outermost serialize frame, never surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetected;

/// Convert `value` and write the result into `slot`.
pub fn serialize<S: Slot>(
    engine: &Engine,
    registry: &mut CallbackRegistry,
    value: Value,
    slot: &mut S,
) {
    let mut seen = VisitedSet::new();
    if write_value(engine, registry, value, slot, &mut seen).is_err() {
        slot.set_null();
    }
}

fn write_value<S: Slot>(
    engine: &Engine,
    registry: &mut CallbackRegistry,
    value: Value,
    slot: &mut S,
    seen: &mut VisitedSet,
) -> Result<(), CycleDetected> {
    if value.is_null() || value.is_undefined() {
        slot.set_null();
    } else if value.is_bool() {
        slot.set_bool(value.as_bool());
    } else if value.is_int() {
        slot.set_int(value.as_i32());
    } else if value.is_double() {
        slot.set_double(value.as_f64());
    } else if value.is_string() {
        slot.set_string(engine.str_value(value).unwrap_or(""));
    } else if value.is_date() {
        DateBridge::write(engine.date_value(value).unwrap_or(0.0), slot);
    } else if value.is_array() {
        enter(seen, value)?;
        let result = write_array(engine, registry, value, slot, seen);
        seen.pop();
        result?;
    } else if value.is_function() {
        let handle = registry.register(engine.current_context(), value);
        handle.write(slot);
    } else if value.is_object() {
        enter(seen, value)?;
        let result = write_object(engine, registry, value, slot, seen);
        seen.pop();
        result?;
    } else {
        slot.set_null();
    }
    Ok(())
}

/// Cycle check at the entry of an array/object frame; the matching pop
/// happens in `write_value` on every exit path of that frame.
fn enter(seen: &mut VisitedSet, value: Value) -> Result<(), CycleDetected> {
    let id = value.as_obj_id();
    if seen.contains(id) {
        return Err(CycleDetected);
    }
    seen.push(id);
    Ok(())
}

fn write_array<S: Slot>(
    engine: &Engine,
    registry: &mut CallbackRegistry,
    value: Value,
    slot: &mut S,
    seen: &mut VisitedSet,
) -> Result<(), CycleDetected> {
    let len = engine.array_len(value);
    match engine.get_keys(value) {
        Ok(keys) if len > 0 && !keys.is_empty() => {
            let mut list = ListValue::with_size(len);
            for i in 0..len {
                match keys.get(i) {
                    Some(key) => {
                        let elem = engine.get_value(value, key);
                        let mut dest = IndexedSlot::new(&mut list, i);
                        write_value(engine, registry, elem, &mut dest, seen)?;
                    }
                    // Sparse array: fewer enumerable keys than positions.
                    None => list.set_null(i),
                }
            }
            slot.set_list(list);
        }
        // Zero length or zero enumerable keys: not array-like.
        _ => slot.set_null(),
    }
    Ok(())
}

fn write_object<S: Slot>(
    engine: &Engine,
    registry: &mut CallbackRegistry,
    value: Value,
    slot: &mut S,
    seen: &mut VisitedSet,
) -> Result<(), CycleDetected> {
    if let Ok(keys) = engine.get_keys(value) {
        // Emptiness is tested on the unfiltered key set: an object whose
        // keys are all hidden still serializes to an empty Dictionary,
        // while a keyless object writes nothing at all.
        if !keys.is_empty() {
            let mut dict = DictionaryValue::new();
            for key in &keys {
                if engine.has_value(value, key) && !key.starts_with(HIDDEN_KEY_PREFIX) {
                    let prop = engine.get_value(value, key);
                    let mut dest = KeyedSlot::new(&mut dict, key);
                    write_value(engine, registry, prop, &mut dest, seen)?;
                }
            }
            slot.set_dictionary(dict);
        }
    }
    Ok(())
}
