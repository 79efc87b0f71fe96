//! Transport-tree to script-value conversion.
//!
//! The inverse traversal, addressed through [`SlotRef`] so ordered and
//! keyed sources share one code path. Pure with respect to the transport
//! tree (which is acyclic by construction); allocates on the engine heap.
//! Unrecognized or malformed nodes degrade to Null; there is no error
//! channel.

use sv_engine::{Engine, Value};
use sv_transport::slot::{IndexedRef, KeyedRef, SlotRef};
use sv_transport::{TransportValue, ValueType};

use crate::date::DateBridge;

/// Convert the node at `src` back into a script value.
pub fn deserialize<S: SlotRef>(engine: &mut Engine, src: &S) -> Value {
    match src.value_type() {
        ValueType::Bool => {
            let Some(TransportValue::Bool(b)) = src.node() else {
                return Value::NULL;
            };
            Value::from_bool(*b)
        }
        ValueType::Int => {
            let Some(TransportValue::Int(i)) = src.node() else {
                return Value::NULL;
            };
            Value::from_i32(*i)
        }
        ValueType::Double => {
            let Some(TransportValue::Double(d)) = src.node() else {
                return Value::NULL;
            };
            Value::from_f64(*d)
        }
        ValueType::String => {
            let Some(TransportValue::String(s)) = src.node() else {
                return Value::NULL;
            };
            engine.string(s)
        }
        // Date-shaped binary nodes are recognized ahead of the generic
        // dispatch below.
        _ if DateBridge::is_date(src) => match DateBridge::read(src) {
            Some(millis) => engine.date(millis),
            None => Value::NULL,
        },
        ValueType::List => {
            let Some(TransportValue::List(list)) = src.node() else {
                return Value::NULL;
            };
            let size = list.size();
            let result = engine.array(size);
            for i in 0..size {
                let item = deserialize(engine, &IndexedRef::new(list, i));
                engine.set_index(result, i, item);
            }
            result
        }
        ValueType::Dictionary => {
            let Some(TransportValue::Dictionary(dict)) = src.node() else {
                return Value::NULL;
            };
            let keys = dict.get_keys();
            // Array-shaped container that also accepts named properties,
            // mirroring the engine's unified object model.
            let result = engine.array(keys.len());
            for key in &keys {
                let item = deserialize(engine, &KeyedRef::new(dict, key));
                engine.set_value(result, key, item);
            }
            result
        }
        _ => Value::NULL,
    }
}
