//! Keyed transport container.

use ahash::RandomState;
use indexmap::IndexMap;

use crate::list::ListValue;
use crate::value::{TransportValue, ValueType};

/// String-keyed mapping of transport nodes, keys unique, enumeration in
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DictionaryValue {
    entries: IndexMap<String, TransportValue, RandomState>,
}

impl DictionaryValue {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&TransportValue> {
        self.entries.get(key)
    }

    /// Type tag under `key`; Null for absent keys.
    pub fn get_type(&self, key: &str) -> ValueType {
        self.entries
            .get(key)
            .map_or(ValueType::Null, TransportValue::value_type)
    }

    pub fn set(&mut self, key: &str, value: TransportValue) {
        self.entries.insert(key.to_string(), value);
    }

    /// Remove the entry under `key`, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<TransportValue> {
        self.entries.shift_remove(key)
    }

    pub fn set_null(&mut self, key: &str) {
        self.set(key, TransportValue::Null);
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, TransportValue::Bool(value));
    }

    pub fn set_int(&mut self, key: &str, value: i32) {
        self.set(key, TransportValue::Int(value));
    }

    pub fn set_double(&mut self, key: &str, value: f64) {
        self.set(key, TransportValue::Double(value));
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.set(key, TransportValue::String(value.to_string()));
    }

    pub fn set_binary(&mut self, key: &str, value: Vec<u8>) {
        self.set(key, TransportValue::Binary(value));
    }

    pub fn set_list(&mut self, key: &str, value: ListValue) {
        self.set(key, TransportValue::List(value));
    }

    pub fn set_dictionary(&mut self, key: &str, value: DictionaryValue) {
        self.set(key, TransportValue::Dictionary(value));
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.entries.get(key) {
            Some(TransportValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.entries.get(key) {
            Some(TransportValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_double(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(TransportValue::Double(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(TransportValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_binary(&self, key: &str) -> Option<&[u8]> {
        match self.entries.get(key) {
            Some(TransportValue::Binary(b)) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn get_list(&self, key: &str) -> Option<&ListValue> {
        match self.entries.get(key) {
            Some(TransportValue::List(l)) => Some(l),
            _ => None,
        }
    }

    pub fn get_dictionary(&self, key: &str) -> Option<&DictionaryValue> {
        match self.entries.get(key) {
            Some(TransportValue::Dictionary(d)) => Some(d),
            _ => None,
        }
    }
}
