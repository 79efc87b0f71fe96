//! Single-slot addressing of a container position.
//!
//! The traversal code is written once against these traits; `IndexedSlot`
//! and `KeyedSlot` bind it to "ordered container at index" and "keyed
//! container at key" destinations respectively.

use crate::dict::DictionaryValue;
use crate::list::ListValue;
use crate::value::{TransportValue, ValueType};

/// Write access to one container slot.
pub trait Slot {
    fn set_null(&mut self);
    fn set_bool(&mut self, value: bool);
    fn set_int(&mut self, value: i32);
    fn set_double(&mut self, value: f64);
    fn set_string(&mut self, value: &str);
    fn set_binary(&mut self, value: Vec<u8>);
    fn set_list(&mut self, value: ListValue);
    fn set_dictionary(&mut self, value: DictionaryValue);
}

pub struct IndexedSlot<'a> {
    list: &'a mut ListValue,
    index: usize,
}

impl<'a> IndexedSlot<'a> {
    pub fn new(list: &'a mut ListValue, index: usize) -> Self {
        Self { list, index }
    }
}

impl Slot for IndexedSlot<'_> {
    fn set_null(&mut self) {
        self.list.set_null(self.index);
    }
    fn set_bool(&mut self, value: bool) {
        self.list.set_bool(self.index, value);
    }
    fn set_int(&mut self, value: i32) {
        self.list.set_int(self.index, value);
    }
    fn set_double(&mut self, value: f64) {
        self.list.set_double(self.index, value);
    }
    fn set_string(&mut self, value: &str) {
        self.list.set_string(self.index, value);
    }
    fn set_binary(&mut self, value: Vec<u8>) {
        self.list.set_binary(self.index, value);
    }
    fn set_list(&mut self, value: ListValue) {
        self.list.set_list(self.index, value);
    }
    fn set_dictionary(&mut self, value: DictionaryValue) {
        self.list.set_dictionary(self.index, value);
    }
}

pub struct KeyedSlot<'a> {
    dict: &'a mut DictionaryValue,
    key: &'a str,
}

impl<'a> KeyedSlot<'a> {
    pub fn new(dict: &'a mut DictionaryValue, key: &'a str) -> Self {
        Self { dict, key }
    }
}

impl Slot for KeyedSlot<'_> {
    fn set_null(&mut self) {
        self.dict.set_null(self.key);
    }
    fn set_bool(&mut self, value: bool) {
        self.dict.set_bool(self.key, value);
    }
    fn set_int(&mut self, value: i32) {
        self.dict.set_int(self.key, value);
    }
    fn set_double(&mut self, value: f64) {
        self.dict.set_double(self.key, value);
    }
    fn set_string(&mut self, value: &str) {
        self.dict.set_string(self.key, value);
    }
    fn set_binary(&mut self, value: Vec<u8>) {
        self.dict.set_binary(self.key, value);
    }
    fn set_list(&mut self, value: ListValue) {
        self.dict.set_list(self.key, value);
    }
    fn set_dictionary(&mut self, value: DictionaryValue) {
        self.dict.set_dictionary(self.key, value);
    }
}

/// Read access to one container slot. An absent index or key reads as an
/// absent node, whose type is Null.
pub trait SlotRef {
    fn node(&self) -> Option<&TransportValue>;

    fn value_type(&self) -> ValueType {
        self.node()
            .map_or(ValueType::Null, TransportValue::value_type)
    }
}

pub struct IndexedRef<'a> {
    list: &'a ListValue,
    index: usize,
}

impl<'a> IndexedRef<'a> {
    pub fn new(list: &'a ListValue, index: usize) -> Self {
        Self { list, index }
    }
}

impl SlotRef for IndexedRef<'_> {
    fn node(&self) -> Option<&TransportValue> {
        self.list.get(self.index)
    }
}

pub struct KeyedRef<'a> {
    dict: &'a DictionaryValue,
    key: &'a str,
}

impl<'a> KeyedRef<'a> {
    pub fn new(dict: &'a DictionaryValue, key: &'a str) -> Self {
        Self { dict, key }
    }
}

impl SlotRef for KeyedRef<'_> {
    fn node(&self) -> Option<&TransportValue> {
        self.dict.get(self.key)
    }
}
