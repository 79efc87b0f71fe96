//! Tagged transport values.

use crate::dict::DictionaryValue;
use crate::list::ListValue;

/// Type tag of a transport node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Bool,
    Int,
    Double,
    String,
    Binary,
    List,
    Dictionary,
}

/// A node in the transport tree. Owned exclusively by its container;
/// acyclic by construction on the serialize side.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportValue {
    Null,
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    List(ListValue),
    Dictionary(DictionaryValue),
}

impl TransportValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            TransportValue::Null => ValueType::Null,
            TransportValue::Bool(_) => ValueType::Bool,
            TransportValue::Int(_) => ValueType::Int,
            TransportValue::Double(_) => ValueType::Double,
            TransportValue::String(_) => ValueType::String,
            TransportValue::Binary(_) => ValueType::Binary,
            TransportValue::List(_) => ValueType::List,
            TransportValue::Dictionary(_) => ValueType::Dictionary,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TransportValue::Null => "null",
            TransportValue::Bool(_) => "bool",
            TransportValue::Int(_) => "int",
            TransportValue::Double(_) => "double",
            TransportValue::String(_) => "string",
            TransportValue::Binary(_) => "binary",
            TransportValue::List(_) => "list",
            TransportValue::Dictionary(_) => "dictionary",
        }
    }
}
