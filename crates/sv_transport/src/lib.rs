//! Tagged transport tree for cross-process transport of script values.
//!
//! Two container kinds, an ordered `ListValue` and a keyed
//! `DictionaryValue`, hold tagged `TransportValue` nodes. Values with no
//! native tag (64-bit integers, timestamps, callback handles) ride in
//! `Binary` nodes with a kind marker; see [`primitives`].

#![allow(clippy::new_without_default)]

pub mod dict;
pub mod fmt;
pub mod list;
pub mod primitives;
pub mod slot;
pub mod value;

pub use dict::DictionaryValue;
pub use fmt::dump;
pub use list::ListValue;
pub use slot::{IndexedRef, IndexedSlot, KeyedRef, KeyedSlot, Slot, SlotRef};
pub use value::{TransportValue, ValueType};
