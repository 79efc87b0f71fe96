//! Date bridging between engine dates and the transport time encoding.
//!
//! Dates have no native transport tag; they travel as kind-marked binary
//! payloads carrying epoch milliseconds. The recognizer checks tag, kind
//! byte, and payload length, so it can safely run ahead of generic
//! dictionary/list dispatch.

use sv_transport::primitives;
use sv_transport::slot::{Slot, SlotRef};
use sv_transport::TransportValue;

pub struct DateBridge;

impl DateBridge {
    /// Encode `epoch_millis` into a transport slot.
    pub fn write<S: Slot>(epoch_millis: f64, slot: &mut S) {
        slot.set_binary(primitives::encode_time(epoch_millis));
    }

    /// Is the node at `slot` a date-shaped binary?
    pub fn is_date<S: SlotRef>(slot: &S) -> bool {
        matches!(
            slot.node(),
            Some(TransportValue::Binary(bytes)) if primitives::is_time(bytes)
        )
    }

    /// Decode epoch milliseconds from a date-shaped node.
    pub fn read<S: SlotRef>(slot: &S) -> Option<f64> {
        match slot.node() {
            Some(TransportValue::Binary(bytes)) => primitives::decode_time(bytes),
            _ => None,
        }
    }
}
