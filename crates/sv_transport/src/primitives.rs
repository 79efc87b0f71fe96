//! Binary-encoded primitives layered on the transport containers.
//!
//! Values with no native transport tag ride in Binary nodes whose first
//! byte is a kind marker followed by a fixed-width little-endian payload.
//! Recognizers require the exact payload length; anything malformed reads
//! as not-this-kind.

pub const KIND_INT64: u8 = 0;
pub const KIND_TIME: u8 = 1;
pub const KIND_CALLBACK: u8 = 2;

const INT64_LEN: usize = 1 + 8;
const TIME_LEN: usize = 1 + 8;
const CALLBACK_LEN: usize = 1 + 4 + 8;

pub fn encode_int64(value: i64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(INT64_LEN);
    bytes.push(KIND_INT64);
    bytes.extend_from_slice(&value.to_le_bytes());
    bytes
}

pub fn is_int64(bytes: &[u8]) -> bool {
    bytes.len() == INT64_LEN && bytes[0] == KIND_INT64
}

pub fn decode_int64(bytes: &[u8]) -> Option<i64> {
    if !is_int64(bytes) {
        return None;
    }
    Some(i64::from_le_bytes(bytes[1..9].try_into().ok()?))
}

/// Encode a timestamp as milliseconds since the Unix epoch.
pub fn encode_time(epoch_millis: f64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(TIME_LEN);
    bytes.push(KIND_TIME);
    bytes.extend_from_slice(&epoch_millis.to_le_bytes());
    bytes
}

pub fn is_time(bytes: &[u8]) -> bool {
    bytes.len() == TIME_LEN && bytes[0] == KIND_TIME
}

pub fn decode_time(bytes: &[u8]) -> Option<f64> {
    if !is_time(bytes) {
        return None;
    }
    Some(f64::from_le_bytes(bytes[1..9].try_into().ok()?))
}

/// Encode a callback handle: owning context, then registry id.
pub fn encode_callback(context: u32, id: i64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(CALLBACK_LEN);
    bytes.push(KIND_CALLBACK);
    bytes.extend_from_slice(&context.to_le_bytes());
    bytes.extend_from_slice(&id.to_le_bytes());
    bytes
}

pub fn is_callback(bytes: &[u8]) -> bool {
    bytes.len() == CALLBACK_LEN && bytes[0] == KIND_CALLBACK
}

pub fn decode_callback(bytes: &[u8]) -> Option<(u32, i64)> {
    if !is_callback(bytes) {
        return None;
    }
    let context = u32::from_le_bytes(bytes[1..5].try_into().ok()?);
    let id = i64::from_le_bytes(bytes[5..13].try_into().ok()?);
    Some((context, id))
}
