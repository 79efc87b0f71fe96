//! Debug dump of transport trees, JSON-like, for diagnostics and tests.

use std::fmt;

use crate::value::TransportValue;

/// Render a transport tree on one line. Doubles with no fractional part
/// print in integer form; Binary nodes print as a kind/length stub.
pub fn dump(value: &TransportValue) -> String {
    let mut out = String::new();
    append(value, &mut out);
    out
}

fn append(value: &TransportValue, out: &mut String) {
    match value {
        TransportValue::Null => out.push_str("null"),
        TransportValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        TransportValue::Int(i) => {
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(*i));
        }
        TransportValue::Double(d) => {
            if d.fract() == 0.0 && d.is_finite() {
                let mut buf = itoa::Buffer::new();
                out.push_str(buf.format(*d as i64));
            } else {
                let mut buf = ryu::Buffer::new();
                out.push_str(buf.format(*d));
            }
        }
        TransportValue::String(s) => {
            out.push('"');
            for c in s.chars() {
                match c {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\t' => out.push_str("\\t"),
                    c => out.push(c),
                }
            }
            out.push('"');
        }
        TransportValue::Binary(bytes) => {
            out.push_str("<binary");
            if let Some(kind) = bytes.first() {
                out.push(' ');
                let mut buf = itoa::Buffer::new();
                out.push_str(buf.format(*kind));
            }
            out.push(':');
            let mut buf = itoa::Buffer::new();
            out.push_str(buf.format(bytes.len()));
            out.push('>');
        }
        TransportValue::List(list) => {
            out.push('[');
            for i in 0..list.size() {
                if i > 0 {
                    out.push(',');
                }
                match list.get(i) {
                    Some(item) => append(item, out),
                    None => out.push_str("null"),
                }
            }
            out.push(']');
        }
        TransportValue::Dictionary(dict) => {
            out.push('{');
            for (i, key) in dict.get_keys().iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                match dict.get(key) {
                    Some(item) => append(item, out),
                    None => out.push_str("null"),
                }
            }
            out.push('}');
        }
    }
}

impl fmt::Display for TransportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dump(self))
    }
}
