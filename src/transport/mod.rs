//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod scalar;
mod send;

pub use send::{TransportError, decode_send_json_response, encode_send_form};
