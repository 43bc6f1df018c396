//! # respwire - RESP2 codec
//!
//! Converts values to and from the Redis Serialization Protocol (RESP2)
//! wire format. This crate is only the codec: it does no I/O, keeps no
//! state between calls and never logs. Transports hand it byte buffers and
//! consume the values it produces.
//!
//! - [`encode`] / [`encode_command`] turn an [`Arg`] (bytes, text, integer
//!   or a nested sequence of those) into a RESP frame.
//! - [`decode`] parses one frame at an offset and reports how many bytes it
//!   used.
//! - [`decode_stream`] parses a buffer made of several frames back to back.
//!
//! A buffer that ends mid-frame yields [`DecodeError::Incomplete`], which
//! the caller resolves by reading more bytes and retrying. Every other
//! decode error means the stream is out of sync.
//!
//! ## Example
//!
//! ```rust
//! use respwire::RespValue;
//!
//! let wire = respwire::encode_command(["SET", "k", "v"]);
//! assert_eq!(&wire[..], b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n");
//!
//! let (value, consumed) = respwire::decode(&wire, 0).unwrap();
//! assert_eq!(value, RespValue::from(vec!["SET", "k", "v"]));
//! assert_eq!(consumed, wire.len());
//! ```

mod decode;
mod encode;
mod error;
mod stream;
mod types;
mod utils;

pub use decode::DEFAULT_MAX_BULK_LEN;
pub use decode::DEFAULT_MAX_DEPTH;
pub use decode::MAX_DEPTH_CEILING;
pub use decode::DecodeLimits;
pub use decode::Decoder;
pub use decode::decode;
pub use decode::decode_buf;
pub use encode::Arg;
pub use encode::RespEncoder;
pub use encode::encode;
pub use encode::encode_command;
pub use error::DecodeError;
pub use error::EncodeError;
pub use stream::Frames;
pub use stream::decode_stream;
pub use types::RespValue;

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_send_sync<T: Send + Sync>() {}

	#[test]
	fn test_public_types_are_send_sync() {
		assert_send_sync::<Decoder>();
		assert_send_sync::<DecodeLimits>();
		assert_send_sync::<Frames<'static>>();
		assert_send_sync::<RespValue>();
		assert_send_sync::<Arg>();
		assert_send_sync::<DecodeError>();
		assert_send_sync::<EncodeError>();
	}
}
