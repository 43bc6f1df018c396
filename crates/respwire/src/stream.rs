//! Decoding of buffers that hold several frames back to back, such as a
//! batch of pipelined commands or replies.

use std::iter::FusedIterator;

use crate::decode::Decoder;
use crate::error::DecodeError;
use crate::types::RespValue;

/// Iterator over the frames of a fixed buffer.
///
/// Each item is the next decoded frame. After the first error no further
/// items are produced, and [`Frames::position`] stays at the start of the
/// frame that failed. Iteration never outlives the buffer and can be
/// restarted from offset 0 by creating a new `Frames`.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
	decoder: Decoder,
	buf: &'a [u8],
	pos: usize,
	done: bool,
}

impl<'a> Frames<'a> {
	pub(crate) fn new(decoder: Decoder, buf: &'a [u8]) -> Self {
		Self {
			decoder,
			buf,
			pos: 0,
			done: false,
		}
	}

	/// Offset of the next frame to decode.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// The bytes not consumed yet.
	pub fn remaining(&self) -> &'a [u8] {
		&self.buf[self.pos..]
	}
}

impl Iterator for Frames<'_> {
	type Item = Result<RespValue, DecodeError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.pos >= self.buf.len() {
			return None;
		}

		match self.decoder.decode_at(self.buf, self.pos, 0) {
			Ok((value, end)) => {
				self.pos = end;
				Some(Ok(value))
			}
			Err(e) => {
				self.done = true;
				Some(Err(e))
			}
		}
	}
}

impl FusedIterator for Frames<'_> {}

impl Decoder {
	/// Iterate over the frames in `buf`, starting at offset 0.
	pub fn frames<'a>(&self, buf: &'a [u8]) -> Frames<'a> {
		Frames::new(*self, buf)
	}

	/// Decode every frame in `buf`.
	///
	/// The buffer must end exactly on a frame boundary; a partial trailing
	/// frame fails the whole call with [`DecodeError::Incomplete`].
	pub fn decode_stream(&self, buf: &[u8]) -> Result<Vec<RespValue>, DecodeError> {
		self.frames(buf).collect()
	}
}

/// Decode every frame in `buf` with the default limits.
///
/// ```rust
/// let values = respwire::decode_stream(b"+OK\r\n:1\r\n").unwrap();
/// assert_eq!(values.len(), 2);
/// ```
pub fn decode_stream(buf: &[u8]) -> Result<Vec<RespValue>, DecodeError> {
	Decoder::new().decode_stream(buf)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_decode_stream_empty() {
		assert_eq!(decode_stream(b"").unwrap(), Vec::<RespValue>::new());
	}

	#[test]
	fn test_decode_stream_mixed() {
		let values = decode_stream(b"+OK\r\n-ERR no\r\n:3\r\n$-1\r\n*0\r\n").unwrap();
		assert_eq!(
			values,
			vec![
				RespValue::simple_string("OK"),
				RespValue::error("ERR no"),
				RespValue::integer(3),
				RespValue::null_bulk_string(),
				RespValue::array(vec![]),
			]
		);
	}

	#[test]
	fn test_decode_stream_trailing_partial() {
		assert_eq!(decode_stream(b"+OK\r\n:1"), Err(DecodeError::Incomplete));
	}

	#[test]
	fn test_decode_stream_trailing_garbage() {
		assert_eq!(
			decode_stream(b"+OK\r\n!oops\r\n"),
			Err(DecodeError::UnknownType(b'!'))
		);
	}

	#[test]
	fn test_frames_position() {
		let buf = b"+OK\r\n:1\r\n$2\r\nhi";
		let mut frames = Decoder::new().frames(buf);
		assert_eq!(frames.position(), 0);

		assert_eq!(frames.next(), Some(Ok(RespValue::simple_string("OK"))));
		assert_eq!(frames.position(), 5);

		assert_eq!(frames.next(), Some(Ok(RespValue::integer(1))));
		assert_eq!(frames.position(), 9);
		assert_eq!(frames.remaining(), b"$2\r\nhi");

		assert_eq!(frames.next(), Some(Err(DecodeError::Incomplete)));
		assert_eq!(frames.position(), 9);
		assert_eq!(frames.next(), None);
	}

	#[test]
	fn test_frames_restartable() {
		let buf = b":1\r\n:2\r\n";
		let decoder = Decoder::new();
		let first: Vec<_> = decoder.frames(buf).collect();
		let second: Vec<_> = decoder.frames(buf).collect();
		assert_eq!(first, second);
		assert_eq!(first.len(), 2);
	}
}
