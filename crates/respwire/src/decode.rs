//! RESP decoder.
//!
//! Decoding works on a plain byte slice and an absolute cursor into it.
//! Nested arrays recurse with the cursor, so nothing is sliced or copied
//! until a leaf payload is extracted. The decoder keeps no state between
//! calls: a caller that receives [`DecodeError::Incomplete`] appends more
//! bytes and retries from the same offset.

use bytes::Buf;
use bytes::Bytes;
use bytes::BytesMut;

use crate::error::DecodeError;
use crate::types::RespValue;
use crate::utils::*;

/// Largest bulk string accepted by default (512 MB, same as Redis)
pub const DEFAULT_MAX_BULK_LEN: usize = 512 * 1024 * 1024;

/// Deepest array nesting accepted by default
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Hard ceiling on [`DecodeLimits::max_depth`].
///
/// Arrays are decoded recursively, one stack frame per level, so a larger
/// limit is clamped to this value.
pub const MAX_DEPTH_CEILING: usize = 256;

/// Bounds applied to untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
	/// Maximum declared length of a bulk string
	pub max_bulk_len: usize,
	/// Maximum number of nested array levels, the outermost array included.
	/// Clamped to [`MAX_DEPTH_CEILING`].
	pub max_depth: usize,
}

impl Default for DecodeLimits {
	fn default() -> Self {
		Self {
			max_bulk_len: DEFAULT_MAX_BULK_LEN,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

/// A stateless RESP2 decoder.
///
/// Holds only its [`DecodeLimits`]; it is `Copy` and can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
	limits: DecodeLimits,
}

impl Decoder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_limits(limits: DecodeLimits) -> Self {
		Self {
			limits: DecodeLimits {
				max_depth: limits.max_depth.min(MAX_DEPTH_CEILING),
				..limits
			},
		}
	}

	pub fn limits(&self) -> &DecodeLimits {
		&self.limits
	}

	/// Decode one frame starting at `offset`.
	///
	/// Returns the value and the number of bytes consumed from `offset`.
	pub fn decode(&self, buf: &[u8], offset: usize) -> Result<(RespValue, usize), DecodeError> {
		let (value, end) = self.decode_at(buf, offset, 0)?;
		Ok((value, end - offset))
	}

	/// Decode one frame from the front of a caller-owned buffer.
	///
	/// On success the frame's bytes are removed from `buf`. If the buffer
	/// does not hold a whole frame yet, `Ok(None)` is returned and `buf` is
	/// left untouched.
	pub fn decode_buf(&self, buf: &mut BytesMut) -> Result<Option<RespValue>, DecodeError> {
		match self.decode(buf, 0) {
			Ok((value, consumed)) => {
				buf.advance(consumed);
				Ok(Some(value))
			}
			Err(DecodeError::Incomplete) => Ok(None),
			Err(e) => Err(e),
		}
	}

	/// Decode the frame at `pos`, returning the value and the absolute
	/// position just past it.
	pub(crate) fn decode_at(
		&self,
		buf: &[u8],
		pos: usize,
		depth: usize,
	) -> Result<(RespValue, usize), DecodeError> {
		let Some(&marker) = buf.get(pos) else {
			return Err(DecodeError::Incomplete);
		};

		match marker {
			SIMPLE_STRING => {
				let (line, end) = read_line(buf, pos)?;
				Ok((RespValue::SimpleString(Bytes::copy_from_slice(line)), end))
			}
			ERROR => {
				let (line, end) = read_line(buf, pos)?;
				Ok((RespValue::Error(Bytes::copy_from_slice(line)), end))
			}
			INTEGER => {
				let (line, end) = read_line(buf, pos)?;
				Ok((RespValue::Integer(parse_integer(line)?), end))
			}
			BULK_STRING => self.decode_bulk_string(buf, pos),
			ARRAY => self.decode_array(buf, pos, depth),
			other => Err(DecodeError::UnknownType(other)),
		}
	}

	fn decode_bulk_string(&self, buf: &[u8], pos: usize) -> Result<(RespValue, usize), DecodeError> {
		// $6\r\nfoobar\r\n
		let (line, body) = read_line(buf, pos)?;
		let Some(length) = parse_length(line, "bulk string length")? else {
			return Ok((RespValue::BulkString(None), body));
		};
		if length > self.limits.max_bulk_len {
			return Err(DecodeError::Malformed(format!(
				"bulk string length {} exceeds limit of {} bytes",
				length, self.limits.max_bulk_len
			)));
		}

		let payload_end = body.saturating_add(length);
		let frame_end = payload_end.saturating_add(CRLF.len());

		if buf.len() < frame_end {
			// Terminator bytes that already arrived must still agree with CRLF.
			if buf.len() > payload_end && !CRLF.starts_with(&buf[payload_end..]) {
				return Err(missing_terminator());
			}
			return Err(DecodeError::Incomplete);
		}
		if &buf[payload_end..frame_end] != CRLF {
			return Err(missing_terminator());
		}

		let data = Bytes::copy_from_slice(&buf[body..payload_end]);
		Ok((RespValue::BulkString(Some(data)), frame_end))
	}

	fn decode_array(
		&self,
		buf: &[u8],
		pos: usize,
		depth: usize,
	) -> Result<(RespValue, usize), DecodeError> {
		let (line, body) = read_line(buf, pos)?;
		let Some(count) = parse_length(line, "array length")? else {
			return Ok((RespValue::Array(None), body));
		};
		if depth >= self.limits.max_depth {
			return Err(DecodeError::Malformed(format!(
				"array nesting exceeds limit of {} levels",
				self.limits.max_depth
			)));
		}

		// The smallest frame is three bytes, so never reserve more than the
		// remaining input could hold.
		let mut elements = Vec::with_capacity(count.min((buf.len() - body) / 3));
		let mut cursor = body;
		for _ in 0..count {
			let (value, end) = self.decode_at(buf, cursor, depth + 1)?;
			elements.push(value);
			cursor = end;
		}

		Ok((RespValue::Array(Some(elements)), cursor))
	}
}

/// Read the header line of the frame whose type marker is at `pos`.
///
/// Returns the line without the marker or CRLF, and the absolute position
/// just past the CRLF.
#[inline]
fn read_line(buf: &[u8], pos: usize) -> Result<(&[u8], usize), DecodeError> {
	let (line, consumed) = extract_line(&buf[pos + 1..])?;
	Ok((line, pos + 1 + consumed))
}

fn missing_terminator() -> DecodeError {
	DecodeError::Malformed("bulk string payload not terminated by CRLF".to_string())
}

/// Decode one frame at `offset` with the default limits.
///
/// ```rust
/// use respwire::RespValue;
///
/// let (value, consumed) = respwire::decode(b"+OK\r\n", 0).unwrap();
/// assert_eq!(value, RespValue::simple_string("OK"));
/// assert_eq!(consumed, 5);
/// ```
pub fn decode(buf: &[u8], offset: usize) -> Result<(RespValue, usize), DecodeError> {
	Decoder::new().decode(buf, offset)
}

/// Decode one frame from the front of `buf` with the default limits.
///
/// See [`Decoder::decode_buf`].
pub fn decode_buf(buf: &mut BytesMut) -> Result<Option<RespValue>, DecodeError> {
	Decoder::new().decode_buf(buf)
}
