//! RESP encoder for outgoing commands.
//!
//! Only the client-request subset of RESP is produced: integers, bulk
//! strings and arrays. Simple strings, errors and nulls are reply-side
//! concepts and are rejected with [`EncodeError::UnsupportedType`].

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::RespValue;
use crate::error::EncodeError;
use crate::utils::ARRAY;
use crate::utils::BULK_STRING;
use crate::utils::CRLF;
use crate::utils::INTEGER;

/// A value to be sent to a RESP peer.
///
/// This is the closed set of input shapes the encoder understands. Text is
/// sent as its UTF-8 bytes, so `Arg::Text` and `Arg::Bytes` produce the same
/// bulk string frame for the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
	Bytes(Bytes),
	Text(String),
	Integer(i64),
	Sequence(Vec<Arg>),
}

/// Trait for encoding RESP values.
pub trait RespEncoder {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError>;

	fn encode(&self) -> Result<Bytes, EncodeError> {
		let mut buf = BytesMut::new();
		self.encode_to(&mut buf)?;
		Ok(buf.freeze())
	}
}

impl RespEncoder for Arg {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		encode_arg(buf, self);
		Ok(())
	}
}

impl RespEncoder for RespValue {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		match self {
			RespValue::Integer(i) => encode_integer(buf, *i),
			RespValue::BulkString(Some(s)) => encode_bulk_string(buf, s),
			RespValue::Array(Some(items)) => {
				encode_length(buf, ARRAY, items.len());
				for item in items {
					item.encode_to(buf)?;
				}
			}
			RespValue::SimpleString(_) => {
				return Err(EncodeError::UnsupportedType("simple string"));
			}
			RespValue::Error(_) => return Err(EncodeError::UnsupportedType("error")),
			RespValue::BulkString(None) => {
				return Err(EncodeError::UnsupportedType("null bulk string"));
			}
			RespValue::Array(None) => return Err(EncodeError::UnsupportedType("null array")),
		}
		Ok(())
	}
}

/// Encode a single value into a fresh buffer.
///
/// ```rust
/// use respwire::Arg;
///
/// let encoded = respwire::encode(&Arg::from("ping")).unwrap();
/// assert_eq!(&encoded[..], b"$4\r\nping\r\n");
/// ```
pub fn encode<T: RespEncoder + ?Sized>(value: &T) -> Result<Bytes, EncodeError> {
	value.encode()
}

/// Encode a command given as a list of arguments.
///
/// Every argument kind has a wire representation, so this cannot fail.
pub fn encode_command<I, A>(args: I) -> Bytes
where
	I: IntoIterator<Item = A>,
	A: Into<Arg>,
{
	let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
	let mut buf = BytesMut::new();
	encode_length(&mut buf, ARRAY, args.len());
	for arg in &args {
		encode_arg(&mut buf, arg);
	}
	buf.freeze()
}

fn encode_arg(buf: &mut BytesMut, arg: &Arg) {
	match arg {
		Arg::Bytes(b) => encode_bulk_string(buf, b),
		Arg::Text(s) => encode_bulk_string(buf, s.as_bytes()),
		Arg::Integer(i) => encode_integer(buf, *i),
		Arg::Sequence(items) => {
			encode_length(buf, ARRAY, items.len());
			for item in items {
				encode_arg(buf, item);
			}
		}
	}
}

#[inline]
fn encode_integer(buf: &mut BytesMut, i: i64) {
	buf.put_u8(INTEGER);
	buf.put_slice(i.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn encode_length(buf: &mut BytesMut, marker: u8, length: usize) {
	buf.put_u8(marker);
	buf.put_slice(length.to_string().as_bytes());
	buf.put_slice(CRLF);
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, s: &[u8]) {
	encode_length(buf, BULK_STRING, s.len());
	buf.put_slice(s);
	buf.put_slice(CRLF);
}

impl From<&str> for Arg {
	fn from(s: &str) -> Self {
		Arg::Text(s.to_string())
	}
}

impl From<String> for Arg {
	fn from(s: String) -> Self {
		Arg::Text(s)
	}
}

impl From<&String> for Arg {
	fn from(s: &String) -> Self {
		Arg::Text(s.clone())
	}
}

impl From<&[u8]> for Arg {
	fn from(b: &[u8]) -> Self {
		Arg::Bytes(Bytes::copy_from_slice(b))
	}
}

impl<const N: usize> From<&[u8; N]> for Arg {
	fn from(b: &[u8; N]) -> Self {
		Arg::Bytes(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for Arg {
	fn from(v: Vec<u8>) -> Self {
		Arg::Bytes(Bytes::from(v))
	}
}

impl From<Bytes> for Arg {
	fn from(b: Bytes) -> Self {
		Arg::Bytes(b)
	}
}

macro_rules! impl_from_integer {
	($($t:ty),*) => {
		$(
			impl From<$t> for Arg {
				fn from(i: $t) -> Self {
					Arg::Integer(i64::from(i))
				}
			}
		)*
	};
}

// `u8` is left out so that `Vec<u8>` stays bytes; `u64` and `usize` may not
// fit in an `i64`.
impl_from_integer!(i8, i16, i32, i64, u16, u32);

impl<T: Into<Arg>> From<Vec<T>> for Arg {
	fn from(v: Vec<T>) -> Self {
		Arg::Sequence(v.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
	fn from(v: [T; N]) -> Self {
		Arg::Sequence(v.into_iter().map(Into::into).collect())
	}
}

/// The decoded form of an argument: text and bytes become bulk strings.
impl From<Arg> for RespValue {
	fn from(arg: Arg) -> Self {
		match arg {
			Arg::Bytes(b) => RespValue::BulkString(Some(b)),
			Arg::Text(s) => RespValue::BulkString(Some(Bytes::from(s))),
			Arg::Integer(i) => RespValue::Integer(i),
			Arg::Sequence(items) => {
				RespValue::Array(Some(items.into_iter().map(Into::into).collect()))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_encode_text() {
		let encoded = encode(&Arg::from("ping")).unwrap();
		assert_eq!(encoded, b"$4\r\nping\r\n".as_slice());
	}

	#[test]
	fn test_encode_text_with_spaces() {
		let encoded = encode(&Arg::from("set some value")).unwrap();
		assert_eq!(encoded, b"$14\r\nset some value\r\n".as_slice());
	}

	#[test]
	fn test_encode_text_utf8() {
		let encoded = encode(&Arg::from("héllo")).unwrap();
		assert_eq!(encoded, "$6\r\nhéllo\r\n".as_bytes());
	}

	#[rstest]
	#[case(100, b":100\r\n")]
	#[case(-100, b":-100\r\n")]
	#[case(0, b":0\r\n")]
	#[case(i64::MIN, b":-9223372036854775808\r\n")]
	fn test_encode_integer(#[case] input: i64, #[case] expected: &[u8]) {
		let encoded = encode(&Arg::Integer(input)).unwrap();
		assert_eq!(encoded, expected);
	}

	#[rstest]
	#[case(Arg::from(-8i8))]
	#[case(Arg::from(-8i16))]
	#[case(Arg::from(-8i32))]
	#[case(Arg::from(-8i64))]
	fn test_integer_conversions(#[case] arg: Arg) {
		assert_eq!(arg, Arg::Integer(-8));
	}

	#[test]
	fn test_unsigned_integer_conversions() {
		assert_eq!(Arg::from(u16::MAX), Arg::Integer(65535));
		assert_eq!(Arg::from(u32::MAX), Arg::Integer(4294967295));
		assert_eq!(Arg::from(vec![7u8, 8]), Arg::Bytes(Bytes::from_static(&[7, 8])));
	}

	#[test]
	fn test_encode_bytes() {
		let encoded = encode(&Arg::from(&b"\x00\r\n\xff"[..])).unwrap();
		assert_eq!(encoded, b"$4\r\n\x00\r\n\xff\r\n".as_slice());
	}

	#[test]
	fn test_encode_bytes_empty() {
		let encoded = encode(&Arg::Bytes(Bytes::new())).unwrap();
		assert_eq!(encoded, b"$0\r\n\r\n".as_slice());
	}

	#[test]
	fn test_encode_sequence() {
		let encoded = encode(&Arg::from(["SET", "k", "v"])).unwrap();
		assert_eq!(
			encoded,
			b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_sequence_empty() {
		let encoded = encode(&Arg::Sequence(vec![])).unwrap();
		assert_eq!(encoded, b"*0\r\n".as_slice());
	}

	#[test]
	fn test_encode_nested_sequence() {
		let arg = Arg::Sequence(vec![
			Arg::from("EXEC"),
			Arg::from(vec![Arg::from(1), Arg::from("x")]),
		]);
		let encoded = encode(&arg).unwrap();
		assert_eq!(
			encoded,
			b"*2\r\n$4\r\nEXEC\r\n*2\r\n:1\r\n$1\r\nx\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_command() {
		let encoded = encode_command(["SET", "k", "v"]);
		assert_eq!(
			encoded,
			b"*3\r\n$3\r\nSET\r\n$1\r\nk\r\n$1\r\nv\r\n".as_slice()
		);

		let mixed = encode_command(vec![Arg::from("EXPIRE"), Arg::from("k"), Arg::from(10)]);
		assert_eq!(
			mixed,
			b"*3\r\n$6\r\nEXPIRE\r\n$1\r\nk\r\n:10\r\n".as_slice()
		);
	}

	#[test]
	fn test_encode_value() {
		let val = RespValue::array(vec![
			RespValue::bulk_string("GET"),
			RespValue::integer(-1),
		]);
		let encoded = val.encode().unwrap();
		assert_eq!(encoded, b"*2\r\n$3\r\nGET\r\n:-1\r\n".as_slice());
	}

	#[rstest]
	#[case(RespValue::simple_string("OK"), "simple string")]
	#[case(RespValue::error("ERR"), "error")]
	#[case(RespValue::null_bulk_string(), "null bulk string")]
	#[case(RespValue::null_array(), "null array")]
	#[case(RespValue::array(vec![RespValue::bulk_string("a"), RespValue::null_array()]), "null array")]
	fn test_encode_value_unsupported(#[case] value: RespValue, #[case] shape: &'static str) {
		assert_eq!(value.encode(), Err(EncodeError::UnsupportedType(shape)));
	}

	#[test]
	fn test_arg_into_value() {
		let value = RespValue::from(Arg::from(vec![Arg::from("a"), Arg::from(2)]));
		assert_eq!(
			value,
			RespValue::array(vec![RespValue::bulk_string("a"), RespValue::integer(2)])
		);
	}
}
