//! RESP data types and value representation.

use std::fmt;

use bytes::Bytes;

/// Represents a decoded RESP2 value.
///
/// Nulls are modelled with `Option` on the two length-prefixed variants, so
/// `$-1\r\n` and `$0\r\n\r\n` (or `*-1\r\n` and `*0\r\n`) never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RespValue {
	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Error: `-ERR message\r\n`
	Error(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`, or `$-1\r\n` for `None`
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`, or `*-1\r\n` for `None`
	Array(Option<Vec<RespValue>>),
}

impl RespValue {
	/// Check if the value is an error
	pub fn is_error(&self) -> bool {
		matches!(self, RespValue::Error(_))
	}

	/// Check if the value is a null bulk string or a null array
	pub fn is_null(&self) -> bool {
		matches!(self, RespValue::BulkString(None) | RespValue::Array(None))
	}

	/// Try to convert to a string slice
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
	}

	/// Try to convert to bytes
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(b) | RespValue::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

	/// Error message bytes, if this is an error reply
	pub fn as_error(&self) -> Option<&Bytes> {
		match self {
			RespValue::Error(e) => Some(e),
			_ => None,
		}
	}

	/// Try to convert to integer
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			RespValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Try to convert to array
	pub fn as_array(&self) -> Option<&[RespValue]> {
		match self {
			RespValue::Array(Some(a)) => Some(a),
			_ => None,
		}
	}

	/// Convert to String with lossy UTF-8 conversion
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes()
			.map(|s| String::from_utf8_lossy(s).into_owned())
	}

	/// Try to consume and convert to Vec<RespValue>
	pub fn into_vec(self) -> Option<Vec<RespValue>> {
		match self {
			RespValue::Array(a) => a,
			_ => None,
		}
	}

	// Convenience constructors

	/// Create a simple string value
	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		RespValue::SimpleString(s.into())
	}

	/// Create an error value
	pub fn error(e: impl Into<Bytes>) -> Self {
		RespValue::Error(e.into())
	}

	/// Create an integer value
	pub fn integer(i: i64) -> Self {
		RespValue::Integer(i)
	}

	/// Create a bulk string value
	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		RespValue::BulkString(Some(s.into()))
	}

	/// Create the null bulk string, `$-1\r\n`
	pub fn null_bulk_string() -> Self {
		RespValue::BulkString(None)
	}

	/// Create an array value from an iterator
	pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Array(Some(items.into_iter().collect()))
	}

	/// Create the null array, `*-1\r\n`
	pub fn null_array() -> Self {
		RespValue::Array(None)
	}
}

/// Renders values the way `redis-cli` prints replies.
impl fmt::Display for RespValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RespValue::SimpleString(s) => write!(f, "{}", String::from_utf8_lossy(s)),
			RespValue::Error(e) => write!(f, "(error) {}", String::from_utf8_lossy(e)),
			RespValue::Integer(i) => write!(f, "(integer) {}", i),
			RespValue::BulkString(Some(b)) => write!(f, "\"{}\"", b.escape_ascii()),
			RespValue::BulkString(None) | RespValue::Array(None) => f.write_str("(nil)"),
			RespValue::Array(Some(items)) if items.is_empty() => f.write_str("(empty array)"),
			RespValue::Array(Some(items)) => {
				let width = items.len().to_string().len();
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str("\n")?;
					}
					let prefix = format!("{:>width$}) ", i + 1);
					let rendered = item.to_string();
					for (j, line) in rendered.lines().enumerate() {
						if j == 0 {
							write!(f, "{}{}", prefix, line)?;
						} else {
							write!(f, "\n{:indent$}{}", "", line, indent = prefix.len())?;
						}
					}
				}
				Ok(())
			}
		}
	}
}

// Convenient From implementations
impl From<&str> for RespValue {
	fn from(s: &str) -> Self {
		RespValue::BulkString(Some(Bytes::copy_from_slice(s.as_bytes())))
	}
}

impl From<String> for RespValue {
	fn from(s: String) -> Self {
		RespValue::BulkString(Some(Bytes::from(s)))
	}
}

impl From<&[u8]> for RespValue {
	fn from(b: &[u8]) -> Self {
		RespValue::BulkString(Some(Bytes::copy_from_slice(b)))
	}
}

impl From<Vec<u8>> for RespValue {
	fn from(v: Vec<u8>) -> Self {
		RespValue::BulkString(Some(Bytes::from(v)))
	}
}

impl From<Bytes> for RespValue {
	fn from(b: Bytes) -> Self {
		RespValue::BulkString(Some(b))
	}
}

impl From<i64> for RespValue {
	fn from(i: i64) -> Self {
		RespValue::Integer(i)
	}
}

impl From<i32> for RespValue {
	fn from(i: i32) -> Self {
		RespValue::Integer(i64::from(i))
	}
}

impl<T: Into<RespValue>> From<Vec<T>> for RespValue {
	fn from(v: Vec<T>) -> Self {
		RespValue::Array(Some(v.into_iter().map(Into::into).collect()))
	}
}
