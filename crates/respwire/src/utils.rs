//! Wire constants and the line/number helpers shared by the encoder and
//! decoder.

use memchr::memmem;

use crate::error::DecodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Find the position of CRLF in a byte slice
#[inline]
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
	memmem::find(buf, CRLF)
}

/// Extract a line from buffer (without CRLF).
///
/// Returns the line and the number of bytes consumed including the CRLF.
#[inline]
pub fn extract_line(buf: &[u8]) -> Result<(&[u8], usize), DecodeError> {
	match find_crlf(buf) {
		Some(pos) => Ok((&buf[..pos], pos + CRLF.len())),
		None => Err(DecodeError::Incomplete),
	}
}

/// Parse a signed decimal from a byte slice.
///
/// Accepts an optional single leading `-` followed by at least one ASCII
/// digit. A leading `+`, whitespace or an overflowing value is rejected.
#[inline]
pub fn parse_integer(buf: &[u8]) -> Result<i64, DecodeError> {
	let (negative, digits) = match buf.split_first() {
		Some((b'-', rest)) => (true, rest),
		_ => (false, buf),
	};
	if digits.is_empty() {
		return Err(invalid_integer(buf));
	}

	let mut value: i64 = 0;
	for &b in digits {
		if !b.is_ascii_digit() {
			return Err(invalid_integer(buf));
		}
		let digit = i64::from(b - b'0');
		// Accumulate negatively so that i64::MIN is representable.
		value = value
			.checked_mul(10)
			.and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
			.ok_or_else(|| invalid_integer(buf))?;
	}
	Ok(value)
}

/// Parse a length or count header.
///
/// Returns `None` for the `-1` null sentinel. Any other negative value is
/// malformed.
#[inline]
pub fn parse_length(buf: &[u8], what: &str) -> Result<Option<usize>, DecodeError> {
	match parse_integer(buf)? {
		-1 => Ok(None),
		n if n < 0 => Err(DecodeError::Malformed(format!("invalid {} {}", what, n))),
		n => usize::try_from(n)
			.map(Some)
			.map_err(|_| DecodeError::Malformed(format!("{} {} out of range", what, n))),
	}
}

fn invalid_integer(buf: &[u8]) -> DecodeError {
	DecodeError::Malformed(format!(
		"invalid integer {:?}",
		String::from_utf8_lossy(buf)
	))
}
