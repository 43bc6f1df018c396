//! Escaped text form of raw frames, so they can be typed on a command line
//! and printed back readably.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
	#[error("Dangling backslash at end of input")]
	DanglingBackslash,

	#[error("Unknown escape sequence '\\{0}'")]
	UnknownEscape(char),

	#[error("Invalid hex escape '\\x{0}'")]
	InvalidHex(String),
}

/// Turn `\r`, `\n`, `\t`, `\0`, `\xHH` and escaped quotes or backslashes
/// into bytes.
pub fn unescape(input: &str) -> Result<Vec<u8>, EscapeError> {
	let mut out = Vec::with_capacity(input.len());
	let mut chars = input.chars();

	while let Some(c) = chars.next() {
		if c != '\\' {
			let mut utf8 = [0u8; 4];
			out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
			continue;
		}
		match chars.next().ok_or(EscapeError::DanglingBackslash)? {
			'r' => out.push(b'\r'),
			'n' => out.push(b'\n'),
			't' => out.push(b'\t'),
			'0' => out.push(0),
			'\\' => out.push(b'\\'),
			'"' => out.push(b'"'),
			'\'' => out.push(b'\''),
			'x' => {
				let hex: String = chars.by_ref().take(2).collect();
				let byte = (hex.len() == 2 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
					.then(|| u8::from_str_radix(&hex, 16).ok())
					.flatten()
					.ok_or(EscapeError::InvalidHex(hex))?;
				out.push(byte);
			}
			other => return Err(EscapeError::UnknownEscape(other)),
		}
	}

	Ok(out)
}

/// Render bytes with non-printable characters escaped.
pub fn escape(bytes: &[u8]) -> String {
	bytes.escape_ascii().to_string()
}
