//! Error types for RESP encoding and decoding.

use thiserror::Error;

/// Errors that can occur during RESP encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
	/// The value has no outgoing RESP representation
	#[error("Cannot encode '{0}' type")]
	UnsupportedType(&'static str),
}

/// Errors that can occur during RESP decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	/// The leading byte is not a known type marker.
	///
	/// The stream cannot be resumed at this position.
	#[error("Unknown type: {}", escape_marker(.0))]
	UnknownType(u8),

	/// The buffer does not yet hold a complete frame.
	///
	/// Retry from the same offset once more bytes have arrived.
	#[error("Incomplete frame")]
	Incomplete,

	/// The frame header is present but inconsistent.
	#[error("Malformed frame: {0}")]
	Malformed(String),
}

impl DecodeError {
	/// Whether more input could turn this error into a successful decode
	pub fn is_incomplete(&self) -> bool {
		matches!(self, DecodeError::Incomplete)
	}
}

fn escape_marker(marker: &u8) -> String {
	(*marker as char).escape_default().to_string()
}
