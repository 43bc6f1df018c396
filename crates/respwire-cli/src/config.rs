//! Command-line configuration.

use clap::Parser;
use clap::Subcommand;
use respwire::DEFAULT_MAX_BULK_LEN;
use respwire::DEFAULT_MAX_DEPTH;
use respwire::DecodeLimits;
use respwire::MAX_DEPTH_CEILING;

/// Encode and decode RESP frames
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info", global = true)]
	pub log_level: String,

	/// Largest bulk string accepted when decoding, in bytes
	#[arg(long, default_value_t = DEFAULT_MAX_BULK_LEN, global = true)]
	pub max_bulk_len: usize,

	/// Deepest array nesting accepted when decoding
	#[arg(
		long,
		default_value_t = DEFAULT_MAX_DEPTH as u64,
		value_parser = clap::value_parser!(u64).range(1..=MAX_DEPTH_CEILING as u64),
		global = true
	)]
	pub max_depth: u64,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Encode a command and print its escaped wire form
	Encode {
		/// Command name and arguments
		#[arg(required = true)]
		args: Vec<String>,

		/// Send arguments that parse as integers as RESP integers
		#[arg(long)]
		integers: bool,
	},

	/// Decode escaped RESP frames such as '+OK\r\n' and print them
	Decode {
		/// Frames, with \r, \n, \t, \\, \0 and \xHH escapes
		input: String,
	},

	/// Round-trip sample commands and decode a pipelined batch
	Demo,
}

impl Cli {
	pub fn decode_limits(&self) -> DecodeLimits {
		DecodeLimits {
			max_bulk_len: self.max_bulk_len,
			max_depth: usize::try_from(self.max_depth).unwrap_or(MAX_DEPTH_CEILING),
		}
	}
}
