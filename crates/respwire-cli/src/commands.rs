//! Subcommand implementations. Each returns the text to print on stdout.

use std::fmt::Write;

use respwire::Arg;
use respwire::Decoder;
use respwire::RespEncoder;

use crate::config::Cli;
use crate::config::Command;
use crate::escape::escape;
use crate::escape::unescape;

pub type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Three pipelined `SET` commands captured from a memtier benchmark run.
pub const PIPELINED_SETS: &[u8] = b"*3\r\n$3\r\nSET\r\n$15\r\nmemtier-8232902\r\n$2\r\nxx\r\n\
*3\r\n$3\r\nSET\r\n$15\r\nmemtier-8232902\r\n$2\r\nxx\r\n\
*3\r\n$3\r\nSET\r\n$15\r\nmemtier-7630684\r\n$3\r\nAAA\r\n";

/// Run the selected subcommand and return its output.
pub fn run(cli: &Cli) -> CliResult<String> {
	let decoder = Decoder::with_limits(cli.decode_limits());
	log::debug!("Decoder limits: {:?}", decoder.limits());

	match &cli.command {
		Command::Encode { args, integers } => encode(args, *integers),
		Command::Decode { input } => decode(&decoder, input),
		Command::Demo => demo(&decoder),
	}
}

pub fn encode(args: &[String], integers: bool) -> CliResult<String> {
	let args: Vec<Arg> = args
		.iter()
		.map(|a| match a.parse::<i64>() {
			Ok(i) if integers => Arg::Integer(i),
			_ => Arg::from(a),
		})
		.collect();
	let encoded = Arg::Sequence(args).encode()?;
	log::debug!("Encoded command into {} bytes", encoded.len());
	Ok(escape(&encoded))
}

pub fn decode(decoder: &Decoder, input: &str) -> CliResult<String> {
	let bytes = unescape(input)?;
	let mut out = String::new();
	let mut frames = decoder.frames(&bytes);
	let mut count = 0;

	while let Some(frame) = frames.next() {
		let value = frame.inspect_err(|_| {
			log::debug!("Decoding stopped at offset {}", frames.position());
		})?;
		count += 1;
		log::debug!("Frame {} ends at offset {}", count, frames.position());
		if count > 1 {
			out.push('\n');
		}
		write!(out, "{}", value)?;
	}

	log::info!("Decoded {} frame(s) from {} bytes", count, bytes.len());
	Ok(out)
}

pub fn demo(decoder: &Decoder) -> CliResult<String> {
	let mut out = String::new();

	let ping = Arg::from("ping").encode()?;
	let (value, consumed) = decoder.decode(&ping, 0)?;
	writeln!(out, "encode(\"ping\")           = {}", escape(&ping))?;
	writeln!(out, "decode(encode(\"ping\"))   = {} ({} bytes)", value, consumed)?;

	for text in ["set some value", "foobar"] {
		let encoded = Arg::from(text).encode()?;
		writeln!(out, "encode({:?}) = {}", text, escape(&encoded))?;
	}

	let set = respwire::encode_command(["SET", "k", "v"]);
	writeln!(out, "encode([\"SET\", \"k\", \"v\"]) = {}", escape(&set))?;

	let (first, consumed) = decoder.decode(PIPELINED_SETS, 0)?;
	writeln!(out, "\nFirst frame of the pipelined batch ({} bytes):", consumed)?;
	writeln!(out, "{}", first)?;

	let values = decoder.decode_stream(PIPELINED_SETS)?;
	log::info!(
		"Stream-decoded {} frames from {} bytes",
		values.len(),
		PIPELINED_SETS.len()
	);
	writeln!(out, "\nWhole batch ({} frames):", values.len())?;
	for value in &values {
		writeln!(out, "{}", value)?;
	}

	Ok(out)
}
