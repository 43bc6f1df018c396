use bytes::BytesMut;
use respwire::DecodeError;

fn main() {
	println!("--- RESP Streaming Decode Example ---");

	// Simulate a TCP stream with fragmented data
	// We are sending:
	// - A Simple String: "+OK\r\n"
	// - An Integer: ":1000\r\n"
	// - An Array: "*2\r\n$3\r\nSET\r\n$3\r\nkey\r\n"
	// - But split into random chunks.
	let data_chunks = [
		b"+O".as_slice(),
		b"K\r\n:1".as_slice(),
		b"00".as_slice(),
		b"0\r\n*2\r\n$3\r\nSE".as_slice(),
		b"T\r\n$3\r\nk".as_slice(),
		b"ey\r\n".as_slice(),
	];

	let mut buffer = BytesMut::new();

	for (i, chunk) in data_chunks.iter().enumerate() {
		println!(
			"\n[Stream] Received Chunk {}: {:?}",
			i,
			String::from_utf8_lossy(chunk)
		);

		buffer.extend_from_slice(chunk);

		loop {
			match respwire::decode_buf(&mut buffer) {
				Ok(Some(value)) => {
					println!("[Decoder] Complete: {:?}", value);
				}
				Ok(None) => {
					println!("[Decoder] {}, waiting for more data...", DecodeError::Incomplete);
					break;
				}
				Err(e) => {
					eprintln!("[Decoder] Error: {}", e);
					return;
				}
			}
		}
	}
}
