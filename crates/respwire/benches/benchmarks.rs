//! Performance benchmarks for the RESP decoder and encoder

use std::hint::black_box;

use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use respwire::Arg;
use respwire::RespEncoder;

fn bench_decode_simple_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_simple_string");
	let data = b"+OK\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("simple_string", |b| {
		b.iter(|| respwire::decode(black_box(data), 0).unwrap())
	});
	group.finish();
}

fn bench_decode_bulk_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_bulk_string");
	let data = b"$11\r\nhello world\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("bulk_string", |b| {
		b.iter(|| respwire::decode(black_box(data), 0).unwrap())
	});
	group.finish();
}

fn bench_decode_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_array");
	let data = b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n";

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("array_set_command", |b| {
		b.iter(|| respwire::decode(black_box(data), 0).unwrap())
	});
	group.finish();
}

fn bench_decode_large_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_large_array");

	let mut data = b"*100\r\n".to_vec();
	for i in 0..100 {
		data.extend_from_slice(format!("$3\r\n{:03}\r\n", i).as_bytes());
	}

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("array_100_items", |b| {
		b.iter(|| respwire::decode(black_box(&data), 0).unwrap())
	});
	group.finish();
}

fn bench_decode_stream(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_stream");

	let command = respwire::encode_command(["SET", "memtier-8232902", "xx"]);
	let data = command.repeat(64);

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("pipelined_64_sets", |b| {
		b.iter(|| respwire::decode_stream(black_box(&data)).unwrap())
	});
	group.finish();
}

fn bench_encode_bulk_string(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_bulk_string");
	let value = Arg::from("hello world");

	group.bench_function("bulk_string", |b| {
		b.iter(|| black_box(&value).encode().unwrap())
	});
	group.finish();
}

fn bench_encode_command(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_command");
	let value = Arg::from(vec!["SET", "key", "value"]);

	group.bench_function("array_set_command", |b| {
		b.iter(|| black_box(&value).encode().unwrap())
	});
	group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
	let mut group = c.benchmark_group("roundtrip");
	let value = Arg::from(vec!["SET", "key", "value"]);

	group.bench_function("encode_decode", |b| {
		b.iter(|| {
			let encoded = black_box(&value).encode().unwrap();
			respwire::decode(&encoded, 0).unwrap()
		})
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_decode_simple_string,
	bench_decode_bulk_string,
	bench_decode_array,
	bench_decode_large_array,
	bench_decode_stream,
	bench_encode_bulk_string,
	bench_encode_command,
	bench_roundtrip,
);

criterion_main!(benches);
