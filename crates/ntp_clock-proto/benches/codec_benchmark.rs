// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

// Benchmarks for request encoding, reply decoding and civil time conversion.

use std::hint::black_box;

use clock_proto::protocol::{FromBytes, Packet};
use clock_proto::{apply_offset, decode_reply, encode_request, to_civil};
use criterion::{Criterion, criterion_group, criterion_main};

fn make_reply() -> [u8; 48] {
    let mut reply = [0u8; 48];
    reply[0] = 0x24;
    reply[1] = 2;
    reply[40..44].copy_from_slice(&3_913_056_000u32.to_be_bytes());
    reply
}

fn bench_encode_request(c: &mut Criterion) {
    c.bench_function("encode_request", |b| b.iter(|| black_box(encode_request())));
}

fn bench_decode_reply(c: &mut Criterion) {
    let reply = make_reply();
    c.bench_function("decode_reply", |b| {
        b.iter(|| decode_reply(black_box(&reply)))
    });
}

fn bench_packet_from_bytes(c: &mut Criterion) {
    let reply = make_reply();
    c.bench_function("packet_from_bytes", |b| {
        b.iter(|| Packet::from_bytes(black_box(&reply)))
    });
}

fn bench_to_civil(c: &mut Criterion) {
    c.bench_function("to_civil_utc_and_local", |b| {
        b.iter(|| {
            let epoch = black_box(1_704_067_200u32);
            (to_civil(epoch), to_civil(apply_offset(epoch, 7)))
        })
    });
}

criterion_group!(
    benches,
    bench_encode_request,
    bench_decode_reply,
    bench_packet_from_bytes,
    bench_to_civil
);
criterion_main!(benches);
