// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

// Embedded / no_std codec demo
//
// Walks through the API a firmware build uses with `default-features = false`:
// a stack-allocated request, decoding the transmit seconds out of a receive
// buffer, and the calendar fields drawn on the screen. Nothing here touches
// the heap or `std::io`.
//
// Usage:
//   cargo run -p ntp_clock-proto --example embedded_nostd

use clock_proto::error::ParseError;
use clock_proto::protocol::{FromBytes, PACKET_SIZE, Packet};
use clock_proto::{WeekdayLabels, apply_offset, decode_reply, encode_request, to_civil};

const UTC_OFFSET_HOURS: i32 = 7;

fn main() {
    println!("=== no_std NTP clock codec ===");
    println!();

    // ── 1. Request ─────────────────────────────────────────────────────
    let request = encode_request();
    println!("Request ({} bytes):", request.len());
    println!(
        "  LI/VN/Mode {:#04x}  stratum {}  poll {}  precision {:#04x}",
        request[0], request[1], request[2], request[3]
    );
    println!(
        "  reference id {:?}",
        core::str::from_utf8(&request[12..16]).unwrap_or("?")
    );
    println!();

    // ── 2. Reply as it would sit in the transceiver's receive buffer ───
    let mut rx_buf = [0u8; PACKET_SIZE];
    rx_buf[0] = 0x24; // LI 0, version 4, server
    rx_buf[1] = 2;
    rx_buf[40..44].copy_from_slice(&3_913_054_800u32.to_be_bytes());

    let (header, _) = Packet::from_bytes(&rx_buf).expect("full header");
    println!(
        "Reply header: mode {:?}, stratum {}",
        header.mode, header.stratum.0
    );

    let epoch = decode_reply(&rx_buf).expect("reply has transmit seconds");
    println!("Unix seconds: {}", epoch);
    println!();

    // ── 3. Civil time for both screen regions ──────────────────────────
    let utc = to_civil(epoch);
    let local = to_civil(apply_offset(epoch, UTC_OFFSET_HOURS));
    for (title, t) in [("UTC", utc), ("UTC+7", local)] {
        println!(
            "  {:<6} [{}] {}  {}",
            title,
            WeekdayLabels::Vietnamese.label(t.weekday),
            t.date_line(),
            t.clock_line()
        );
    }
    println!();

    // ── 4. Truncated datagrams are reported, never panicked on ─────────
    match decode_reply(&rx_buf[..20]) {
        Err(ParseError::MalformedReply { needed, available }) => {
            println!("Truncated reply rejected: needed {needed}, got {available}");
        }
        other => panic!("expected MalformedReply, got {:?}", other),
    }
}
