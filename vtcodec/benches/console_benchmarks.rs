//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Benchmarks for ConsoleDecoder throughput

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vtscrape_terminal::VirtualScreen;
use vtscrape_vtcodec::ConsoleDecoder;

fn menu_screen() -> Vec<u8> {
    let mut bytes = b"\x1b[2J\x1b[H".to_vec();
    for row in 1..=20 {
        bytes.extend_from_slice(format!("\x1b[{row};5H\x1b[1m{row:>2}\x1b[0m  OPTION {row}\r\n").as_bytes());
    }
    bytes.extend_from_slice(b"\x1b[23;1HSELECT OPTION: ");
    bytes
}

// Benchmark decoding plain text
fn bench_decode_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_plain_text");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);
            let mut decoder = ConsoleDecoder::new();
            let mut screen = VirtualScreen::create(24, 80, ' ');

            b.iter(|| {
                for byte in black_box(text.as_bytes()) {
                    black_box(decoder.next(*byte, &mut screen));
                }
            });
        });
    }
    group.finish();
}

// Benchmark decoding a full menu screen with positioning and styles
fn bench_decode_menu_screen(c: &mut Criterion) {
    let bytes = menu_screen();
    let mut group = c.benchmark_group("decode_menu_screen");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("menu", |b| {
        let mut decoder = ConsoleDecoder::new();
        let mut screen = VirtualScreen::create(24, 80, ' ');

        b.iter(|| {
            for byte in black_box(&bytes) {
                decoder.next(*byte, &mut screen);
            }
            black_box(screen.cursor());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode_plain_text, bench_decode_menu_screen);
criterion_main!(benches);
