#![no_main]

use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};
use libfuzzer_sys::fuzz_target;
use msch_wire::MSCH_MAGIC;

// Fuzz target: arbitrary uncompressed bodies behind a valid header.
//
// The first input byte picks the format version, the rest is compressed
// so the fuzzer spends its time in body parsing rather than in zlib.
fuzz_target!(|data: &[u8]| {
    let Some((&version, body)) = data.split_first() else {
        return;
    };

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(body).unwrap();
    let compressed = encoder.finish().unwrap();

    let mut payload = MSCH_MAGIC.to_vec();
    payload.push(version & 1);
    payload.extend_from_slice(&compressed);

    let _ = msch_decoder::SchematicDecoder::decode(&payload);
});
