#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full schematic decoder entry point.
//
// Catches bugs in:
// - Signature and version validation
// - zlib inflation and the size limit
// - Tag, block dictionary and tile count parsing
// - Config resolution for both format versions
fuzz_target!(|data: &[u8]| {
    let _ = msch_decoder::SchematicDecoder::decode(data);
});
