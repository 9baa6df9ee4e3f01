#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: MschHeader::read_from with arbitrary bytes.
//
// Catches bugs in:
// - Signature validation
// - Version checking
// - Truncated header handling
fuzz_target!(|data: &[u8]| {
    let _ = msch_wire::header::MschHeader::read_from(data);
});
