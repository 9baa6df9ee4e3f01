#![no_main]

use libfuzzer_sys::fuzz_target;
use msch_wire::{pack, unpack};

// Fuzz target: unpack -> pack is the identity on every u32.
fuzz_target!(|packed: u32| {
    let position = unpack(packed);
    assert_eq!(pack(position.x, position.y), Some(packed));
});
