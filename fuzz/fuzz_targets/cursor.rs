#![no_main]

use libfuzzer_sys::fuzz_target;
use msch_wire::Cursor;

// Fuzz target: interleaved cursor reads over arbitrary bytes.
//
// Successful reads always advance, and the offset never passes the end
// of the buffer.
fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    let mut step = 0usize;
    while !cursor.is_empty() {
        let before = cursor.offset();
        let ok = match step % 4 {
            0 => cursor.read_u8().is_ok(),
            1 => cursor.read_u16().is_ok(),
            2 => cursor.read_u32().is_ok(),
            _ => cursor.read_prefixed_string().is_ok(),
        };
        assert!(cursor.offset() <= data.len());
        if !ok {
            break;
        }
        assert!(cursor.offset() > before);
        step += 1;
    }
});
