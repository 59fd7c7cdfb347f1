#![no_main]

use libfuzzer_sys::fuzz_target;
use na_item::{BigEndian, read_item, write_item};

fuzz_target!(|data: &[u8]| {
    let Ok(item) = read_item::<BigEndian>(data) else {
        return;
    };
    // Lossy string decoding can grow a string past the u16 length prefix.
    let Ok(bytes) = write_item::<BigEndian>(&item) else {
        return;
    };
    let again = read_item::<BigEndian>(&bytes).unwrap();
    assert_eq!(bytes, write_item::<BigEndian>(&again).unwrap());
});
