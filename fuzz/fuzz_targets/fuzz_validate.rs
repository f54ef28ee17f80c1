#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = vindecode::validate_structure(s);
        let checksum = vindecode::verify_checksum(s);
        // checksum success implies 17 characters
        if checksum {
            assert_eq!(s.trim().to_uppercase().chars().count(), 17);
        }
    }
});
