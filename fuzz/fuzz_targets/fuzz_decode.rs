#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = vindecode::decode(s);
        let vin = vindecode::Vin::new(s);
        let _ = vin.region();
        let _ = vin.country();
        let _ = vin.sequential_number();
    }
});
