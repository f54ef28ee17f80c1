#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Repair is a one-for-one substitution over the uppercased input.
        let upper = s.to_uppercase();
        let once = vindecode::repair(s);
        assert_eq!(once.chars().count(), upper.chars().count());
        assert!(!once.contains(['I', 'O', 'Q']));
    }
});
