#![no_main]

use libfuzzer_sys::fuzz_target;
use ringkas_core::markup;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let cleaned = ringkas_transforms::clean(s);
        assert_eq!(markup::trim(&cleaned), cleaned);
        assert!(cleaned.len() <= s.len());

        let fallback = ringkas_transforms::raw_fallback(s);
        assert!(
            fallback.is_empty()
                || fallback
                    .split('\n')
                    .all(|line| !line.is_empty() && markup::trim(line) == line)
        );
    }
});
