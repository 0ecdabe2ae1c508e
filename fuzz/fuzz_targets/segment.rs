#![no_main]

use libfuzzer_sys::fuzz_target;
use ringkas_core::Section;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let normalized = ringkas_segment::normalize(s);
        assert_eq!(
            ringkas_segment::normalize(&normalized),
            normalized,
            "normalize is not idempotent"
        );
        assert!(!normalized.contains("\n\n\n"));

        for block in ringkas_segment::split_blocks(&normalized) {
            assert!(!block.trim().is_empty());
        }

        let result = ringkas_segment::parse(s);
        for section in &result.value.sections {
            // Lines are joined with spaces, so no payload spans lines.
            match section {
                Section::Heading { content, .. } | Section::Paragraph { content } => {
                    assert!(!content.contains('\n'));
                }
                Section::List { items } | Section::NumberedList { items } => {
                    assert!(!items.is_empty());
                    assert!(items.iter().all(|item| !item.contains('\n')));
                }
            }
        }

        assert_eq!(ringkas_segment::segment(s), result.value.sections);
    }
});
