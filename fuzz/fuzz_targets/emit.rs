#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ringkas_core::EmitOptions;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    pretty: bool,
    raw_markup: bool,
}

fuzz_target!(|input: Input| {
    let answer = ringkas_segment::parse(&input.text).value;
    let options = EmitOptions {
        pretty: input.pretty,
        raw_markup: input.raw_markup,
    };

    // None of the writers can fail on a segmented answer.
    let html = ringkas_write_html::emit_with_options(&answer, &options).unwrap();
    assert!(std::str::from_utf8(&html.value).is_ok());
    ringkas_write_html::emit_full_document(&answer, &options).unwrap();
    ringkas_write_plaintext::emit_with_options(&answer, &options).unwrap();

    let json = ringkas_write_json::emit_with_options(&answer, &options).unwrap();
    let sections: Vec<ringkas_core::Section> = serde_json::from_slice(&json.value).unwrap();
    assert_eq!(sections.len(), answer.sections.len());
});
