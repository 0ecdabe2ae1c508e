//! JSON writer for ringkas.
//!
//! Serializes the section list of an answer for web clients:
//!
//! ```json
//! [
//!   {"type": "heading", "content": "Ringkasan", "level": 2},
//!   {"type": "paragraph", "content": "Isi singkat."},
//!   {"type": "list", "content": ["Poin satu", "Poin dua"]},
//!   {"type": "numbered-list", "content": ["Pertama", "Kedua"]}
//! ]
//! ```
//!
//! An answer with no sections serializes as `[]`; the client shows the raw
//! text itself in that case.

use std::borrow::Cow;

use ringkas_core::{Answer, ConversionResult, EmitError, EmitOptions, Emitter, Section};
use ringkas_transforms::clean;

/// Emit an answer's sections as compact JSON.
pub fn emit(answer: &Answer) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    emit_with_options(answer, &EmitOptions::default())
}

/// Emit an answer's sections as JSON with custom options.
pub fn emit_with_options(
    answer: &Answer,
    options: &EmitOptions,
) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    let sections: Cow<[Section]> = if options.raw_markup {
        Cow::Borrowed(answer.sections.as_slice())
    } else {
        Cow::Owned(
            answer
                .sections
                .iter()
                .cloned()
                .map(|s| s.map_text(|text| clean(&text)))
                .collect(),
        )
    };

    let json = if options.pretty {
        serde_json::to_vec_pretty(sections.as_ref())
    } else {
        serde_json::to_vec(sections.as_ref())
    }
    .map_err(|e| EmitError::Serialize(e.to_string()))?;

    tracing::trace!(bytes = json.len(), "emitted section json");
    Ok(ConversionResult::ok(json))
}

/// [`Emitter`] implementation for use behind a trait object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn formats(&self) -> &[&str] {
        &["json"]
    }

    fn emit(
        &self,
        answer: &Answer,
        options: &EmitOptions,
    ) -> Result<ConversionResult<Vec<u8>>, EmitError> {
        emit_with_options(answer, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn emit_value(input: &str, options: &EmitOptions) -> Value {
        let answer = ringkas_segment::parse(input).value;
        let result = emit_with_options(&answer, options).unwrap();
        serde_json::from_slice(&result.value).unwrap()
    }

    #[test]
    fn test_emit_shape() {
        let value = emit_value(
            "**Ringkasan**\nIsi singkat.\n\nPoin:\n- satu\n\n1. a",
            &EmitOptions::default(),
        );
        assert_eq!(
            value,
            json!([
                {"type": "heading", "content": "Ringkasan", "level": 2},
                {"type": "paragraph", "content": "Isi singkat."},
                {"type": "paragraph", "content": "Poin:"},
                {"type": "list", "content": ["satu"]},
                {"type": "numbered-list", "content": ["a"]},
            ])
        );
    }

    #[test]
    fn test_emit_cleans_unless_raw() {
        let cleaned = emit_value("nilai *123*", &EmitOptions::default());
        assert_eq!(cleaned, json!([{"type": "paragraph", "content": "nilai 123"}]));

        let raw = emit_value(
            "nilai *123*",
            &EmitOptions {
                raw_markup: true,
                ..Default::default()
            },
        );
        assert_eq!(raw, json!([{"type": "paragraph", "content": "nilai *123*"}]));
    }

    #[test]
    fn test_emit_empty() {
        let result = emit(&Answer::new()).unwrap();
        assert_eq!(result.value, b"[]");
    }

    #[test]
    fn test_emit_pretty() {
        let answer = Answer::new().with_sections(vec![Section::paragraph("x")]);
        let options = EmitOptions {
            pretty: true,
            ..Default::default()
        };
        let text = String::from_utf8(emit_with_options(&answer, &options).unwrap().value).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("\"type\": \"paragraph\""));
    }

    #[test]
    fn test_deserializes_back() {
        let answer = ringkas_segment::parse("**H**\n\n- a\n- b").value;
        let bytes = emit(&answer).unwrap().value;
        let sections: Vec<Section> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(sections, answer.sections);
    }
}
