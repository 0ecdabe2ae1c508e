//! Ringkas - structured rendering for AI answers
//!
//! AI backends answer in loosely formatted text: a bold line here, a few
//! dash bullets there. Ringkas segments that text into a flat list of
//! sections so it can be shown consistently:
//! - `**Bold line**` at the start of a block becomes a heading
//! - blocks with `-`, `•` or `*` bullet lines become lists
//! - blocks with `1.` style lines become numbered lists
//! - everything else is a paragraph
//!
//! # Quick Start
//!
//! ```rust
//! let answer = ringkas::parse("**Ringkasan**\nIsi singkat.\n\n- satu\n- dua").value;
//! assert_eq!(answer.sections.len(), 3);
//!
//! let html = ringkas::html::emit(&answer).unwrap();
//! let html_str = String::from_utf8(html.value).unwrap();
//!
//! assert!(html_str.starts_with("<h2>Ringkasan</h2>"));
//! ```
//!
//! # Features
//!
//! - `html` - HTML writer (default)
//! - `plaintext` - Plain text writer (default)
//! - `json` - JSON section writer for web clients (default)
//! - `all` - Enable all formats
//!
//! # Architecture
//!
//! Segmenting never fails. Lines the segmenter has to drop are reported as
//! [`FidelityWarning`]s on the returned [`ConversionResult`]. Emphasis
//! markers stay in section text until a writer renders it.

// Re-export core types
pub use ringkas_core::*;

pub use ringkas_segment::{parse, parse_with_options, segment};

/// Segmenting stages, for callers that want them individually.
pub mod segmenter {
    pub use ringkas_segment::{classify, normalize, split_blocks};
}

/// Text cleaning and answer transforms.
pub mod transforms {
    pub use ringkas_transforms::*;
}

/// HTML format support.
#[cfg(feature = "html")]
pub mod html {
    pub use ringkas_write_html::HtmlEmitter;
    pub use ringkas_write_html::emit;
    pub use ringkas_write_html::emit_full_document;
    pub use ringkas_write_html::emit_with_options;
}

/// Plain text format support.
#[cfg(feature = "plaintext")]
pub mod plaintext {
    pub use ringkas_write_plaintext::PlaintextEmitter;
    pub use ringkas_write_plaintext::emit;
    pub use ringkas_write_plaintext::emit_with_options;
}

/// JSON format support.
#[cfg(feature = "json")]
pub mod json {
    pub use ringkas_write_json::JsonEmitter;
    pub use ringkas_write_json::emit;
    pub use ringkas_write_json::emit_with_options;
}

/// Every emitter compiled into this build.
pub fn emitters() -> Vec<Box<dyn Emitter>> {
    #[allow(unused_mut)]
    let mut emitters: Vec<Box<dyn Emitter>> = Vec::new();
    #[cfg(feature = "html")]
    emitters.push(Box::new(html::HtmlEmitter::default()));
    #[cfg(feature = "plaintext")]
    emitters.push(Box::new(plaintext::PlaintextEmitter));
    #[cfg(feature = "json")]
    emitters.push(Box::new(json::JsonEmitter));
    emitters
}

/// Find the emitter registered for `format`.
pub fn emitter_for(format: &str) -> Result<Box<dyn Emitter>, EmitError> {
    emitters()
        .into_iter()
        .find(|e| e.formats().contains(&format))
        .ok_or_else(|| EmitError::UnsupportedFormat(format.to_string()))
}

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        Answer, ConversionResult, EmitOptions, Emitter, FidelityWarning, HeadingLevel, Section,
        Transformer,
    };
    pub use crate::{parse, segment};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "html")]
    fn test_answer_to_html() {
        let answer = parse("**Hasil**\nSemua *baik*.\n\n1. satu\n2. dua").value;
        let html = html::emit(&answer).unwrap();
        let html_str = String::from_utf8(html.value).unwrap();

        assert_eq!(
            html_str,
            "<h2>Hasil</h2><p>Semua baik.</p><ol><li>satu</li><li>dua</li></ol>"
        );
    }

    #[test]
    #[cfg(feature = "plaintext")]
    fn test_answer_to_plaintext() {
        let answer = parse("Paragraf pertama.\n\n- a\n- b").value;
        let text = plaintext::emit(&answer).unwrap();
        assert_eq!(
            String::from_utf8(text.value).unwrap(),
            "Paragraf pertama.\n\n- a\n- b\n"
        );
    }

    #[test]
    #[cfg(feature = "html")]
    fn test_emitter_for() {
        let emitter = emitter_for("html").unwrap();
        let result = emitter
            .emit(&parse("x").value, &EmitOptions::default())
            .unwrap();
        assert_eq!(result.value, b"<p>x</p>");
    }

    #[test]
    fn test_emitter_for_unknown() {
        let err = emitter_for("docx").err().unwrap();
        assert!(matches!(err, EmitError::UnsupportedFormat(f) if f == "docx"));
    }

    #[test]
    fn test_segmenter_stages() {
        let normalized = segmenter::normalize("a\r\n\r\n\r\nb");
        assert_eq!(normalized, "a\n\nb");
        assert_eq!(segmenter::split_blocks(&normalized), vec!["a", "b"]);
    }
}
