//! Line-ending and blank-line normalization.

use ringkas_core::markup;

/// Normalize raw answer text.
///
/// CRLF and lone CR become LF, runs of three or more line feeds shrink to
/// two (one blank line), and surrounding whitespace is trimmed.
/// `normalize(normalize(s)) == normalize(s)` for every `s`.
pub fn normalize(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut newlines = 0;
    for c in unified.chars() {
        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
        } else {
            newlines = 0;
            out.push(c);
        }
    }

    markup::trim(&out).to_string()
}
