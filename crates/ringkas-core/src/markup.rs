//! Emphasis marker scanning.
//!
//! A delimited run is an opening delimiter, one or more characters that do
//! not include a line break, and the nearest closing delimiter after the
//! first inner character. Scanning is by character, never backtracking past
//! the opening position.

/// Strong emphasis delimiter.
pub const STRONG: &str = "**";
/// Emphasis delimiter.
pub const EMPHASIS: &str = "*";

/// Byte offsets of a delimited run inside some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited {
    /// Start of the opening delimiter.
    pub start: usize,
    /// Start of the inner text.
    pub inner_start: usize,
    /// End of the inner text (start of the closing delimiter).
    pub inner_end: usize,
    /// End of the closing delimiter.
    pub end: usize,
}

impl Delimited {
    /// The inner text.
    pub fn inner<'a>(&self, text: &'a str) -> &'a str {
        &text[self.inner_start..self.inner_end]
    }

    /// Whatever follows the closing delimiter.
    pub fn tail<'a>(&self, text: &'a str) -> &'a str {
        &text[self.end..]
    }
}

/// Whitespace in answer text: Unicode white space without NEL (U+0085),
/// plus the byte order mark (U+FEFF).
pub fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Trim [`is_space`] characters from both ends.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Trim [`is_space`] characters from the start.
pub fn trim_start(text: &str) -> &str {
    text.trim_start_matches(is_space)
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Match a delimited run opening exactly at byte offset `pos`.
///
/// `pos` must be a char boundary of `text`.
pub fn delimited_at(text: &str, pos: usize, delim: &str) -> Option<Delimited> {
    let rest = &text[pos..];
    if delim.is_empty() || !rest.starts_with(delim) {
        return None;
    }

    let inner_start = pos + delim.len();
    let first = text[inner_start..].chars().next()?;
    if is_line_break(first) {
        return None;
    }

    let mut cursor = inner_start + first.len_utf8();
    loop {
        if text[cursor..].starts_with(delim) {
            return Some(Delimited {
                start: pos,
                inner_start,
                inner_end: cursor,
                end: cursor + delim.len(),
            });
        }
        let c = text[cursor..].chars().next()?;
        if is_line_break(c) {
            return None;
        }
        cursor += c.len_utf8();
    }
}

/// Find the leftmost delimited run starting at or after byte offset `from`.
pub fn find_delimited(text: &str, from: usize, delim: &str) -> Option<Delimited> {
    text[from..]
        .char_indices()
        .find_map(|(i, _)| delimited_at(text, from + i, delim))
}

/// Replace every non-overlapping delimited run with its inner text.
pub fn strip_delimited(text: &str, delim: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut from = 0;
    while let Some(run) = find_delimited(text, from, delim) {
        out.push_str(&text[from..run.start]);
        out.push_str(run.inner(text));
        from = run.end;
    }
    out.push_str(&text[from..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space() {
        assert!(is_space(' '));
        assert!(is_space('\u{A0}'));
        assert!(is_space('\u{FEFF}'));
        assert!(!is_space('\u{85}'));
        assert!(!is_space('x'));
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("\u{FEFF} a \u{3000}"), "a");
        assert_eq!(trim("a\u{85}"), "a\u{85}");
        assert_eq!(trim_start("\u{FEFF}\ta "), "a ");
    }

    #[test]
    fn test_delimited_at_start() {
        let text = "**Ringkasan** lanjut";
        let run = delimited_at(text, 0, STRONG).unwrap();
        assert_eq!(run.inner(text), "Ringkasan");
        assert_eq!(run.tail(text), " lanjut");
    }

    #[test]
    fn test_delimited_is_non_greedy() {
        let text = "**a** and **b**";
        let run = delimited_at(text, 0, STRONG).unwrap();
        assert_eq!(run.inner(text), "a");
    }

    #[test]
    fn test_delimited_needs_inner_char() {
        assert_eq!(delimited_at("****", 0, STRONG), None);
        let text = "*****";
        assert_eq!(delimited_at(text, 0, STRONG).unwrap().inner(text), "*");
    }

    #[test]
    fn test_delimited_stops_at_line_break() {
        assert_eq!(delimited_at("**open\nclose**", 0, STRONG), None);
        assert_eq!(delimited_at("**unterminated", 0, STRONG), None);
    }

    #[test]
    fn test_find_delimited_skips_ahead() {
        let text = "nilai *123*";
        let run = find_delimited(text, 0, EMPHASIS).unwrap();
        assert_eq!(run.start, 6);
        assert_eq!(run.inner(text), "123");
    }

    #[test]
    fn test_strip_delimited() {
        assert_eq!(strip_delimited("**a** dan **b**", STRONG), "a dan b");
        assert_eq!(strip_delimited("2 * 3 = 6", EMPHASIS), "2 * 3 = 6");
        assert_eq!(strip_delimited("2 * 3 * 4", EMPHASIS), "2  3  4");
        assert_eq!(strip_delimited("tanpa penanda", STRONG), "tanpa penanda");
        assert_eq!(strip_delimited("*sisa", EMPHASIS), "*sisa");
    }

    #[test]
    fn test_strip_delimited_multibyte() {
        assert_eq!(strip_delimited("•*é*•", EMPHASIS), "•é•");
    }
}
