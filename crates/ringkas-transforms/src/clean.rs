//! Section text cleaning.

use ringkas_core::markup;

/// Clean one piece of section text for display.
///
/// Strips `**strong**` then `*emphasis*` markers (one pass each, leftmost
/// shortest run first), collapses every whitespace run of two or more
/// characters to a single space, folds blank lines into one line feed and
/// trims the result. Unbalanced markers are left as they are.
pub fn clean(text: &str) -> String {
    let text = markup::strip_delimited(text, markup::STRONG);
    let text = markup::strip_delimited(&text, markup::EMPHASIS);
    let text = collapse_whitespace(&text);
    let text = fold_blank_lines(&text);
    markup::trim(&text).to_string()
}

/// Text shown for an answer that segmented into no sections.
///
/// Blank lines are removed and every remaining line is trimmed; line breaks
/// between the remaining lines are kept.
pub fn raw_fallback(normalized: &str) -> String {
    normalized
        .split('\n')
        .map(markup::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run: Option<(char, usize)> = None;

    for c in text.chars() {
        if markup::is_space(c) {
            run = match run {
                Some((first, n)) => Some((first, n + 1)),
                None => Some((c, 1)),
            };
            continue;
        }
        flush_run(run.take(), &mut out);
        out.push(c);
    }
    flush_run(run, &mut out);

    out
}

fn flush_run(run: Option<(char, usize)>, out: &mut String) {
    match run {
        Some((c, 1)) => out.push(c),
        Some(_) => out.push(' '),
        None => {}
    }
}

/// Replace each line feed, optional whitespace, line feed stretch with one line feed.
fn fold_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(markup::is_space) {
        out.push_str(&rest[..start]);
        let run_len = rest[start..]
            .find(|c: char| !markup::is_space(c))
            .unwrap_or(rest.len() - start);
        let run = &rest[start..start + run_len];

        match (run.find('\n'), run.rfind('\n')) {
            (Some(first), Some(last)) if first != last => {
                out.push_str(&run[..first]);
                out.push('\n');
                out.push_str(&run[last + 1..]);
            }
            _ => out.push_str(run),
        }
        rest = &rest[start + run_len..];
    }
    out.push_str(rest);

    out
}
