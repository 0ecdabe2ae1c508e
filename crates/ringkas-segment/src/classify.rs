//! Block classification.
//!
//! Each block is matched against an ordered chain of rules and read by the
//! first rule that applies: heading, bulleted list, numbered list, then
//! plain paragraph. A block is never read by more than one rule.

use ringkas_core::markup::{self, Delimited};
use ringkas_core::{FidelityWarning, HeadingLevel, Location, Section, Severity, WarningKind};

/// Classify one block into sections.
///
/// A block yields at most two sections: a heading or intro paragraph, then a
/// trailing paragraph or list.
pub fn classify(block: &str) -> Vec<Section> {
    let mut classifier = Classifier::new(false);
    let mut sections = Vec::new();
    classifier.classify_block(0, block, &mut sections);
    sections
}

/// List marker flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListMarker {
    /// `-`, `•` or `*` followed by whitespace.
    Bullet,
    /// ASCII digits, `.`, whitespace.
    Number,
}

impl ListMarker {
    /// If `line` starts with this marker, return the item text after it.
    fn item(self, line: &str) -> Option<&str> {
        let rest = match self {
            ListMarker::Bullet => line.strip_prefix(['-', '•', '*'])?,
            ListMarker::Number => {
                let digits = line.len()
                    - line
                        .trim_start_matches(|c: char| c.is_ascii_digit())
                        .len();
                if digits == 0 {
                    return None;
                }
                line[digits..].strip_prefix('.')?
            }
        };

        // At least one whitespace character must follow the marker.
        let body = markup::trim_start(rest);
        (body.len() < rest.len()).then(|| markup::trim(body))
    }

    fn section(self, items: Vec<String>) -> Section {
        match self {
            ListMarker::Bullet => Section::List { items },
            ListMarker::Number => Section::NumberedList { items },
        }
    }
}

/// Which rule reads a block.
enum Rule {
    Heading(Delimited),
    List(ListMarker),
    Paragraph,
}

impl Rule {
    fn select(lines: &[&str]) -> Self {
        if let Some(first) = lines.first()
            && let Some(run) = markup::delimited_at(first, 0, markup::STRONG)
        {
            return Rule::Heading(run);
        }
        if lines.iter().any(|l| ListMarker::Bullet.item(l).is_some()) {
            return Rule::List(ListMarker::Bullet);
        }
        if lines.iter().any(|l| ListMarker::Number.item(l).is_some()) {
            return Rule::List(ListMarker::Number);
        }
        Rule::Paragraph
    }
}

/// Classifier state: only the warnings collected so far.
pub(crate) struct Classifier {
    collect_warnings: bool,
    warnings: Vec<FidelityWarning>,
}

impl Classifier {
    pub(crate) fn new(collect_warnings: bool) -> Self {
        Self {
            collect_warnings,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn into_warnings(self) -> Vec<FidelityWarning> {
        self.warnings
    }

    fn warn(&mut self, warning: FidelityWarning) {
        if self.collect_warnings {
            self.warnings.push(warning);
        }
    }

    /// Classify the block at `index`, appending its sections to `out`.
    pub(crate) fn classify_block(&mut self, index: usize, block: &str, out: &mut Vec<Section>) {
        let lines: Vec<&str> = block
            .split('\n')
            .map(markup::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let before = out.len();
        match Rule::select(&lines) {
            Rule::Heading(run) => self.read_heading(index, &lines, run, out),
            Rule::List(marker) => self.read_list(index, &lines, marker, out),
            Rule::Paragraph => push_paragraph(lines.join(" "), out),
        }

        tracing::debug!(
            block = index,
            lines = lines.len(),
            sections = ?out[before..].iter().map(Section::kind).collect::<Vec<_>>(),
            "classified block"
        );
    }

    fn read_heading(
        &mut self,
        index: usize,
        lines: &[&str],
        run: Delimited,
        out: &mut Vec<Section>,
    ) {
        let first = lines[0];
        out.push(Section::heading(HeadingLevel::SECTION, markup::trim(run.inner(first))));

        let tail = markup::trim(run.tail(first));
        if !tail.is_empty() {
            self.warn(
                FidelityWarning::new(
                    Severity::Minor,
                    WarningKind::HeadingTail(tail.to_string()),
                    format!("text after heading marker dropped: {tail:?}"),
                )
                .at(Location { block: index, line: 0 }),
            );
        }

        push_paragraph(lines[1..].join(" "), out);
    }

    fn read_list(
        &mut self,
        index: usize,
        lines: &[&str],
        marker: ListMarker,
        out: &mut Vec<Section>,
    ) {
        let mut intro: Vec<&str> = Vec::new();
        let mut items: Vec<String> = Vec::new();

        for (i, &line) in lines.iter().enumerate() {
            if let Some(item) = marker.item(line) {
                items.push(item.to_string());
            } else if items.is_empty() {
                intro.push(line);
            } else {
                tracing::debug!(block = index, line = i, "dropping line after list item");
                self.warn(
                    FidelityWarning::new(
                        Severity::Minor,
                        WarningKind::DroppedLine(line.to_string()),
                        format!("line after list item dropped: {line:?}"),
                    )
                    .at(Location { block: index, line: i }),
                );
            }
        }

        if marker == ListMarker::Bullet
            && lines.iter().any(|l| ListMarker::Number.item(l).is_some())
        {
            self.warn(
                FidelityWarning::new(
                    Severity::Info,
                    WarningKind::MixedMarkers,
                    "numbered lines in a bulleted block read as plain lines",
                )
                .at(Location { block: index, line: 0 }),
            );
        }

        push_paragraph(intro.join(" "), out);
        if !items.is_empty() {
            out.push(marker.section(items));
        }
    }
}

fn push_paragraph(text: String, out: &mut Vec<Section>) {
    let text = markup::trim(&text);
    if !text.is_empty() {
        out.push(Section::paragraph(text));
    }
}
