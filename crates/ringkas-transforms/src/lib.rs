//! Render-time text cleaning and answer transformers for ringkas.
//!
//! This crate provides:
//! - [`clean`], which strips emphasis markers and collapses whitespace in a
//!   single piece of section text
//! - [`raw_fallback`], the line-preserving text shown for answers that
//!   segmented into no sections
//! - transformers over whole answers (cleaning, heading level shifts,
//!   empty section removal) and a pipeline to chain them

mod clean;

pub use clean::{clean, raw_fallback};

use ringkas_core::{Answer, HeadingLevel, Section, TransformError, Transformer, markup};

/// Apply [`clean`] to every heading, paragraph and list item.
pub struct CleanContent;

impl Transformer for CleanContent {
    fn name(&self) -> &str {
        "clean_content"
    }

    fn transform(&self, answer: Answer) -> Result<Answer, TransformError> {
        Ok(map_text(answer, |text| clean(&text)))
    }
}

/// Shift all heading levels by a fixed amount.
///
/// Useful when answers are embedded under a page that already has its own
/// top-level headings.
pub struct ShiftHeadings {
    /// Amount to shift (positive = deeper, negative = shallower).
    pub delta: i64,
    /// Minimum heading level (default: 1).
    pub min_level: u8,
    /// Maximum heading level (default: 6).
    pub max_level: u8,
}

impl ShiftHeadings {
    /// Create a new heading shifter.
    pub fn new(delta: i64) -> Self {
        Self {
            delta,
            min_level: HeadingLevel::MIN,
            max_level: HeadingLevel::MAX,
        }
    }

    /// Set the minimum heading level.
    pub fn with_min(mut self, min: u8) -> Self {
        self.min_level = min;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max(mut self, max: u8) -> Self {
        self.max_level = max;
        self
    }

    fn shift(&self, level: HeadingLevel) -> HeadingLevel {
        let min = self.min_level.clamp(HeadingLevel::MIN, HeadingLevel::MAX) as i64;
        let max = (self.max_level.clamp(HeadingLevel::MIN, HeadingLevel::MAX) as i64).max(min);
        HeadingLevel::clamped((level.get() as i64 + self.delta).clamp(min, max))
    }
}

impl Transformer for ShiftHeadings {
    fn name(&self) -> &str {
        "shift_headings"
    }

    fn transform(&self, mut answer: Answer) -> Result<Answer, TransformError> {
        for section in &mut answer.sections {
            if let Section::Heading { level, .. } = section {
                *level = self.shift(*level);
            }
        }
        Ok(answer)
    }
}

/// Remove blank headings, paragraphs and list items, and lists left empty.
///
/// An answer emptied this way also loses its normalized text, so writers
/// render nothing instead of the raw fallback.
pub struct StripEmpty;

impl StripEmpty {
    fn strip(section: Section) -> Option<Section> {
        match section {
            Section::Heading { .. } | Section::Paragraph { .. } => {
                let keep = section.text().is_some_and(|t| !markup::trim(t).is_empty());
                keep.then_some(section)
            }
            Section::List { items } => {
                let items = Self::strip_items(items);
                (!items.is_empty()).then_some(Section::List { items })
            }
            Section::NumberedList { items } => {
                let items = Self::strip_items(items);
                (!items.is_empty()).then_some(Section::NumberedList { items })
            }
        }
    }

    fn strip_items(items: Vec<String>) -> Vec<String> {
        items
            .into_iter()
            .filter(|item| !markup::trim(item).is_empty())
            .collect()
    }
}

impl Transformer for StripEmpty {
    fn name(&self) -> &str {
        "strip_empty"
    }

    fn transform(&self, mut answer: Answer) -> Result<Answer, TransformError> {
        let before = answer.sections.len();
        answer.sections = answer
            .sections
            .into_iter()
            .filter_map(Self::strip)
            .collect();
        tracing::trace!(
            removed = before - answer.sections.len(),
            "stripped empty sections"
        );
        if before > 0 && answer.sections.is_empty() {
            answer.normalized.clear();
        }
        Ok(answer)
    }
}

/// A transform pipeline that applies multiple transforms in sequence.
pub struct Pipeline {
    transforms: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    pub fn then<T: Transformer + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Number of transforms in the pipeline.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Check if the pipeline has no transforms.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformer for Pipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn transform(&self, mut answer: Answer) -> Result<Answer, TransformError> {
        for transform in &self.transforms {
            tracing::trace!(transform = transform.name(), "applying transform");
            answer = transform.transform(answer)?;
        }
        Ok(answer)
    }
}

/// Map a function over every textual payload of an answer.
pub fn map_text<F>(mut answer: Answer, mut f: F) -> Answer
where
    F: FnMut(String) -> String,
{
    answer.sections = answer
        .sections
        .into_iter()
        .map(|s| s.map_text(&mut f))
        .collect();
    answer
}
