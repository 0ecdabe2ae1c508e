//! Answer type - the segmented form of one backend answer.

use crate::Section;

/// A segmented answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    /// Sections in source order.
    pub sections: Vec<Section>,
    /// The normalized answer text the sections were read from.
    ///
    /// Writers fall back to this when `sections` is empty.
    pub normalized: String,
}

impl Answer {
    /// Create a new empty answer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sections.
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    /// Set the normalized source text.
    pub fn with_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = normalized.into();
        self
    }

    /// Add a section.
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// True if segmentation produced no sections.
    pub fn is_unstructured(&self) -> bool {
        self.sections.is_empty()
    }
}
