//! Section types - the structural blocks an answer is made of.

/// Heading level, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct HeadingLevel(u8);

/// Error for a heading level outside 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

impl HeadingLevel {
    /// Shallowest heading level.
    pub const MIN: u8 = 1;
    /// Deepest heading level.
    pub const MAX: u8 = 6;
    /// The level produced for bold-wrapped heading lines.
    pub const SECTION: HeadingLevel = HeadingLevel(2);

    /// Create a heading level, rejecting values outside 1..=6.
    pub fn new(level: u8) -> Result<Self, InvalidHeadingLevel> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidHeadingLevel(level))
        }
    }

    /// Create a heading level, clamping into the valid range.
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Get the numeric level.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One structural block of a segmented answer.
///
/// With the `serde` feature, sections serialize as
/// `{"type": "heading", "content": "...", "level": 2}`, with list items
/// under `content` as well.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Section {
    /// A heading line.
    Heading { content: String, level: HeadingLevel },
    /// Running text.
    Paragraph { content: String },
    /// A bulleted list.
    List {
        #[cfg_attr(feature = "serde", serde(rename = "content"))]
        items: Vec<String>,
    },
    /// A numbered list.
    NumberedList {
        #[cfg_attr(feature = "serde", serde(rename = "content"))]
        items: Vec<String>,
    },
}

impl Section {
    /// Create a heading.
    pub fn heading(level: HeadingLevel, content: impl Into<String>) -> Self {
        Section::Heading {
            content: content.into(),
            level,
        }
    }

    /// Create a paragraph.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Section::Paragraph {
            content: content.into(),
        }
    }

    /// Create a bulleted list.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Section::List {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a numbered list.
    pub fn numbered_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Section::NumberedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Short name of the section type.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Heading { .. } => "heading",
            Section::Paragraph { .. } => "paragraph",
            Section::List { .. } => "list",
            Section::NumberedList { .. } => "numbered-list",
        }
    }

    /// Text of a heading or paragraph.
    pub fn text(&self) -> Option<&str> {
        match self {
            Section::Heading { content, .. } | Section::Paragraph { content } => Some(content),
            Section::List { .. } | Section::NumberedList { .. } => None,
        }
    }

    /// Items of a bulleted or numbered list.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Section::List { items } | Section::NumberedList { items } => Some(items),
            Section::Heading { .. } | Section::Paragraph { .. } => None,
        }
    }

    /// Apply `f` to every textual payload (heading/paragraph content, each item).
    pub fn map_text<F>(self, mut f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        match self {
            Section::Heading { content, level } => Section::Heading {
                content: f(content),
                level,
            },
            Section::Paragraph { content } => Section::Paragraph { content: f(content) },
            Section::List { items } => Section::List {
                items: items.into_iter().map(f).collect(),
            },
            Section::NumberedList { items } => Section::NumberedList {
                items: items.into_iter().map(f).collect(),
            },
        }
    }
}
