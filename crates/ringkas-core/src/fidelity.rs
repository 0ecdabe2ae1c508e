//! Fidelity tracking - know what segmentation left out.

/// Result of a segmentation or emit operation, including fidelity warnings.
#[derive(Debug)]
pub struct ConversionResult<T> {
    /// The conversion output.
    pub value: T,
    /// Warnings about text that was dropped or reinterpreted.
    pub warnings: Vec<FidelityWarning>,
}

impl<T> ConversionResult<T> {
    /// Create a successful result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<FidelityWarning>) -> Self {
        Self { value, warnings }
    }

    /// Add a warning.
    pub fn warn(mut self, warning: FidelityWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if any warning means answer text was lost.
    pub fn has_losses(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| w.severity >= Severity::Minor)
    }

    /// Transform the value, keeping the warnings.
    pub fn map<U, F>(self, f: F) -> ConversionResult<U>
    where
        F: FnOnce(T) -> U,
    {
        ConversionResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// A warning about text that did not make it into the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FidelityWarning {
    /// How severe is this warning?
    pub severity: Severity,
    /// What kind of issue?
    pub kind: WarningKind,
    /// Human-readable message.
    pub message: String,
    /// Where in the normalized text this occurred.
    pub location: Option<Location>,
}

impl FidelityWarning {
    /// Create a new warning.
    pub fn new(severity: Severity, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Set the source location.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// Position of a line inside the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Zero-based index of the block.
    pub block: usize,
    /// Zero-based index of the line within the block, counting only non-blank lines.
    pub line: usize,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block {}, line {}", self.block + 1, self.line + 1)
    }
}

/// Severity of a fidelity warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Information only, no text lost.
    Info,
    /// Some answer text is missing from the output.
    Minor,
}

/// Kind of fidelity issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// A plain line after the first list item was dropped.
    DroppedLine(String),
    /// Text after the closing marker of a heading line was dropped.
    HeadingTail(String),
    /// A bulleted block also held numbered lines, which were read as plain lines.
    MixedMarkers,
}
