//! Emitter and Transformer traits.

use crate::{Answer, ConversionResult};

/// Options for segmenting.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Report dropped and reinterpreted text as fidelity warnings.
    pub collect_warnings: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            collect_warnings: true,
        }
    }
}

/// Options for emitting.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Pretty-print output where applicable.
    pub pretty: bool,
    /// Emit section text as segmented, without stripping emphasis markers.
    pub raw_markup: bool,
}

/// Error during emitting.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during transformation.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("transform failed: {0}")]
    Failed(String),
}

/// Render an answer to an output format.
pub trait Emitter: Send + Sync {
    /// Formats this emitter can produce.
    fn formats(&self) -> &[&str];

    /// Emit an answer to bytes.
    fn emit(
        &self,
        answer: &Answer,
        options: &EmitOptions,
    ) -> Result<ConversionResult<Vec<u8>>, EmitError>;
}

/// Transform an answer (same sections type, modified content).
pub trait Transformer: Send + Sync {
    /// Name of this transformer.
    fn name(&self) -> &str;

    /// Transform an answer.
    fn transform(&self, answer: Answer) -> Result<Answer, TransformError>;
}
