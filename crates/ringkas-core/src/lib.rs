//! ringkas-core: Structured representation of AI answers.
//!
//! This crate provides the types an unstructured answer is segmented into,
//! plus the traits shared by the segmenter, transforms and writers.

mod answer;
mod fidelity;
pub mod markup;
mod section;
mod traits;

pub use answer::*;
pub use fidelity::*;
pub use section::*;
pub use traits::*;
