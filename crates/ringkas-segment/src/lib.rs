//! Answer segmenter for ringkas.
//!
//! Reads the free text an AI backend returns and splits it into headings,
//! paragraphs, bulleted lists and numbered lists. Segmentation is total: any
//! input, including empty text or unbalanced markers, produces a (possibly
//! empty) section list and never an error.
//!
//! Emphasis markers are left in the section text. Stripping them is a render
//! step, see `ringkas-transforms`.

mod blocks;
mod classify;
mod normalize;

pub use blocks::split_blocks;
pub use classify::classify;
pub use normalize::normalize;

use classify::Classifier;
use ringkas_core::{Answer, ConversionResult, ParseOptions, Section};

/// Segment an answer, collecting fidelity warnings.
pub fn parse(input: &str) -> ConversionResult<Answer> {
    parse_with_options(input, &ParseOptions::default())
}

/// Segment an answer with custom options.
pub fn parse_with_options(input: &str, options: &ParseOptions) -> ConversionResult<Answer> {
    let normalized = normalize(input);
    let mut classifier = Classifier::new(options.collect_warnings);
    let mut sections = Vec::new();

    for (index, block) in split_blocks(&normalized).into_iter().enumerate() {
        classifier.classify_block(index, block, &mut sections);
    }

    tracing::debug!(
        input_len = input.len(),
        sections = sections.len(),
        "segmented answer"
    );

    let answer = Answer::new()
        .with_sections(sections)
        .with_normalized(normalized);
    ConversionResult::with_warnings(answer, classifier.into_warnings())
}

/// Segment an answer into sections only.
pub fn segment(input: &str) -> Vec<Section> {
    let normalized = normalize(input);
    split_blocks(&normalized)
        .into_iter()
        .flat_map(classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringkas_core::{HeadingLevel, WarningKind};

    #[test]
    fn test_parse_mixed_answer() {
        let input = "**Ringkasan**\nDokumen membahas anggaran.\n\n\
                     Berikut poin penting:\n- Poin satu\n- Poin dua\n\n\
                     1. Pertama\n2. Kedua\n\n\
                     Ini teks biasa tanpa format khusus.";
        let result = parse(input);

        assert_eq!(
            result.value.sections,
            vec![
                Section::heading(HeadingLevel::SECTION, "Ringkasan"),
                Section::paragraph("Dokumen membahas anggaran."),
                Section::paragraph("Berikut poin penting:"),
                Section::list(["Poin satu", "Poin dua"]),
                Section::numbered_list(["Pertama", "Kedua"]),
                Section::paragraph("Ini teks biasa tanpa format khusus."),
            ]
        );
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_parse_keeps_normalized_text() {
        let result = parse("  a\r\n\r\n\r\nb  ");
        assert_eq!(result.value.normalized, "a\n\nb");
        assert_eq!(result.value.sections.len(), 2);
    }

    #[test]
    fn test_parse_empty() {
        let result = parse("");
        assert!(result.value.is_unstructured());
        assert_eq!(result.value.normalized, "");
    }

    #[test]
    fn test_warning_locations_use_block_index() {
        let result = parse("Pembuka\n\n- a\nlepas");
        assert_eq!(result.warnings.len(), 1);
        let warning = &result.warnings[0];
        assert_eq!(warning.kind, WarningKind::DroppedLine("lepas".into()));
        assert_eq!(warning.location.map(|l| l.block), Some(1));
        assert!(result.has_losses());
    }

    #[test]
    fn test_parse_without_warnings() {
        let options = ParseOptions {
            collect_warnings: false,
        };
        let result = parse_with_options("- a\nlepas", &options);
        assert!(!result.has_warnings());
        assert_eq!(result.value.sections, vec![Section::list(["a"])]);
    }

    #[test]
    fn test_segment_matches_parse() {
        let input = "**H**\n\n- a\n- b\n\nteks";
        assert_eq!(segment(input), parse(input).value.sections);
    }

    #[test]
    fn test_blank_line_runs_give_one_boundary() {
        assert_eq!(
            segment("satu\n\n\n\n\ndua"),
            vec![Section::paragraph("satu"), Section::paragraph("dua")]
        );
    }
}
