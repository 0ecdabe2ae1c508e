//! Plain text writer for ringkas.
//!
//! Emits answers as plain text, stripping emphasis markers but keeping
//! structure through blank lines and list markers.

use ringkas_core::{Answer, ConversionResult, EmitError, EmitOptions, Emitter, Section};
use ringkas_transforms::{clean, raw_fallback};

/// Emit an answer as plain text.
pub fn emit(answer: &Answer) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    emit_with_options(answer, &EmitOptions::default())
}

/// Emit an answer as plain text with custom options.
///
/// With `pretty`, headings are underlined (`=` for level 1, `-` below).
pub fn emit_with_options(
    answer: &Answer,
    options: &EmitOptions,
) -> Result<ConversionResult<Vec<u8>>, EmitError> {
    let mut ctx = EmitContext::new(options);

    if answer.is_unstructured() {
        tracing::trace!("emitting raw fallback");
        ctx.block(&raw_fallback(&answer.normalized));
    } else {
        for section in &answer.sections {
            emit_section(section, &mut ctx);
        }
    }

    let output = if ctx.blocks.is_empty() {
        String::new()
    } else {
        ctx.blocks.join("\n\n") + "\n"
    };
    Ok(ConversionResult::ok(output.into_bytes()))
}

/// [`Emitter`] implementation for use behind a trait object.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextEmitter;

impl Emitter for PlaintextEmitter {
    fn formats(&self) -> &[&str] {
        &["plaintext", "text"]
    }

    fn emit(
        &self,
        answer: &Answer,
        options: &EmitOptions,
    ) -> Result<ConversionResult<Vec<u8>>, EmitError> {
        emit_with_options(answer, options)
    }
}

struct EmitContext<'a> {
    blocks: Vec<String>,
    options: &'a EmitOptions,
}

impl<'a> EmitContext<'a> {
    fn new(options: &'a EmitOptions) -> Self {
        Self {
            blocks: Vec::new(),
            options,
        }
    }

    fn display(&self, text: &str) -> String {
        if self.options.raw_markup {
            text.to_string()
        } else {
            clean(text)
        }
    }

    fn block(&mut self, text: &str) {
        if !text.is_empty() {
            self.blocks.push(text.to_string());
        }
    }
}

fn emit_section(section: &Section, ctx: &mut EmitContext) {
    match section {
        Section::Heading { content, level } => {
            let mut text = ctx.display(content);
            if ctx.options.pretty && !text.is_empty() {
                let rule = if level.get() == 1 { "=" } else { "-" };
                let width = text.chars().count();
                text = format!("{text}\n{}", rule.repeat(width));
            }
            ctx.block(&text);
        }
        Section::Paragraph { content } => {
            let text = ctx.display(content);
            ctx.block(&text);
        }
        Section::List { items } => {
            let lines: Vec<String> = items
                .iter()
                .map(|item| format!("- {}", ctx.display(item)))
                .collect();
            ctx.block(&lines.join("\n"));
        }
        Section::NumberedList { items } => {
            let lines: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, ctx.display(item)))
                .collect();
            ctx.block(&lines.join("\n"));
        }
    }
}
